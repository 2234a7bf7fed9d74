//! ASN.1 structures of the key encodings.
//!
//! Only the fields needed to materialize a key are kept. Optional trailing
//! fields (PKCS#8 attributes and public key, `ECPrivateKey` parameters and
//! public key) are skipped without being interpreted.

use der::{
    Decode, DecodeValue, FixedTag, Header, Reader, Tag,
    asn1::OctetStringRef,
};
use spki::AlgorithmIdentifierRef;

#[cfg(feature = "pem")]
use der::pem::PemLabel;

/// PKCS#8 `PrivateKeyInfo` as described in [RFC 5208 § 5].
///
/// ```text
/// PrivateKeyInfo ::= SEQUENCE {
///   version                   Version,
///   privateKeyAlgorithm       PrivateKeyAlgorithmIdentifier,
///   privateKey                PrivateKey,
///   attributes           [0]  IMPLICIT Attributes OPTIONAL }
/// ```
///
/// [RFC 5208 § 5]: https://datatracker.ietf.org/doc/html/rfc5208#section-5
#[derive(Clone, Debug)]
pub(crate) struct PrivateKeyInfo<'a> {
    pub(crate) version: i64,
    pub(crate) algorithm: AlgorithmIdentifierRef<'a>,
    pub(crate) private_key: &'a [u8],
}

impl PrivateKeyInfo<'_> {
    /// Supported `PrivateKeyInfo` version.
    pub(crate) const VERSION: i64 = 0;
}

impl<'a> DecodeValue<'a> for PrivateKeyInfo<'a> {
    fn decode_value<R: Reader<'a>>(reader: &mut R, header: Header) -> der::Result<Self> {
        reader.read_nested(header.length, |reader| {
            let version = i64::decode(reader)?;
            let algorithm = reader.decode()?;
            let private_key = OctetStringRef::decode(reader)?.as_bytes();
            skip_context_specific(reader)?;

            Ok(Self {
                version,
                algorithm,
                private_key,
            })
        })
    }
}

impl FixedTag for PrivateKeyInfo<'_> {
    const TAG: Tag = Tag::Sequence;
}

#[cfg(feature = "pem")]
impl PemLabel for PrivateKeyInfo<'_> {
    const PEM_LABEL: &'static str = "PRIVATE KEY";
}

/// SEC1 `ECPrivateKey` as described in [RFC 5915 § 3].
///
/// ```text
/// ECPrivateKey ::= SEQUENCE {
///   version        INTEGER { ecPrivkeyVer1(1) } (ecPrivkeyVer1),
///   privateKey     OCTET STRING,
///   parameters [0] ECParameters {{ NamedCurve }} OPTIONAL,
///   publicKey  [1] BIT STRING OPTIONAL
/// }
/// ```
///
/// [RFC 5915 § 3]: https://datatracker.ietf.org/doc/html/rfc5915#section-3
#[derive(Clone, Debug)]
pub(crate) struct EcPrivateKey<'a> {
    pub(crate) version: i64,
    pub(crate) private_key: &'a [u8],
}

impl EcPrivateKey<'_> {
    /// Supported `ECPrivateKey` version.
    pub(crate) const VERSION: i64 = 1;
}

impl<'a> DecodeValue<'a> for EcPrivateKey<'a> {
    fn decode_value<R: Reader<'a>>(reader: &mut R, header: Header) -> der::Result<Self> {
        reader.read_nested(header.length, |reader| {
            let version = i64::decode(reader)?;
            let private_key = OctetStringRef::decode(reader)?.as_bytes();
            skip_context_specific(reader)?;

            Ok(Self {
                version,
                private_key,
            })
        })
    }
}

impl FixedTag for EcPrivateKey<'_> {
    const TAG: Tag = Tag::Sequence;
}

/// Skip the remaining context-specific fields of a `SEQUENCE`.
fn skip_context_specific<'a, R: Reader<'a>>(reader: &mut R) -> der::Result<()> {
    while !reader.is_finished() {
        let tag = reader.peek_tag()?;

        if !tag.is_context_specific() {
            return Err(tag.unexpected_error(None));
        }

        reader.tlv_bytes()?;
    }

    Ok(())
}

/// Strip leading zero bytes from a big-endian integer.
pub(crate) fn trim_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&byte| byte != 0).unwrap_or(bytes.len());
    &bytes[start..]
}
