//! Error types.

use core::fmt::{self, Display, Formatter};
use der::{ErrorKind, Tag, asn1::ObjectIdentifier};

/// Result type with the `eckeys` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Key decoding errors.
///
/// Every variant is terminal: decoding stops at the first error and no key
/// material is returned.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Malformed DER, either in the outer document or in a nested structure.
    Asn1(der::Error),

    /// The document decoded, but unconsumed bytes remain.
    TrailingData,

    /// `PrivateKeyInfo` or `ECPrivateKey` version is not the supported one.
    UnsupportedVersion {
        /// Version this crate understands.
        expected: i64,

        /// Version found in the document.
        found: i64,
    },

    /// Algorithm OID is not `id-ecPublicKey`.
    UnsupportedAlgorithm(ObjectIdentifier),

    /// `ECParameters` is absent or not a `namedCurve` OID (e.g. explicit
    /// curve parameters).
    UnsupportedParameters(Option<Tag>),

    /// Named curve OID is not in the RFC 5480 registry.
    UnrecognizedCurve(ObjectIdentifier),

    /// Named curve is in the registry but has no arithmetic backend.
    UnimplementedCurve {
        /// SEC 2 name of the curve.
        name: &'static str,

        /// Named curve OID.
        oid: ObjectIdentifier,
    },

    /// Public key `BIT STRING` length is not a multiple of 8.
    BitAlignment,

    /// Point is not tagged as uncompressed or has the wrong length.
    PointFormat,

    /// Point coordinates do not satisfy the curve equation.
    PointNotOnCurve,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Asn1(err) => write!(f, "ASN.1 error: {err}"),
            Error::TrailingData => write!(f, "only part of the key was parsed"),
            Error::UnsupportedVersion { expected, found } => {
                write!(f, "unsupported version {found} (expected {expected})")
            }
            Error::UnsupportedAlgorithm(oid) => write!(f, "unsupported algorithm {oid}"),
            Error::UnsupportedParameters(Some(tag)) => {
                write!(f, "unsupported ECParameters with tag {tag}")
            }
            Error::UnsupportedParameters(None) => write!(f, "missing ECParameters"),
            Error::UnrecognizedCurve(oid) => write!(f, "unrecognized named curve {oid}"),
            Error::UnimplementedCurve { name, oid } => {
                write!(f, "curve {name} ({oid}) is not implemented")
            }
            Error::BitAlignment => write!(
                f,
                "implementation limit: public key bit string length must be a multiple of 8"
            ),
            Error::PointFormat => write!(f, "wrong EC point format"),
            Error::PointNotOnCurve => write!(f, "point is not on curve"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Asn1(err) => Some(err),
            _ => None,
        }
    }
}

impl From<der::Error> for Error {
    fn from(err: der::Error) -> Error {
        match err.kind() {
            ErrorKind::TrailingData { .. } => Error::TrailingData,
            _ => Error::Asn1(err),
        }
    }
}
