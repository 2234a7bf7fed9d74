//! Public keys decoded from `SubjectPublicKeyInfo`.

use crate::{Error, NamedCurve, Result, SupportedCurve, arithmetic::Arithmetic};
use alloc::{boxed::Box, vec::Vec};
use der::Decode;
use elliptic_curve::{
    AffinePoint, FieldBytesSize,
    sec1::{FromEncodedPoint, ModulusSize, ToEncodedPoint},
};
use spki::SubjectPublicKeyInfoRef;

#[cfg(feature = "pem")]
use {core::str::FromStr, der::Document, der::pem::PemLabel};

/// SEC1 tag of an uncompressed point.
const UNCOMPRESSED: u8 = 0x04;

/// Elliptic curve public key on a [`NamedCurve`] selected at runtime.
///
/// Holds the affine coordinates `(X, Y)` as fixed-width big-endian field
/// elements. Keys decoded from a `SubjectPublicKeyInfo` are always points on
/// the curve; keys derived from a private key may also be the point at
/// infinity, represented as `(0, 0)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublicKey {
    curve: &'static NamedCurve,
    arithmetic: Arithmetic,
    coordinates: Box<[u8]>,
}

impl PublicKey {
    /// Decode a public key from an ASN.1 DER-encoded X.509
    /// `SubjectPublicKeyInfo`.
    ///
    /// The algorithm must be `id-ecPublicKey` with a named curve, and the
    /// subject public key an uncompressed SEC1 point lying on that curve.
    pub fn from_public_key_der(bytes: &[u8]) -> Result<Self> {
        let spki = SubjectPublicKeyInfoRef::from_der(bytes)?;
        let curve = NamedCurve::resolve(&spki.algorithm)?;
        let arithmetic = curve.arithmetic()?;
        let point = spki
            .subject_public_key
            .as_bytes()
            .ok_or(Error::BitAlignment)?;

        let coordinates = match point.split_first() {
            Some((&UNCOMPRESSED, coordinates)) if coordinates.len() == 2 * curve.field_bytes() => {
                coordinates
            }
            _ => return Err(Error::PointFormat),
        };

        if !arithmetic.is_on_curve(coordinates) {
            return Err(Error::PointNotOnCurve);
        }

        Ok(Self::new(curve, arithmetic, coordinates.into()))
    }

    /// Decode a public key from a PEM-encoded `SubjectPublicKeyInfo`
    /// (`-----BEGIN PUBLIC KEY-----`).
    #[cfg(feature = "pem")]
    pub fn from_public_key_pem(s: &str) -> Result<Self> {
        let (label, doc) = Document::from_pem(s)?;
        SubjectPublicKeyInfoRef::validate_pem_label(label).map_err(der::Error::from)?;
        Self::from_public_key_der(doc.as_bytes())
    }

    pub(crate) fn new(
        curve: &'static NamedCurve,
        arithmetic: Arithmetic,
        coordinates: Box<[u8]>,
    ) -> Self {
        debug_assert_eq!(arithmetic.field_bytes(), curve.field_bytes());
        debug_assert_eq!(coordinates.len(), 2 * curve.field_bytes());

        Self {
            curve,
            arithmetic,
            coordinates,
        }
    }

    /// Curve this key belongs to.
    pub fn curve(&self) -> &'static NamedCurve {
        self.curve
    }

    /// Affine x-coordinate, big-endian, [`NamedCurve::field_bytes`] long.
    pub fn x(&self) -> &[u8] {
        &self.coordinates[..self.curve.field_bytes()]
    }

    /// Affine y-coordinate, big-endian, [`NamedCurve::field_bytes`] long.
    pub fn y(&self) -> &[u8] {
        &self.coordinates[self.curve.field_bytes()..]
    }

    /// Is this the point at infinity?
    pub fn is_identity(&self) -> bool {
        self.coordinates.iter().all(|&byte| byte == 0)
    }

    /// Does this point satisfy the curve equation?
    ///
    /// The point at infinity does not.
    pub fn is_on_curve(&self) -> bool {
        self.arithmetic.is_on_curve(&self.coordinates)
    }

    /// Serialize as an uncompressed SEC1 point, or as the single byte `0x00`
    /// for the point at infinity.
    pub fn to_sec1_bytes(&self) -> Box<[u8]> {
        if self.is_identity() {
            return Box::new([0]);
        }

        let mut bytes = Vec::with_capacity(1 + self.coordinates.len());
        bytes.push(UNCOMPRESSED);
        bytes.extend_from_slice(&self.coordinates);
        bytes.into_boxed_slice()
    }

    /// Multiply this point by a scalar given as a big-endian integer of any
    /// length. The scalar is reduced modulo the curve order.
    pub fn mul(&self, scalar: &[u8]) -> Result<Self> {
        let coordinates = self
            .arithmetic
            .mul(&self.coordinates, scalar)
            .ok_or(Error::PointNotOnCurve)?;

        Ok(Self::new(self.curve, self.arithmetic, coordinates))
    }

    /// Convert into a typed [`elliptic_curve::PublicKey`], e.g. to verify
    /// signatures with the `ecdsa` crate.
    ///
    /// Fails if `C` is not the curve of this key, or if this key is the point
    /// at infinity.
    pub fn to_public_key<C>(&self) -> elliptic_curve::Result<elliptic_curve::PublicKey<C>>
    where
        C: SupportedCurve,
        AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
        FieldBytesSize<C>: ModulusSize,
    {
        if C::OID != self.curve.oid() {
            return Err(elliptic_curve::Error);
        }

        elliptic_curve::PublicKey::from_sec1_bytes(&self.to_sec1_bytes())
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_public_key_der(bytes)
    }
}

#[cfg(feature = "pem")]
impl FromStr for PublicKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_public_key_pem(s)
    }
}
