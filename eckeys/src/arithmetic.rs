//! Curve arithmetic backends.
//!
//! Keys are decoded for a curve selected at runtime, while the arithmetic
//! lives in per-curve crates. [`Arithmetic`] names the available backends and
//! dispatches to functions generic over [`CurveArithmetic`].
//!
//! Points cross this boundary as untagged affine coordinates `X || Y`, each a
//! fixed-width big-endian field element. The point at infinity is `(0, 0)`.

use alloc::{boxed::Box, vec};
use der::asn1::ObjectIdentifier;
use elliptic_curve::{
    AffinePoint, CurveArithmetic, Field, FieldBytes, FieldBytesSize, Group, ProjectivePoint,
    Scalar,
    generic_array::typenum::Unsigned,
    sec1::{Coordinates, EncodedPoint, FromEncodedPoint, ModulusSize, ToEncodedPoint},
};

/// Arithmetic backend for a named curve.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Arithmetic {
    /// NIST P-224 via the `p224` crate.
    #[cfg(feature = "p224")]
    P224,

    /// NIST P-256 via the `p256` crate.
    #[cfg(feature = "p256")]
    P256,

    /// NIST P-384 via the `p384` crate.
    #[cfg(feature = "p384")]
    P384,

    /// NIST P-521 via the `p521` crate.
    #[cfg(feature = "p521")]
    P521,
}

macro_rules! dispatch {
    ($arithmetic:expr, $func:ident($($arg:expr),*)) => {
        match $arithmetic {
            #[cfg(feature = "p224")]
            Arithmetic::P224 => $func::<p224::NistP224>($($arg),*),
            #[cfg(feature = "p256")]
            Arithmetic::P256 => $func::<p256::NistP256>($($arg),*),
            #[cfg(feature = "p384")]
            Arithmetic::P384 => $func::<p384::NistP384>($($arg),*),
            #[cfg(feature = "p521")]
            Arithmetic::P521 => $func::<p521::NistP521>($($arg),*),
        }
    };
}

impl Arithmetic {
    /// Size of a serialized field element in bytes.
    pub(crate) fn field_bytes(self) -> usize {
        dispatch!(self, field_bytes())
    }

    /// Compute `k * G`, where `k` is a big-endian integer of any length.
    pub(crate) fn mul_base(self, k: &[u8]) -> Box<[u8]> {
        dispatch!(self, mul_base(k))
    }

    /// Compute `k * P`, returning `None` if `coordinates` are not a point on
    /// the curve.
    pub(crate) fn mul(self, coordinates: &[u8], k: &[u8]) -> Option<Box<[u8]>> {
        dispatch!(self, mul(coordinates, k))
    }

    /// Is `X || Y` a point on the curve?
    pub(crate) fn is_on_curve(self, coordinates: &[u8]) -> bool {
        dispatch!(self, is_on_curve(coordinates))
    }
}

/// Registry entries for each backend, `None` when the feature is disabled.
#[cfg(feature = "p224")]
pub(crate) const SECP224R1: Option<Arithmetic> = Some(Arithmetic::P224);
#[cfg(not(feature = "p224"))]
pub(crate) const SECP224R1: Option<Arithmetic> = None;

#[cfg(feature = "p256")]
pub(crate) const SECP256R1: Option<Arithmetic> = Some(Arithmetic::P256);
#[cfg(not(feature = "p256"))]
pub(crate) const SECP256R1: Option<Arithmetic> = None;

#[cfg(feature = "p384")]
pub(crate) const SECP384R1: Option<Arithmetic> = Some(Arithmetic::P384);
#[cfg(not(feature = "p384"))]
pub(crate) const SECP384R1: Option<Arithmetic> = None;

#[cfg(feature = "p521")]
pub(crate) const SECP521R1: Option<Arithmetic> = Some(Arithmetic::P521);
#[cfg(not(feature = "p521"))]
pub(crate) const SECP521R1: Option<Arithmetic> = None;

/// Curves for which decoded keys can be converted into typed
/// [`elliptic_curve`] keys.
///
/// This trait is sealed and implemented for the curve types of the enabled
/// backend crates.
pub trait SupportedCurve: CurveArithmetic + sealed::Sealed {
    /// Named curve OID of this curve.
    const OID: ObjectIdentifier;
}

mod sealed {
    pub trait Sealed {}
}

macro_rules! impl_supported_curve {
    ($feature:literal, $curve:ty, $oid:literal) => {
        #[cfg(feature = $feature)]
        impl sealed::Sealed for $curve {}

        #[cfg(feature = $feature)]
        impl SupportedCurve for $curve {
            const OID: ObjectIdentifier = ObjectIdentifier::new_unwrap($oid);
        }
    };
}

impl_supported_curve!("p224", p224::NistP224, "1.3.132.0.33");
impl_supported_curve!("p256", p256::NistP256, "1.2.840.10045.3.1.7");
impl_supported_curve!("p384", p384::NistP384, "1.3.132.0.34");
impl_supported_curve!("p521", p521::NistP521, "1.3.132.0.35");

fn field_bytes<C: CurveArithmetic>() -> usize {
    C::FieldBytesSize::USIZE
}

fn mul_base<C>(k: &[u8]) -> Box<[u8]>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    to_coordinates::<C>(ProjectivePoint::<C>::generator() * reduce::<C>(k))
}

fn mul<C>(coordinates: &[u8], k: &[u8]) -> Option<Box<[u8]>>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let point = if coordinates.iter().all(|&byte| byte == 0) {
        ProjectivePoint::<C>::identity()
    } else {
        decode_point::<C>(coordinates)?
    };

    Some(to_coordinates::<C>(point * reduce::<C>(k)))
}

fn is_on_curve<C>(coordinates: &[u8]) -> bool
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    decode_point::<C>(coordinates).is_some()
}

/// Parse `X || Y`, checking that both are reduced field elements and that the
/// point satisfies the curve equation.
fn decode_point<C>(coordinates: &[u8]) -> Option<ProjectivePoint<C>>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let len = field_bytes::<C>();
    if coordinates.len() != 2 * len {
        return None;
    }

    let mut x = FieldBytes::<C>::default();
    let mut y = FieldBytes::<C>::default();
    x.copy_from_slice(&coordinates[..len]);
    y.copy_from_slice(&coordinates[len..]);
    let point = EncodedPoint::<C>::from_affine_coordinates(&x, &y, false);
    Option::<AffinePoint<C>>::from(AffinePoint::<C>::from_encoded_point(&point)).map(Into::into)
}

fn to_coordinates<C>(point: ProjectivePoint<C>) -> Box<[u8]>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let len = field_bytes::<C>();
    let mut coordinates = vec![0u8; 2 * len].into_boxed_slice();
    let affine: AffinePoint<C> = point.into();
    let encoded = affine.to_encoded_point(false);

    if let Coordinates::Uncompressed { x, y } = encoded.coordinates() {
        coordinates[..len].copy_from_slice(x);
        coordinates[len..].copy_from_slice(y);
    }

    coordinates
}

/// Reduce a big-endian integer of any length modulo the curve order.
///
/// Variable-time with respect to the length of `bytes`, not their value.
fn reduce<C: CurveArithmetic>(bytes: &[u8]) -> Scalar<C> {
    let radix = Scalar::<C>::from(256u64);
    bytes.iter().fold(Scalar::<C>::ZERO, |acc, &byte| {
        acc * radix + Scalar::<C>::from(u64::from(byte))
    })
}
