//! Named curve registry.

use crate::{
    ALGORITHM_OID, Error, Result,
    arithmetic::{self, Arithmetic},
};
use core::fmt;
use der::{Tag, Tagged, asn1::ObjectIdentifier};
use spki::AlgorithmIdentifierRef;

/// Named curves of [RFC 5480 § 2.1.1.1], in registry order.
///
/// [RFC 5480 § 2.1.1.1]: https://datatracker.ietf.org/doc/html/rfc5480#section-2.1.1.1
static NAMED_CURVES: [NamedCurve; 15] = [
    NamedCurve::new("1.2.840.10045.3.1.1", "secp192r1", 192, None),
    NamedCurve::new("1.3.132.0.1", "sect163k1", 163, None),
    NamedCurve::new("1.3.132.0.15", "sect163r2", 163, None),
    NamedCurve::new("1.3.132.0.33", "secp224r1", 224, arithmetic::SECP224R1),
    NamedCurve::new("1.3.132.0.26", "sect233k1", 233, None),
    NamedCurve::new("1.3.132.0.27", "sect233r1", 233, None),
    NamedCurve::new("1.2.840.10045.3.1.7", "secp256r1", 256, arithmetic::SECP256R1),
    NamedCurve::new("1.3.132.0.16", "sect283k1", 283, None),
    NamedCurve::new("1.3.132.0.17", "sect283r1", 283, None),
    NamedCurve::new("1.3.132.0.34", "secp384r1", 384, arithmetic::SECP384R1),
    NamedCurve::new("1.3.132.0.36", "sect409k1", 409, None),
    NamedCurve::new("1.3.132.0.37", "sect409r1", 409, None),
    NamedCurve::new("1.3.132.0.35", "secp521r1", 521, arithmetic::SECP521R1),
    NamedCurve::new("1.3.132.0.38", "sect571k1", 571, None),
    NamedCurve::new("1.3.132.0.39", "sect571r1", 571, None),
];

/// Entry in the named curve registry.
///
/// Every curve listed in RFC 5480 is recognized. Only some have an arithmetic
/// backend; the others decode as far as the algorithm identifier and are then
/// rejected with [`Error::UnimplementedCurve`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NamedCurve {
    oid: ObjectIdentifier,
    name: &'static str,
    field_bits: usize,
    arithmetic: Option<Arithmetic>,
}

impl NamedCurve {
    const fn new(
        oid: &'static str,
        name: &'static str,
        field_bits: usize,
        arithmetic: Option<Arithmetic>,
    ) -> Self {
        Self {
            oid: ObjectIdentifier::new_unwrap(oid),
            name,
            field_bits,
            arithmetic,
        }
    }

    /// All registered curves, in registry order.
    pub fn all() -> &'static [NamedCurve] {
        &NAMED_CURVES
    }

    /// Look up a curve by its named curve OID.
    ///
    /// Fails with [`Error::UnrecognizedCurve`] if the OID is not registered
    /// and with [`Error::UnimplementedCurve`] if it is registered but has no
    /// arithmetic backend.
    pub fn from_oid(oid: ObjectIdentifier) -> Result<&'static NamedCurve> {
        let curve = NAMED_CURVES
            .iter()
            .find(|curve| curve.oid == oid)
            .ok_or(Error::UnrecognizedCurve(oid))?;

        if curve.arithmetic.is_none() {
            return Err(Error::UnimplementedCurve {
                name: curve.name,
                oid,
            });
        }

        Ok(curve)
    }

    /// Resolve the curve named by an `id-ecPublicKey` algorithm identifier.
    ///
    /// The parameters must be a `namedCurve` OID; explicit (specified) curve
    /// parameters and absent parameters are rejected.
    pub fn resolve(algorithm: &AlgorithmIdentifierRef<'_>) -> Result<&'static NamedCurve> {
        if algorithm.oid != ALGORITHM_OID {
            return Err(Error::UnsupportedAlgorithm(algorithm.oid));
        }

        let parameters = algorithm
            .parameters
            .ok_or(Error::UnsupportedParameters(None))?;

        if parameters.tag() != Tag::ObjectIdentifier {
            return Err(Error::UnsupportedParameters(Some(parameters.tag())));
        }

        Self::from_oid(parameters.decode_as::<ObjectIdentifier>()?)
    }

    /// Named curve OID.
    pub fn oid(&self) -> ObjectIdentifier {
        self.oid
    }

    /// SEC 2 name, e.g. `secp256r1`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Size of the underlying field in bits.
    pub fn field_bits(&self) -> usize {
        self.field_bits
    }

    /// Size of a serialized field element in bytes.
    pub fn field_bytes(&self) -> usize {
        self.field_bits.div_ceil(8)
    }

    /// Is arithmetic available for this curve?
    pub fn is_implemented(&self) -> bool {
        self.arithmetic.is_some()
    }

    pub(crate) fn arithmetic(&self) -> Result<Arithmetic> {
        self.arithmetic.ok_or(Error::UnimplementedCurve {
            name: self.name,
            oid: self.oid,
        })
    }
}

impl fmt::Display for NamedCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
