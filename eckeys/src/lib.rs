#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Supported curves
//!
//! | Curve       | Cargo feature | Backend crate |
//! |-------------|---------------|---------------|
//! | `secp224r1` | `p224`        | [`p224`]      |
//! | `secp256r1` | `p256`        | [`p256`]      |
//! | `secp384r1` | `p384`        | [`p384`]      |
//! | `secp521r1` | `p521`        | [`p521`]      |
//!
//! The remaining RFC 5480 curves (`secp192r1` and the binary `sect*` curves)
//! are recognized and reported as [`Error::UnimplementedCurve`].
//!
//! [`p224`]: https://docs.rs/p224
//! [`p256`]: https://docs.rs/p256
//! [`p384`]: https://docs.rs/p384
//! [`p521`]: https://docs.rs/p521

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod arithmetic;
mod asn1;
mod curve;
mod error;
mod private_key;
mod public_key;

pub use crate::{
    arithmetic::SupportedCurve,
    curve::NamedCurve,
    error::{Error, Result},
    private_key::PrivateKey,
    public_key::PublicKey,
};
pub use der::{self, asn1::ObjectIdentifier};
pub use elliptic_curve;
pub use spki;

/// `id-ecPublicKey` algorithm OID from [RFC 5480 § 2.1.1].
///
/// [RFC 5480 § 2.1.1]: https://datatracker.ietf.org/doc/html/rfc5480#section-2.1.1
pub const ALGORITHM_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");
