//! PKCS#8 private key tests

#![cfg(feature = "p256")]

use eckeys::{Error, ObjectIdentifier, PrivateKey, PublicKey};
use hex_literal::hex;
use p256::{
    AffinePoint, ProjectivePoint, Scalar, U256,
    elliptic_curve::{ops::Reduce, sec1::ToEncodedPoint},
};
use proptest::prelude::*;

/// DER-encoded P-256 private key
const PKCS8_DER: &[u8; 67] = include_bytes!("examples/canonical-pkcs8.der");

/// Same key with `ECPrivateKey.publicKey` present
const PKCS8_WITH_PUBLIC_KEY_DER: &[u8; 138] =
    include_bytes!("examples/p256-pkcs8-with-public-key.der");

/// DER-encoded public key of the same key pair
const SPKI_DER: &[u8; 91] = include_bytes!("examples/canonical-spki.der");

/// PEM-encoded P-256 private key
#[cfg(feature = "pem")]
const PKCS8_PEM: &str = include_str!("examples/canonical-pkcs8.pem");

#[cfg(feature = "pem")]
const PKCS8_WITH_PUBLIC_KEY_PEM: &str = include_str!("examples/p256-pkcs8-with-public-key.pem");

/// SEC1 `EC PRIVATE KEY` of the same key pair
#[cfg(feature = "pem")]
const SEC1_PEM: &str = include_str!("examples/p256-sec1.pem");

const D: [u8; 32] = hex!("6d2bf9b52561279d63fde8a79d1b0ab03523ff59215024ba1699da5df64d1bb2");
const X: [u8; 32] = hex!("e57821f2f3d98809ec918a06b6049b26b8c191722818688e3d3127c4ba26d8b9");
const Y: [u8; 32] = hex!("eaa5a8a09362846acf63960d69038b0cb4e47115aabd1bb6f1d64f98dd99cb3e");

/// Offsets into `PKCS8_DER`
const VERSION_OFFSET: usize = 4;
const ALGORITHM_OID_END: usize = 15;
const CURVE_OID_END: usize = 25;
const EC_VERSION_OFFSET: usize = 32;
const SCALAR_OFFSET: usize = 35;

fn patched(offset: usize, byte: u8) -> Vec<u8> {
    let mut der = PKCS8_DER.to_vec();
    der[offset] = byte;
    der
}

/// PKCS#8 template with the P-256 scalar replaced.
fn with_scalar(scalar: &[u8; 32]) -> Vec<u8> {
    let mut der = PKCS8_DER.to_vec();
    der[SCALAR_OFFSET..].copy_from_slice(scalar);
    der
}

#[test]
fn decode_p256_private_key() {
    let private_key = PrivateKey::from_pkcs8_der(PKCS8_DER).unwrap();
    assert_eq!(private_key.curve().name(), "secp256r1");
    assert_eq!(private_key.as_scalar_bytes(), D);
    assert_eq!(private_key.public_key().x(), X);
    assert_eq!(private_key.public_key().y(), Y);
    assert!(private_key.public_key().is_on_curve());
}

#[test]
fn matches_public_key_document() {
    let private_key = PrivateKey::from_pkcs8_der(PKCS8_DER).unwrap();
    let public_key = PublicKey::from_public_key_der(SPKI_DER).unwrap();
    assert_eq!(private_key.public_key(), &public_key);
}

#[test]
fn try_from_bytes() {
    let private_key = PrivateKey::try_from(&PKCS8_DER[..]).unwrap();
    assert_eq!(private_key, PrivateKey::from_pkcs8_der(PKCS8_DER).unwrap());
}

#[test]
fn embedded_public_key_is_ignored() {
    let private_key = PrivateKey::from_pkcs8_der(PKCS8_WITH_PUBLIC_KEY_DER).unwrap();
    assert_eq!(private_key, PrivateKey::from_pkcs8_der(PKCS8_DER).unwrap());

    // Same scalar, but the embedded point is not even on the curve
    let bogus = hex!(
        "308187020100301306072a8648ce3d020106082a8648ce3d030107046d306b0201010420"
        "6d2bf9b52561279d63fde8a79d1b0ab03523ff59215024ba1699da5df64d1bb2"
        "a14403420004"
        "0101010101010101010101010101010101010101010101010101010101010101"
        "0101010101010101010101010101010101010101010101010101010101010101"
    );
    let private_key = PrivateKey::from_pkcs8_der(&bogus).unwrap();
    assert_eq!(private_key.public_key().x(), X);
    assert_eq!(private_key.public_key().y(), Y);
}

#[test]
fn attributes_are_ignored() {
    let der = hex!(
        "3043020100301306072a8648ce3d020106082a8648ce3d0301070427302502010104206d2b"
        "f9b52561279d63fde8a79d1b0ab03523ff59215024ba1699da5df64d1bb2a000"
    );
    let private_key = PrivateKey::from_pkcs8_der(&der).unwrap();
    assert_eq!(private_key.as_scalar_bytes(), D);
}

#[test]
fn unsupported_version() {
    assert_eq!(
        PrivateKey::from_pkcs8_der(&patched(VERSION_OFFSET, 1)),
        Err(Error::UnsupportedVersion {
            expected: 0,
            found: 1
        })
    );
    assert_eq!(
        PrivateKey::from_pkcs8_der(&patched(EC_VERSION_OFFSET, 2)),
        Err(Error::UnsupportedVersion {
            expected: 1,
            found: 2
        })
    );
    assert_eq!(
        PrivateKey::from_pkcs8_der(&patched(EC_VERSION_OFFSET, 0)),
        Err(Error::UnsupportedVersion {
            expected: 1,
            found: 0
        })
    );
}

#[test]
fn unsupported_algorithm() {
    // rsaEncryption with NULL parameters
    let rsa = hex!(
        "303b020100300d06092a864886f70d01010105000427302502010104206d2bf9b52561279d"
        "63fde8a79d1b0ab03523ff59215024ba1699da5df64d1bb2"
    );
    assert_eq!(
        PrivateKey::from_pkcs8_der(&rsa),
        Err(Error::UnsupportedAlgorithm(ObjectIdentifier::new_unwrap(
            "1.2.840.113549.1.1.1"
        )))
    );

    assert_eq!(
        PrivateKey::from_pkcs8_der(&patched(ALGORITHM_OID_END, 0x02)),
        Err(Error::UnsupportedAlgorithm(ObjectIdentifier::new_unwrap(
            "1.2.840.10045.2.2"
        )))
    );
}

#[test]
fn unimplemented_and_unrecognized_curves() {
    let secp192r1 = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.1");
    assert_eq!(
        PrivateKey::from_pkcs8_der(&patched(CURVE_OID_END, 0x01)),
        Err(Error::UnimplementedCurve {
            name: "secp192r1",
            oid: secp192r1
        })
    );

    let unknown = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.2");
    assert_eq!(
        PrivateKey::from_pkcs8_der(&patched(CURVE_OID_END, 0x02)),
        Err(Error::UnrecognizedCurve(unknown))
    );
}

#[test]
fn short_scalar() {
    let der = hex!(
        "3040020100301306072a8648ce3d020106082a8648ce3d03010704263024020101041f2bf9"
        "b52561279d63fde8a79d1b0ab03523ff59215024ba1699da5df64d1bb2"
    );
    let private_key = PrivateKey::from_pkcs8_der(&der).unwrap();
    assert_eq!(private_key.as_scalar_bytes(), &D[1..]);
    assert_eq!(
        private_key.public_key().x(),
        hex!("d7b80fd5cd88093b6f8fd6dfec268582d257b3f87b4b55ea5ae7c9876a7d13fe")
    );
    assert_eq!(
        private_key.public_key().y(),
        hex!("5e364a93a588c54839f581ea59872e8e81a8a67396ddf2912c111ad0def4ba1a")
    );
    assert!(private_key.to_secret_key::<p256::NistP256>().is_ok());
}

#[test]
fn wide_scalar_is_reduced() {
    let der = hex!(
        "3049020100301306072a8648ce3d020106082a8648ce3d030107042f302d02010104280000"
        "0000000000006d2bf9b52561279d63fde8a79d1b0ab03523ff59215024ba1699da5df64d1bb2"
    );
    let private_key = PrivateKey::from_pkcs8_der(&der).unwrap();
    assert_eq!(private_key.as_scalar_bytes().len(), 40);
    assert_eq!(private_key.public_key().x(), X);
    assert_eq!(private_key.public_key().y(), Y);

    let secret_key = private_key.to_secret_key::<p256::NistP256>().unwrap();
    assert_eq!(&secret_key.to_bytes()[..], D);
}

#[test]
fn zero_and_order_scalars_yield_identity() {
    let order = hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551");

    for scalar in [[0u8; 32], order] {
        let private_key = PrivateKey::from_pkcs8_der(&with_scalar(&scalar)).unwrap();
        assert!(private_key.public_key().is_identity());
        assert!(!private_key.public_key().is_on_curve());
        assert!(private_key.to_secret_key::<p256::NistP256>().is_err());
    }
}

#[test]
fn truncated_and_extended() {
    assert!(matches!(
        PrivateKey::from_pkcs8_der(&PKCS8_DER[..66]),
        Err(Error::Asn1(_))
    ));
    assert!(matches!(PrivateKey::from_pkcs8_der(&[]), Err(Error::Asn1(_))));

    let mut der = PKCS8_DER.to_vec();
    der.push(0);
    assert_eq!(PrivateKey::from_pkcs8_der(&der), Err(Error::TrailingData));
}

#[test]
fn trailing_data_inside_private_key_octets() {
    // ECPrivateKey followed by a stray INTEGER inside the OCTET STRING
    let der = hex!(
        "3044020100301306072a8648ce3d020106082a8648ce3d030107042a302502010104206d2b"
        "f9b52561279d63fde8a79d1b0ab03523ff59215024ba1699da5df64d1bb2020100"
    );
    assert_eq!(PrivateKey::from_pkcs8_der(&der), Err(Error::TrailingData));
}

#[test]
fn ecdsa_sign_and_verify() {
    use p256::ecdsa::{
        Signature, SigningKey, VerifyingKey,
        signature::{Signer, Verifier},
    };

    let private_key = PrivateKey::from_pkcs8_der(PKCS8_DER).unwrap();
    let public_key = PublicKey::from_public_key_der(SPKI_DER).unwrap();

    let signing_key = SigningKey::from(private_key.to_secret_key::<p256::NistP256>().unwrap());
    let verifying_key = VerifyingKey::from(public_key.to_public_key::<p256::NistP256>().unwrap());

    let msg = b"example";
    let signature: Signature = signing_key.sign(msg);
    assert!(verifying_key.verify(msg, &signature).is_ok());
    assert!(verifying_key.verify(b"other", &signature).is_err());
}

#[test]
#[cfg(feature = "pem")]
fn decode_pem() {
    let private_key = PrivateKey::from_pkcs8_pem(PKCS8_PEM).unwrap();
    assert_eq!(private_key, PrivateKey::from_pkcs8_der(PKCS8_DER).unwrap());

    let private_key = PKCS8_WITH_PUBLIC_KEY_PEM.parse::<PrivateKey>().unwrap();
    assert_eq!(private_key.as_scalar_bytes(), D);
}

#[test]
#[cfg(feature = "pem")]
fn pem_label_must_match() {
    assert!(matches!(
        PrivateKey::from_pkcs8_pem(SEC1_PEM),
        Err(Error::Asn1(_))
    ));
}

#[test]
#[cfg(feature = "p224")]
fn decode_p224_private_key() {
    let private_key = PrivateKey::from_pkcs8_der(include_bytes!("examples/p224-pkcs8.der")).unwrap();
    let public_key = PublicKey::from_public_key_der(include_bytes!("examples/p224-spki.der")).unwrap();
    assert_eq!(private_key.curve().name(), "secp224r1");
    assert_eq!(
        private_key.as_scalar_bytes(),
        hex!("0079956ab0165f557d1c0c3dbc9ef86dcbd6f76817d4d25ab8347816")
    );
    assert_eq!(private_key.public_key(), &public_key);
}

#[test]
#[cfg(feature = "p384")]
fn decode_p384_private_key() {
    let private_key = PrivateKey::from_pkcs8_der(include_bytes!("examples/p384-pkcs8.der")).unwrap();
    let public_key = PublicKey::from_public_key_der(include_bytes!("examples/p384-spki.der")).unwrap();
    assert_eq!(private_key.curve().name(), "secp384r1");
    assert_eq!(private_key.public_key(), &public_key);
    assert!(private_key.to_secret_key::<p384::NistP384>().is_ok());
    assert!(private_key.to_secret_key::<p256::NistP256>().is_err());
}

#[test]
#[cfg(feature = "p521")]
fn decode_p521_private_key() {
    let private_key = PrivateKey::from_pkcs8_der(include_bytes!("examples/p521-pkcs8.der")).unwrap();
    let public_key = PublicKey::from_public_key_der(include_bytes!("examples/p521-spki.der")).unwrap();
    assert_eq!(private_key.curve().name(), "secp521r1");
    assert_eq!(private_key.as_scalar_bytes().len(), 66);
    assert_eq!(private_key.public_key(), &public_key);
    assert_eq!(private_key.public_key().x().len(), 66);
}

#[test]
fn p256_fixture_with_leading_zero() {
    let private_key = PrivateKey::from_pkcs8_der(include_bytes!("examples/p256-pkcs8.der")).unwrap();
    let public_key = PublicKey::from_public_key_der(include_bytes!("examples/p256-spki.der")).unwrap();
    assert_eq!(private_key.as_scalar_bytes()[0], 0);
    assert_eq!(private_key.public_key(), &public_key);
}

proptest! {
    #[test]
    fn public_key_is_scalar_times_generator(scalar in any::<[u8; 32]>()) {
        let private_key = PrivateKey::from_pkcs8_der(&with_scalar(&scalar)).unwrap();
        let k = <Scalar as Reduce<U256>>::reduce_bytes(&scalar.into());
        let expected = AffinePoint::from(ProjectivePoint::GENERATOR * k).to_encoded_point(false);
        prop_assert_eq!(&*private_key.public_key().to_sec1_bytes(), expected.as_bytes());
    }

    #[test]
    fn truncation_is_rejected(len in 0..PKCS8_DER.len()) {
        let result = PrivateKey::from_pkcs8_der(&PKCS8_DER[..len]);
        prop_assert!(matches!(result, Err(Error::Asn1(_) | Error::TrailingData)));
    }

    #[test]
    fn extension_is_rejected(suffix in proptest::collection::vec(any::<u8>(), 1..8)) {
        let mut der = PKCS8_DER.to_vec();
        der.extend_from_slice(&suffix);
        prop_assert_eq!(PrivateKey::from_pkcs8_der(&der), Err(Error::TrailingData));
    }

    #[test]
    fn decoded_keys_are_consistent(byte in 0..PKCS8_DER.len(), bit in 0u8..8) {
        let mut der = PKCS8_DER.to_vec();
        der[byte] ^= 1 << bit;

        if let Ok(private_key) = PrivateKey::from_pkcs8_der(&der) {
            let public_key = private_key.public_key();
            prop_assert!(public_key.is_identity() || public_key.is_on_curve());
        }
    }
}
