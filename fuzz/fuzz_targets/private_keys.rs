#![no_main]
// Decodes arbitrary bytes as a PKCS#8 private key. A decoded key must carry
// a point on its own curve (or the identity, for zero modulo the order).
use eckeys::PrivateKey;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(private_key) = PrivateKey::from_pkcs8_der(data) else {
        return;
    };

    let public_key = private_key.public_key();
    assert_eq!(public_key.curve(), private_key.curve());
    assert!(public_key.is_identity() || public_key.is_on_curve());
    assert_eq!(public_key.mul(&[1]).as_ref(), Ok(public_key));
    assert_eq!(PrivateKey::try_from(data).ok(), Some(private_key));
});
