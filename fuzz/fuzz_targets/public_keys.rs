#![no_main]
// Decodes arbitrary bytes as a SubjectPublicKeyInfo. A decoded key must be a
// point on its curve with fixed-width coordinates.
use eckeys::PublicKey;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(public_key) = PublicKey::from_public_key_der(data) else {
        return;
    };

    assert!(public_key.is_on_curve());
    assert!(!public_key.is_identity());

    let field_bytes = public_key.curve().field_bytes();
    assert_eq!(public_key.x().len(), field_bytes);
    assert_eq!(public_key.y().len(), field_bytes);

    let sec1 = public_key.to_sec1_bytes();
    assert_eq!(sec1[0], 0x04);
    assert_eq!(sec1.len(), 1 + 2 * field_bytes);
    assert_eq!(PublicKey::try_from(data).ok(), Some(public_key));
});
