//! Exercises both sides of the advisory documentation boundary: the hidden
//! module stays reachable by full path even though nothing in it is part of
//! the published, re-exported surface.

use visibility_recipe::internal::{uppercase, PrivateEntity};
use visibility_recipe::observability::setup_tracing;

/// The hidden module is importable and behaves normally; being excluded from
/// rendered docs does not restrict access.
#[test]
fn test_hidden_module_is_reachable_by_path() {
    let entity = PrivateEntity::new("internal use only");
    assert_eq!(entity.reveal(), "internal use only");

    assert_eq!(uppercase("abcXYZ"), "ABCXYZ");
}

/// Secrets round-trip verbatim, including text the uppercase helper would
/// otherwise rewrite.
#[test]
fn test_reveal_never_transforms_the_secret() {
    for secret in ["", "  spaced out  ", "mixedCASE", "déjà vu 🦀"] {
        let entity = PrivateEntity::new(secret);
        assert_eq!(entity.reveal(), secret, "Secret {secret:?} must come back unchanged");
    }
}

/// Installing the subscriber succeeds once per process; the second attempt
/// reports the conflict instead of panicking.
#[test]
fn test_setup_tracing_is_once_per_process() {
    assert!(setup_tracing().is_ok(), "First install should succeed");

    let second = setup_tracing();
    assert!(second.is_err(), "Second install should be rejected");
}
