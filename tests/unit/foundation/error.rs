use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MorphError::duplicate_identity("x")
            .to_string()
            .contains("duplicate identity:")
    );
    assert!(
        MorphError::unknown_kind("x", "chart")
            .to_string()
            .contains("unknown element kind:")
    );
    assert!(
        MorphError::invalid_options("x")
            .to_string()
            .contains("invalid options:")
    );
    assert!(
        MorphError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        MorphError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn kind_mismatch_names_both_kinds() {
    let err = MorphError::KindMismatchOnPersist {
        id: "box".to_string(),
        previous: ElementKind::Shape,
        next: ElementKind::Text,
    };
    let msg = err.to_string();
    assert!(msg.contains("'box'"));
    assert!(msg.contains("shape"));
    assert!(msg.contains("text"));
}

#[test]
fn serde_json_errors_convert() {
    let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: MorphError = err.into();
    assert!(matches!(err, MorphError::Serde(_)));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MorphError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
