use super::*;
use crate::keyframe::element::{ElementKind, ShapeKind};
use serde_json::json;

#[test]
fn build_indexes_by_id_in_authored_order() {
    let kf = Keyframe::build(vec![
        Element::text("t1", "Title"),
        Element::shape("s1", ShapeKind::Circle),
    ])
    .unwrap();
    assert_eq!(kf.len(), 2);
    assert_eq!(kf.index_of("s1"), Some(1));
    assert_eq!(kf.lookup("t1").map(Element::kind), Some(ElementKind::Text));
    assert!(kf.lookup("missing").is_none());
    assert!(kf.contains("s1"));
    let ids: Vec<_> = kf.elements().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["t1", "s1"]);
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = Keyframe::build(vec![
        Element::text("x", "a"),
        Element::shape("x", ShapeKind::Rect),
    ])
    .unwrap_err();
    match err {
        MorphError::DuplicateIdentity { id } => assert_eq!(id, "x"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn invalid_element_blocks_the_keyframe() {
    let err = Keyframe::build(vec![Element::text("t", "a").with_opacity(-0.1)]).unwrap_err();
    assert!(matches!(err, MorphError::Validation(_)));
}

#[test]
fn json_accepts_array_or_slide_object() {
    let arr = json!([{"id": "a", "kind": "icon", "iconName": "Star",
                      "x": 0, "y": 0, "width": 64, "height": 64}]);
    let kf = Keyframe::from_json_value(&arr).unwrap();
    assert_eq!(kf.len(), 1);

    let obj = json!({"background": "g", "elements": arr});
    assert_eq!(Keyframe::from_json_value(&obj).unwrap(), kf);

    assert!(Keyframe::from_json_value(&json!(42)).is_err());
    assert!(Keyframe::from_json_value(&json!({"items": []})).is_err());
}

#[test]
fn json_unknown_kind_surfaces_as_error_kind() {
    let s = r#"[{"id": "c", "type": "chart", "x": 0, "y": 0, "width": 1, "height": 1}]"#;
    assert!(matches!(
        Keyframe::from_json_str(s),
        Err(MorphError::UnknownElementKind { .. })
    ));
}

#[test]
fn json_duplicate_ids_surface_as_error_kind() {
    let s = r#"[
        {"id": "x", "kind": "text", "text": "a", "x": 0, "y": 0, "width": 1, "height": 1},
        {"id": "x", "kind": "text", "text": "b", "x": 0, "y": 0, "width": 1, "height": 1}
    ]"#;
    assert!(matches!(
        Keyframe::from_json_str(s),
        Err(MorphError::DuplicateIdentity { .. })
    ));
}

#[test]
fn serde_round_trip_goes_through_validation() {
    let kf = Keyframe::build(vec![Element::video("v", "clip.mp4").at(5.0, 6.0)]).unwrap();
    let v = serde_json::to_value(&kf).unwrap();
    assert!(v["elements"].is_array());
    let back: Keyframe = serde_json::from_value(v).unwrap();
    assert_eq!(back, kf);

    let bad = json!({"elements": [{"id": "c", "kind": "chart", "x": 0, "y": 0, "width": 1, "height": 1}]});
    let err = serde_json::from_value::<Keyframe>(bad).unwrap_err();
    assert!(err.to_string().contains("unknown element kind"));
}

#[test]
fn clones_share_storage_and_compare_equal() {
    let kf = Keyframe::build(vec![Element::text("t", "a")]).unwrap();
    let copy = kf.clone();
    assert_eq!(kf, copy);
    assert!(std::ptr::eq(kf.elements().as_ptr(), copy.elements().as_ptr()));
    assert!(Keyframe::empty().is_empty());
}
