use super::*;
use crate::{animation::ease::Ease, keyframe::element::Element, morph::frame::Phase};

fn slide(elements: Vec<Element>) -> Slide {
    Slide::new(Keyframe::build(elements).unwrap())
}

fn three_slides() -> Deck {
    Deck::new(vec![
        slide(vec![Element::text("title", "One").at(0.0, 0.0)]),
        slide(vec![Element::text("title", "Two").at(100.0, 0.0)]),
        slide(vec![Element::text("title", "Three").at(200.0, 0.0)]),
    ])
    .unwrap()
}

fn linear() -> MorphOptions {
    MorphOptions {
        stagger_step_ms: 0.0,
        element_duration_ms: 1000.0,
        ease: Ease::Linear,
        ..MorphOptions::default()
    }
}

#[test]
fn empty_deck_is_rejected() {
    assert!(matches!(Deck::new(Vec::new()), Err(MorphError::Validation(_))));
    assert!(matches!(
        Deck::from_json_str(r#"{"slides": []}"#),
        Err(MorphError::Validation(_))
    ));
}

#[test]
fn deck_json_applies_slide_defaults() {
    let deck = Deck::from_json_str(
        r##"{"slides": [
            {"background": "bg-dark", "textColor": "text-white",
             "elements": [{"id": "a", "type": "text", "text": "hi",
                           "x": 0, "y": 0, "width": 10, "height": 10}]},
            {"elements": []}
        ]}"##,
    )
    .unwrap();
    assert_eq!(deck.len(), 2);
    assert_eq!(deck.slides()[0].background, "bg-dark");
    assert_eq!(deck.slides()[0].text_color, "text-white");
    assert!(deck.slides()[0].keyframe.contains("a"));
    assert_eq!(deck.slides()[1].background, "educational-gradient-1");
    assert!(deck.slides()[1].keyframe.is_empty());
}

#[test]
fn deck_json_keeps_element_error_variants() {
    let err = Deck::from_json_str(
        r#"[{"elements": [{"id": "c", "type": "chart", "x": 0, "y": 0, "width": 1, "height": 1}]}]"#,
    )
    .unwrap_err();
    assert!(matches!(err, MorphError::UnknownElementKind { .. }));

    let err = Deck::from_json_str(
        r#"[{"elements": [
            {"id": "x", "type": "icon", "iconName": "A", "x": 0, "y": 0, "width": 1, "height": 1},
            {"id": "x", "type": "icon", "iconName": "B", "x": 0, "y": 0, "width": 1, "height": 1}
        ]}]"#,
    )
    .unwrap_err();
    assert!(matches!(err, MorphError::DuplicateIdentity { .. }));
}

#[test]
fn navigation_stops_at_both_ends() {
    let mut player = DeckPlayer::new(three_slides(), linear()).unwrap();
    assert!(!player.previous(0.0).unwrap());
    assert!(player.next(0.0).unwrap());
    assert!(player.next(2_000.0).unwrap());
    assert_eq!(player.current_index(), 2);
    assert!(!player.next(4_000.0).unwrap());
    assert_eq!(player.current_index(), 2);
}

#[test]
fn go_to_validates_index_and_ignores_current() {
    let mut player = DeckPlayer::new(three_slides(), linear()).unwrap();
    assert!(matches!(player.go_to(9, 0.0), Err(MorphError::Validation(_))));
    assert!(!player.go_to(0, 0.0).unwrap());
    assert!(player.active().is_none());
    assert!(player.go_to(2, 0.0).unwrap());
    assert_eq!(player.current_slide().keyframe.lookup("title").unwrap().base.x, 200.0);
}

#[test]
fn frames_follow_the_active_transition() {
    let mut player = DeckPlayer::new(three_slides(), linear()).unwrap();
    let rest = player.frame(0.0);
    assert!(rest.complete);
    assert_eq!(rest.find("title").unwrap().element.base.x, 0.0);

    player.next(1_000.0).unwrap();
    assert!(player.is_animating(1_500.0));
    assert_eq!(player.frame(1_500.0).find("title").unwrap().element.base.x, 50.0);
    assert!(!player.is_animating(2_000.0));
    assert_eq!(player.frame(2_000.0).find("title").unwrap().element.base.x, 100.0);
}

#[test]
fn rapid_navigation_continues_from_screen_state() {
    let mut player = DeckPlayer::new(three_slides(), linear()).unwrap();
    player.next(0.0).unwrap();
    let on_screen = player.frame(250.0).find("title").unwrap().element.clone();
    assert_eq!(on_screen.base.x, 25.0);

    player.next(250.0).unwrap();
    let after = player.frame(250.0);
    let title = after.find("title").unwrap();
    assert_eq!(title.phase, Phase::Persist);
    assert_eq!(title.element, on_screen);
    assert_eq!(player.frame(1_250.0).find("title").unwrap().element.base.x, 200.0);
}

#[test]
fn set_options_validates() {
    let mut player = DeckPlayer::new(three_slides(), linear()).unwrap();
    let mut bad = linear();
    bad.stagger_step_ms = -1.0;
    assert!(player.set_options(bad).is_err());
    player.set_options(MorphOptions::reduced(true)).unwrap();
    assert!(player.options().reduced_motion);
}
