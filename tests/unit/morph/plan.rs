use super::*;
use crate::{foundation::error::MorphError, keyframe::element::ShapeKind};

fn kf(elements: Vec<Element>) -> Keyframe {
    Keyframe::build(elements).unwrap()
}

fn labels(plan: &TransitionPlan) -> Vec<(String, &'static str, f64)> {
    plan.directives()
        .iter()
        .map(|d| {
            let tag = match d.lifecycle {
                Lifecycle::Persist { .. } => "persist",
                Lifecycle::Enter { .. } => "enter",
                Lifecycle::Exit { .. } => "exit",
            };
            (d.id.clone(), tag, d.start_delay_ms)
        })
        .collect()
}

fn opts(step: f64) -> MorphOptions {
    MorphOptions {
        stagger_step_ms: step,
        element_duration_ms: 500.0,
        ..MorphOptions::default()
    }
}

#[test]
fn next_order_then_exits_with_independent_counter() {
    let prev = kf(vec![
        Element::text("gone-a", "a"),
        Element::text("keep", "k"),
        Element::text("gone-b", "b"),
    ]);
    let next = kf(vec![
        Element::icon("new", "Star"),
        Element::text("keep", "k2"),
    ]);
    let plan = begin_transition(&prev, &next, &opts(100.0)).unwrap();
    assert_eq!(
        labels(&plan),
        vec![
            ("new".to_owned(), "enter", 0.0),
            ("keep".to_owned(), "persist", 100.0),
            ("gone-a".to_owned(), "exit", 0.0),
            ("gone-b".to_owned(), "exit", 100.0),
        ]
    );
    assert_eq!(plan.completion_ms(), 600.0);
    assert_eq!(plan.mode(), MotionMode::Morph);
    assert_eq!(plan.target(), &next);
}

#[test]
fn simultaneous_exits_all_start_at_zero() {
    let prev = kf(vec![Element::text("a", "a"), Element::text("b", "b")]);
    let next = Keyframe::empty();
    let mut o = opts(100.0);
    o.exit_stagger = ExitStagger::Simultaneous;
    let plan = begin_transition(&prev, &next, &o).unwrap();
    assert!(plan.directives().iter().all(|d| d.start_delay_ms == 0.0));
    assert_eq!(plan.completion_ms(), 500.0);
}

#[test]
fn kind_change_splits_into_exit_and_enter() {
    let prev = kf(vec![Element::shape("box", ShapeKind::Rect)]);
    let next = kf(vec![Element::text("box", "now text")]);
    let plan = begin_transition(&prev, &next, &opts(100.0)).unwrap();
    assert_eq!(
        labels(&plan),
        vec![
            ("box".to_owned(), "enter", 0.0),
            ("box".to_owned(), "exit", 0.0),
        ]
    );
    let live = plan.directive("box").unwrap();
    assert!(matches!(live.lifecycle, Lifecycle::Enter { .. }));
    assert_eq!(live.kind(), ElementKind::Text);
}

#[test]
fn reduced_motion_has_no_delays_and_fixed_length() {
    let elements: Vec<Element> = (0..12)
        .map(|i| Element::text(format!("t{i}"), "x"))
        .collect();
    let prev = kf(elements[..6].to_vec());
    let next = kf(elements[3..].to_vec());
    let mut o = MorphOptions::reduced(true);
    o.reduced_duration_ms = 180.0;
    let plan = begin_transition(&prev, &next, &o).unwrap();
    assert_eq!(plan.mode(), MotionMode::Reduced);
    assert_eq!(plan.directives().len(), 12);
    for d in plan.directives() {
        assert_eq!(d.start_delay_ms, 0.0);
        assert_eq!(d.duration_ms, 180.0);
    }
    assert_eq!(plan.completion_ms(), 180.0);
}

#[test]
fn invalid_options_are_rejected() {
    let mut o = MorphOptions::default();
    o.element_duration_ms = -5.0;
    let err = begin_transition(&Keyframe::empty(), &Keyframe::empty(), &o).unwrap_err();
    assert!(matches!(err, MorphError::InvalidOptions(_)));
}

#[test]
fn empty_to_empty_completes_immediately() {
    let plan =
        begin_transition(&Keyframe::empty(), &Keyframe::empty(), &MorphOptions::default())
            .unwrap();
    assert!(plan.directives().is_empty());
    assert_eq!(plan.completion_ms(), 0.0);
}

#[test]
fn progress_handles_delay_and_zero_duration() {
    let d = ElementDirective {
        id: "a".into(),
        lifecycle: Lifecycle::Enter {
            next: Element::text("a", "x"),
        },
        start_delay_ms: 100.0,
        duration_ms: 200.0,
        opacity_duration_ms: 200.0,
    };
    assert_eq!(d.progress(0.0), 0.0);
    assert_eq!(d.progress(200.0), 0.5);
    assert_eq!(d.progress(1000.0), 1.0);
    assert_eq!(d.end_ms(), 300.0);

    let instant = ElementDirective {
        duration_ms: 0.0,
        opacity_duration_ms: 0.0,
        ..d
    };
    assert_eq!(instant.progress(99.0), 0.0);
    assert_eq!(instant.progress(100.0), 1.0);
    assert_eq!(instant.opacity_progress(100.0), 1.0);
}

#[test]
fn opacity_runs_on_its_own_clock() {
    let d = ElementDirective {
        id: "a".into(),
        lifecycle: Lifecycle::Enter {
            next: Element::text("a", "x"),
        },
        start_delay_ms: 100.0,
        duration_ms: 600.0,
        opacity_duration_ms: 400.0,
    };
    assert_eq!(d.opacity_progress(300.0), 0.5);
    assert_eq!(d.progress(400.0), 0.5);
    assert_eq!(d.opacity_progress(500.0), 1.0);
    assert!(d.progress(500.0) < 1.0);
    assert_eq!(d.end_ms(), 700.0);

    let slow_fade = ElementDirective {
        opacity_duration_ms: 900.0,
        ..d
    };
    assert_eq!(slow_fade.end_ms(), 1000.0);
}

#[test]
fn completion_covers_the_longer_clock() {
    let next = kf(vec![Element::text("a", "a")]);
    let mut o = opts(0.0);
    o.opacity_duration_ms = 800.0;
    let plan = begin_transition(&Keyframe::empty(), &next, &o).unwrap();
    assert_eq!(plan.directives()[0].opacity_duration_ms, 800.0);
    assert_eq!(plan.completion_ms(), 800.0);

    o.opacity_duration_ms = 100.0;
    o.opacity_ease = Some(Ease::Linear);
    let plan = begin_transition(&Keyframe::empty(), &next, &o).unwrap();
    assert_eq!(plan.completion_ms(), 500.0);
    assert_eq!(plan.opacity_ease(), Ease::Linear);
    assert_eq!(plan.ease(), Ease::Morph);
}

#[test]
fn reduced_motion_fades_on_the_cross_fade_clock() {
    let next = kf(vec![Element::text("a", "a")]);
    let mut o = MorphOptions::reduced(true);
    o.opacity_duration_ms = 900.0;
    let plan = begin_transition(&Keyframe::empty(), &next, &o).unwrap();
    assert_eq!(plan.directives()[0].opacity_duration_ms, o.reduced_duration_ms);
    assert_eq!(plan.completion_ms(), o.reduced_duration_ms);
}

#[test]
fn plan_serializes_lifecycle_tags() {
    let prev = kf(vec![Element::text("a", "x")]);
    let next = kf(vec![Element::text("a", "y")]);
    let plan = begin_transition(&prev, &next, &MorphOptions::default()).unwrap();
    let v = serde_json::to_value(&plan).unwrap();
    assert_eq!(v["mode"], serde_json::json!("morph"));
    assert_eq!(v["directives"][0]["lifecycle"], serde_json::json!("persist"));
    assert_eq!(v["directives"][0]["id"], serde_json::json!("a"));
    assert!(v.get("target").is_none());
}
