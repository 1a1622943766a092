use super::*;
use crate::{
    animation::ease::Ease,
    keyframe::element::{Element, ShapeKind},
    morph::frame::Phase,
};

fn kf(elements: Vec<Element>) -> Keyframe {
    Keyframe::build(elements).unwrap()
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
fn clock_is_relative_to_start() {
    let a = kf(vec![Element::text("t", "x").at(0.0, 0.0)]);
    let b = kf(vec![Element::text("t", "x").at(100.0, 0.0)]);
    let active = ActiveTransition::begin(&a, &b, &linear(), 5_000.0).unwrap();
    assert_eq!(active.started_at_ms(), 5_000.0);
    assert_eq!(active.elapsed_ms(4_000.0), 0.0);
    assert_eq!(active.elapsed_ms(5_250.0), 250.0);
    assert_eq!(
        active.sample_at(5_500.0).find("t").unwrap().element.base.x,
        50.0
    );
    assert!(!active.is_complete_at(5_999.0));
    assert!(active.is_complete_at(6_000.0));
    assert_eq!(active.target(), &b);
}

#[test]
fn interrupt_starts_from_the_rendered_state() {
    let a = kf(vec![Element::text("t", "x").at(0.0, 0.0)]);
    let b = kf(vec![Element::text("t", "x").at(100.0, 0.0)]);
    let c = kf(vec![Element::text("t", "x").at(0.0, 200.0)]);
    let active = ActiveTransition::begin(&a, &b, &linear(), 0.0).unwrap();

    let retargeted = active.interrupt(400.0, &c, &linear()).unwrap();
    assert_eq!(retargeted.started_at_ms(), 400.0);
    let first = retargeted.sample_at(400.0);
    let t = first.find("t").unwrap();
    assert_eq!(t.phase, Phase::Persist);
    assert_eq!(t.element.base.x, 40.0);
    assert_eq!(t.element.base.y, 0.0);

    let settled = retargeted.sample_at(1_400.0);
    assert_eq!(&settled.find("t").unwrap().element, &c.elements()[0]);
}

#[test]
fn interrupt_after_completion_starts_from_target() {
    let a = kf(vec![Element::text("t", "x").at(0.0, 0.0)]);
    let b = kf(vec![Element::text("t", "x").at(100.0, 0.0)]);
    let c = kf(vec![Element::text("t", "x").at(200.0, 0.0)]);
    let active = ActiveTransition::begin(&a, &b, &linear(), 0.0).unwrap();
    let next = active.interrupt(5_000.0, &c, &linear()).unwrap();
    let direct = ActiveTransition::begin(&b, &c, &linear(), 5_000.0).unwrap();
    assert_eq!(next, direct);
}

#[test]
fn interrupted_exit_keeps_fading_from_where_it_was() {
    let a = kf(vec![Element::shape("s", ShapeKind::Rect).sized(100.0, 100.0)]);
    let active = ActiveTransition::begin(&a, &Keyframe::empty(), &linear(), 0.0).unwrap();
    let before = active.sample_at(500.0).find("s").unwrap().element.clone();

    let back = active.interrupt(500.0, &Keyframe::empty(), &linear()).unwrap();
    let after = back.sample_at(500.0);
    let s = after.find("s").unwrap();
    assert_eq!(s.phase, Phase::Exit);
    assert_eq!(s.element, before);
}

#[test]
fn navigating_back_revives_an_exiting_element() {
    let a = kf(vec![Element::text("t", "x").at(0.0, 0.0)]);
    let active = ActiveTransition::begin(&a, &Keyframe::empty(), &linear(), 0.0).unwrap();
    let back = active.interrupt(300.0, &a, &linear()).unwrap();
    let d = back.plan().directive("t").unwrap();
    assert!(matches!(d.lifecycle, crate::morph::plan::Lifecycle::Persist { .. }));
    let settled = back.sample_at(1_300.0);
    assert_eq!(&settled.find("t").unwrap().element, &a.elements()[0]);
}
