//! Slidemorph is a cross-slide element morph engine.
//!
//! Two consecutive slides are described as immutable [`Keyframe`]s. Elements that share an
//! id across them are matched and interpolated; the rest enter or exit with kind-specific
//! poses. The engine never reads a clock or paints anything:
//!
//! - Build keyframes with [`Keyframe::build`] or load them from slide JSON
//! - Plan a transition with [`begin_transition`]
//! - Sample it with [`sample`] once per render tick until [`is_complete`]
//! - Retarget mid-flight with [`ActiveTransition::interrupt`], or let a [`DeckPlayer`]
//!   do the bookkeeping
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod keyframe;
pub(crate) mod morph;
pub(crate) mod session;

pub use crate::foundation::color::Color;
pub use crate::foundation::core::{Affine, Point, Rect, Vec2};
pub use crate::foundation::error::{MorphError, MorphResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::lerp::{Lerp, MIDPOINT_SNAP, snap};

pub use crate::keyframe::element::{
    BaseAttrs, Element, ElementKind, ElementProps, IconProps, ImageProps, ObjectFit, ShapeKind,
    ShapeProps, TextAlign, TextProps, VideoProps,
};
pub use crate::keyframe::model::Keyframe;

pub use crate::morph::active::ActiveTransition;
pub use crate::morph::frame::{Phase, RenderableFrame, RenderedElement, Snapshot};
pub use crate::morph::options::{
    DEFAULT_ELEMENT_DURATION_MS, DEFAULT_OPACITY_DURATION_MS, DEFAULT_REDUCED_DURATION_MS,
    DEFAULT_STAGGER_STEP_MS, ExitStagger, MorphOptions,
};
pub use crate::morph::plan::{
    ElementDirective, Lifecycle, MotionMode, TransitionPlan, begin_from_snapshot,
    begin_transition,
};
pub use crate::morph::pose::{Pose, apply_pose, entrance_pose, exit_pose};
pub use crate::morph::sample::{is_complete, sample};

pub use crate::session::deck::{Deck, DeckPlayer, Slide};
