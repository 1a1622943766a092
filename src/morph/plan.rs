use serde::Serialize;

use crate::{
    animation::ease::Ease,
    foundation::error::MorphResult,
    keyframe::{element::Element, element::ElementKind, model::Keyframe},
    morph::{
        frame::Snapshot,
        interpolate::ensure_same_kind,
        options::{ExitStagger, MorphOptions},
    },
};

/// How one id moves through a transition.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "lifecycle", rename_all = "snake_case")]
pub enum Lifecycle {
    /// Present in both keyframes with the same kind.
    Persist {
        /// Resting state in the previous keyframe.
        prev: Element,
        /// Resting state in the next keyframe.
        next: Element,
    },
    /// Only in the next keyframe.
    Enter {
        /// Resting state in the next keyframe.
        next: Element,
    },
    /// Only in the previous keyframe (or its kind changed).
    Exit {
        /// Resting state in the previous keyframe.
        prev: Element,
    },
}

/// Lifecycle plus timing for one element.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDirective {
    /// Element identity.
    pub id: String,
    /// Source and target states.
    #[serde(flatten)]
    pub lifecycle: Lifecycle,
    /// Wait before this element starts moving.
    pub start_delay_ms: f64,
    /// Length of the geometry, color and size interpolation.
    pub duration_ms: f64,
    /// Length of the opacity interpolation, on the same start delay.
    pub opacity_duration_ms: f64,
}

impl ElementDirective {
    /// Kind of the element this directive animates.
    pub fn kind(&self) -> ElementKind {
        match &self.lifecycle {
            Lifecycle::Persist { next, .. } | Lifecycle::Enter { next } => next.kind(),
            Lifecycle::Exit { prev } => prev.kind(),
        }
    }

    /// Time at which both clocks of this directive have settled.
    pub fn end_ms(&self) -> f64 {
        self.start_delay_ms + self.duration_ms.max(self.opacity_duration_ms)
    }

    /// Linear geometry progress in `[0, 1]`; exactly 1 from `start_delay_ms + duration_ms` on.
    ///
    /// A zero-length directive jumps to 1 as soon as its delay has passed.
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        self.clock(elapsed_ms, self.duration_ms)
    }

    /// Linear opacity progress in `[0, 1]`, timed by `opacity_duration_ms`.
    pub fn opacity_progress(&self, elapsed_ms: f64) -> f64 {
        self.clock(elapsed_ms, self.opacity_duration_ms)
    }

    fn clock(&self, elapsed_ms: f64, duration_ms: f64) -> f64 {
        if elapsed_ms >= self.start_delay_ms + duration_ms {
            return 1.0;
        }
        let local = elapsed_ms - self.start_delay_ms;
        if local <= 0.0 {
            return 0.0;
        }
        (local / duration_ms).clamp(0.0, 1.0)
    }
}

/// Whether directives morph geometry or only cross-fade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionMode {
    /// Full geometric interpolation with staggered starts.
    Morph,
    /// Opacity cross-fade, every directive starting at once.
    Reduced,
}

/// Immutable schedule describing how every element moves from one keyframe to the next.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionPlan {
    directives: Vec<ElementDirective>,
    mode: MotionMode,
    ease: Ease,
    opacity_ease: Ease,
    completion_ms: f64,
    #[serde(skip)]
    target: Keyframe,
}

impl TransitionPlan {
    /// Directives: persist and enter in next-keyframe order, then exits.
    pub fn directives(&self) -> &[ElementDirective] {
        &self.directives
    }

    /// Directive for `id`. When an id both exits and enters, the live one wins.
    pub fn directive(&self, id: &str) -> Option<&ElementDirective> {
        self.directives
            .iter()
            .find(|d| d.id == id && !matches!(d.lifecycle, Lifecycle::Exit { .. }))
            .or_else(|| self.directives.iter().find(|d| d.id == id))
    }

    /// Motion mode fixed at planning time.
    pub fn mode(&self) -> MotionMode {
        self.mode
    }

    /// Easing applied to geometry, color and size.
    pub fn ease(&self) -> Ease {
        self.ease
    }

    /// Easing applied to opacity.
    pub fn opacity_ease(&self) -> Ease {
        self.opacity_ease
    }

    /// Time at which the last directive settles.
    pub fn completion_ms(&self) -> f64 {
        self.completion_ms
    }

    /// Keyframe reached once the transition completes.
    pub fn target(&self) -> &Keyframe {
        &self.target
    }
}

/// Plan the transition from `prev` to `next`.
#[tracing::instrument(skip(prev, next, opts), fields(prev = prev.len(), next = next.len()))]
pub fn begin_transition(
    prev: &Keyframe,
    next: &Keyframe,
    opts: &MorphOptions,
) -> MorphResult<TransitionPlan> {
    plan(prev, &[], next, opts)
}

/// Plan a transition starting from a mid-flight snapshot.
///
/// Residual exits (ghosts that shared an id with a live element) keep fading out.
pub fn begin_from_snapshot(
    snapshot: &Snapshot,
    next: &Keyframe,
    opts: &MorphOptions,
) -> MorphResult<TransitionPlan> {
    plan(&snapshot.keyframe, &snapshot.residual_exits, next, opts)
}

fn plan(
    prev: &Keyframe,
    residual_exits: &[Element],
    next: &Keyframe,
    opts: &MorphOptions,
) -> MorphResult<TransitionPlan> {
    opts.validate()?;
    let step = opts.effective_step_ms();
    let duration_ms = opts.effective_duration_ms();
    let opacity_duration_ms = opts.effective_opacity_duration_ms();
    let mode = if opts.reduced_motion {
        MotionMode::Reduced
    } else {
        MotionMode::Morph
    };

    let mut directives = Vec::with_capacity(next.len() + prev.len());
    for (i, el) in next.elements().iter().enumerate() {
        let lifecycle = match prev.lookup(&el.id) {
            Some(old) => match ensure_same_kind(old, el) {
                Ok(()) => Lifecycle::Persist {
                    prev: old.clone(),
                    next: el.clone(),
                },
                Err(err) => {
                    tracing::debug!(%err, "splitting into exit and enter");
                    Lifecycle::Enter { next: el.clone() }
                }
            },
            None => Lifecycle::Enter { next: el.clone() },
        };
        directives.push(ElementDirective {
            id: el.id.clone(),
            lifecycle,
            start_delay_ms: i as f64 * step,
            duration_ms,
            opacity_duration_ms,
        });
    }

    let exiting = prev
        .elements()
        .iter()
        .filter(|old| next.lookup(&old.id).is_none_or(|el| el.kind() != old.kind()))
        .chain(residual_exits);
    for (i, old) in exiting.enumerate() {
        let start_delay_ms = match opts.exit_stagger {
            ExitStagger::Independent => i as f64 * step,
            ExitStagger::Simultaneous => 0.0,
        };
        directives.push(ElementDirective {
            id: old.id.clone(),
            lifecycle: Lifecycle::Exit { prev: old.clone() },
            start_delay_ms,
            duration_ms,
            opacity_duration_ms,
        });
    }

    let completion_ms = directives
        .iter()
        .map(ElementDirective::end_ms)
        .fold(0.0, f64::max);

    tracing::trace!(
        directives = directives.len(),
        completion_ms,
        ?mode,
        "transition planned"
    );

    Ok(TransitionPlan {
        directives,
        mode,
        ease: opts.ease,
        opacity_ease: opts.effective_opacity_ease(),
        completion_ms,
        target: next.clone(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/morph/plan.rs"]
mod tests;
