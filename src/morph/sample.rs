use crate::{
    animation::lerp::Lerp,
    keyframe::element::Element,
    morph::{
        frame::{Phase, RenderableFrame, RenderedElement},
        interpolate::morph_element,
        plan::{ElementDirective, Lifecycle, MotionMode, TransitionPlan},
        pose::{apply_pose, entrance_pose, exit_pose},
    },
};

/// Resolve every element of `plan` at `elapsed_ms` since the transition began.
///
/// Pure: the same plan and time always give the same frame. Negative or NaN times are
/// treated as zero; times past completion give the settled frame.
pub fn sample(plan: &TransitionPlan, elapsed_ms: f64) -> RenderableFrame {
    let elapsed_ms = sanitize(elapsed_ms);

    let mut entries = Vec::with_capacity(plan.directives().len() + 1);
    for d in plan.directives() {
        let clocks = Clocks::at(plan, d, elapsed_ms);
        match plan.mode() {
            MotionMode::Morph => entries.push(sample_morph(d, clocks)),
            MotionMode::Reduced => sample_reduced(d, clocks, &mut entries),
        }
    }
    entries.sort_by_key(|e| e.element.base.stack_order);

    RenderableFrame {
        complete: is_complete(plan, elapsed_ms),
        entries,
    }
}

/// Whether every directive of `plan` has settled at `elapsed_ms`.
///
/// Times are read the same way as in [`sample`], so NaN counts as zero.
pub fn is_complete(plan: &TransitionPlan, elapsed_ms: f64) -> bool {
    sanitize(elapsed_ms) >= plan.completion_ms()
}

impl TransitionPlan {
    /// Method form of [`sample`].
    pub fn sample(&self, elapsed_ms: f64) -> RenderableFrame {
        sample(self, elapsed_ms)
    }

    /// Method form of [`is_complete`].
    pub fn is_complete(&self, elapsed_ms: f64) -> bool {
        is_complete(self, elapsed_ms)
    }
}

fn sanitize(elapsed_ms: f64) -> f64 {
    if elapsed_ms.is_nan() {
        0.0
    } else {
        elapsed_ms.max(0.0)
    }
}

/// Linear and eased progress of one directive on both of its clocks.
#[derive(Clone, Copy)]
struct Clocks {
    shape: f64,
    shape_eased: f64,
    opacity: f64,
    opacity_eased: f64,
}

impl Clocks {
    fn at(plan: &TransitionPlan, d: &ElementDirective, elapsed_ms: f64) -> Self {
        let shape = d.progress(elapsed_ms);
        let opacity = d.opacity_progress(elapsed_ms);
        Self {
            shape,
            shape_eased: plan.ease().apply(shape),
            opacity,
            opacity_eased: plan.opacity_ease().apply(opacity),
        }
    }

    fn settled(self) -> bool {
        self.shape >= 1.0 && self.opacity >= 1.0
    }
}

fn sample_morph(d: &ElementDirective, c: Clocks) -> RenderedElement {
    match &d.lifecycle {
        Lifecycle::Persist { prev, next } => RenderedElement {
            element: morph_element(prev, next, c.shape_eased, c.opacity_eased),
            visible: true,
            phase: Phase::Persist,
        },
        Lifecycle::Enter { next } => {
            let from = apply_pose(next, entrance_pose(next.kind()));
            RenderedElement {
                element: morph_element(&from, next, c.shape_eased, c.opacity_eased),
                visible: true,
                phase: Phase::Enter,
            }
        }
        Lifecycle::Exit { prev } => {
            let to = apply_pose(prev, exit_pose(prev.kind()));
            RenderedElement {
                element: morph_element(prev, &to, c.shape_eased, c.opacity_eased),
                visible: !c.settled(),
                phase: Phase::Exit,
            }
        }
    }
}

/// Reduced motion: geometry never moves. A persisting id that changed cross-fades between
/// an outgoing copy in its previous state and an incoming copy in its next state; the
/// outgoing copy is dropped once the fade settles. An unchanged id is drawn as is.
fn sample_reduced(d: &ElementDirective, c: Clocks, out: &mut Vec<RenderedElement>) {
    let te = c.opacity_eased;
    match &d.lifecycle {
        Lifecycle::Persist { prev, next } if prev == next => out.push(RenderedElement {
            element: next.clone(),
            visible: true,
            phase: Phase::Persist,
        }),
        Lifecycle::Persist { prev, next } => {
            if !c.settled() {
                out.push(fade_out(prev, c));
            }
            out.push(RenderedElement {
                element: fade_in(next, te),
                visible: true,
                phase: Phase::Persist,
            });
        }
        Lifecycle::Enter { next } => out.push(RenderedElement {
            element: fade_in(next, te),
            visible: true,
            phase: Phase::Enter,
        }),
        Lifecycle::Exit { prev } => out.push(fade_out(prev, c)),
    }
}

fn fade_in(el: &Element, te: f64) -> Element {
    let mut out = el.clone();
    out.base.opacity = f64::lerp(&0.0, &el.base.opacity, te);
    out
}

fn fade_out(el: &Element, c: Clocks) -> RenderedElement {
    let mut element = el.clone();
    element.base.opacity = f64::lerp(&el.base.opacity, &0.0, c.opacity_eased);
    RenderedElement {
        element,
        visible: !c.settled(),
        phase: Phase::Exit,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/morph/sample.rs"]
mod tests;
