use crate::{
    foundation::error::MorphResult,
    keyframe::model::Keyframe,
    morph::{
        frame::RenderableFrame,
        options::MorphOptions,
        plan::{TransitionPlan, begin_from_snapshot, begin_transition},
        sample::{is_complete, sample},
    },
};

/// A plan anchored to the clock time it started at.
///
/// Time is supplied by the caller (milliseconds on any monotonic clock); nothing here reads
/// a clock.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveTransition {
    plan: TransitionPlan,
    started_at_ms: f64,
}

impl ActiveTransition {
    /// Plan `prev -> next` and start it at `now_ms`.
    pub fn begin(
        prev: &Keyframe,
        next: &Keyframe,
        opts: &MorphOptions,
        now_ms: f64,
    ) -> MorphResult<Self> {
        Ok(Self::from_plan(begin_transition(prev, next, opts)?, now_ms))
    }

    /// Start an existing plan at `started_at_ms`.
    pub fn from_plan(plan: TransitionPlan, started_at_ms: f64) -> Self {
        Self {
            plan,
            started_at_ms,
        }
    }

    /// Underlying plan.
    pub fn plan(&self) -> &TransitionPlan {
        &self.plan
    }

    /// Clock time this transition started at.
    pub fn started_at_ms(&self) -> f64 {
        self.started_at_ms
    }

    /// Keyframe reached on completion.
    pub fn target(&self) -> &Keyframe {
        self.plan.target()
    }

    /// Time since start, never negative.
    pub fn elapsed_ms(&self, now_ms: f64) -> f64 {
        (now_ms - self.started_at_ms).max(0.0)
    }

    /// Frame at clock time `now_ms`.
    pub fn sample_at(&self, now_ms: f64) -> RenderableFrame {
        sample(&self.plan, self.elapsed_ms(now_ms))
    }

    /// Whether the transition has settled at clock time `now_ms`.
    pub fn is_complete_at(&self, now_ms: f64) -> bool {
        is_complete(&self.plan, self.elapsed_ms(now_ms))
    }

    /// Retarget towards `next` from wherever the elements are at `now_ms`.
    ///
    /// The new transition starts from the sampled state, so nothing jumps. Once this
    /// transition has settled, the new one simply starts from the target keyframe.
    #[tracing::instrument(skip(self, next, opts), fields(next = next.len()))]
    pub fn interrupt(
        &self,
        now_ms: f64,
        next: &Keyframe,
        opts: &MorphOptions,
    ) -> MorphResult<Self> {
        if self.is_complete_at(now_ms) {
            return Self::begin(self.target(), next, opts, now_ms);
        }
        let snapshot = self.sample_at(now_ms).snapshot();
        let plan = begin_from_snapshot(&snapshot, next, opts)?;
        Ok(Self::from_plan(plan, now_ms))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/morph/active.rs"]
mod tests;
