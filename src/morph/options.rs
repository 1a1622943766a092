use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::{
    animation::ease::Ease,
    foundation::error::{MorphError, MorphResult},
};

/// Default delay between consecutive staggered directives.
pub const DEFAULT_STAGGER_STEP_MS: f64 = 120.0;
/// Default per-element transition length.
pub const DEFAULT_ELEMENT_DURATION_MS: f64 = 600.0;
/// Default length of the opacity fade; shorter than the geometry so fades settle first.
pub const DEFAULT_OPACITY_DURATION_MS: f64 = 400.0;
/// Default cross-fade length in reduced-motion mode.
pub const DEFAULT_REDUCED_DURATION_MS: f64 = 200.0;

/// How exiting elements are staggered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitStagger {
    /// Exits get their own stagger counter starting at zero.
    #[default]
    Independent,
    /// Every exit starts immediately.
    Simultaneous,
}

/// Transition tuning. Every field is optional in JSON.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MorphOptions {
    /// Collapse every directive into a short opacity cross-fade.
    pub reduced_motion: bool,
    /// Delay added per position in the stagger sequence.
    pub stagger_step_ms: f64,
    /// Length of one directive's geometry, color and size interpolation.
    pub element_duration_ms: f64,
    /// Length of one directive's opacity interpolation.
    pub opacity_duration_ms: f64,
    /// Length of the reduced-motion cross-fade.
    pub reduced_duration_ms: f64,
    /// Curve applied to normalized progress.
    pub ease: Ease,
    /// Curve for opacity; falls back to `ease` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity_ease: Option<Ease>,
    /// Stagger policy for exits.
    pub exit_stagger: ExitStagger,
}

impl Default for MorphOptions {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            stagger_step_ms: DEFAULT_STAGGER_STEP_MS,
            element_duration_ms: DEFAULT_ELEMENT_DURATION_MS,
            opacity_duration_ms: DEFAULT_OPACITY_DURATION_MS,
            reduced_duration_ms: DEFAULT_REDUCED_DURATION_MS,
            ease: Ease::default(),
            opacity_ease: None,
            exit_stagger: ExitStagger::default(),
        }
    }
}

impl MorphOptions {
    /// Default options with reduced motion switched on or off.
    pub fn reduced(reduced_motion: bool) -> Self {
        Self {
            reduced_motion,
            ..Self::default()
        }
    }

    /// Reject negative or non-finite timings and unusable easing parameters.
    pub fn validate(&self) -> MorphResult<()> {
        for (name, v) in [
            ("staggerStepMs", self.stagger_step_ms),
            ("elementDurationMs", self.element_duration_ms),
            ("opacityDurationMs", self.opacity_duration_ms),
            ("reducedDurationMs", self.reduced_duration_ms),
        ] {
            if !v.is_finite() {
                return Err(MorphError::invalid_options(format!("{name} must be finite")));
            }
            if v < 0.0 {
                return Err(MorphError::invalid_options(format!("{name} must be >= 0")));
            }
        }
        if !self.ease.is_valid() || !self.opacity_ease.is_none_or(Ease::is_valid) {
            return Err(MorphError::invalid_options(
                "cubic_bezier x control points must be in [0, 1]",
            ));
        }
        Ok(())
    }

    /// Parse and validate options from JSON text.
    pub fn from_json_str(s: &str) -> MorphResult<Self> {
        let opts: Self = serde_json::from_str(s)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Read, parse and validate an options file.
    pub fn from_path(path: &Path) -> MorphResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read options '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Stagger step actually applied (zero in reduced-motion mode).
    pub(crate) fn effective_step_ms(&self) -> f64 {
        if self.reduced_motion {
            0.0
        } else {
            self.stagger_step_ms
        }
    }

    /// Directive length actually applied.
    pub(crate) fn effective_duration_ms(&self) -> f64 {
        if self.reduced_motion {
            self.reduced_duration_ms
        } else {
            self.element_duration_ms
        }
    }

    /// Opacity fade length actually applied. Reduced motion fades on the cross-fade clock.
    pub(crate) fn effective_opacity_duration_ms(&self) -> f64 {
        if self.reduced_motion {
            self.reduced_duration_ms
        } else {
            self.opacity_duration_ms
        }
    }

    /// Curve applied to opacity.
    pub(crate) fn effective_opacity_ease(&self) -> Ease {
        self.opacity_ease.unwrap_or(self.ease)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/morph/options.rs"]
mod tests;
