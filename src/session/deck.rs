use std::path::Path;

use anyhow::Context as _;
use serde::Serialize;

use crate::{
    foundation::error::{MorphError, MorphResult},
    keyframe::model::Keyframe,
    morph::{active::ActiveTransition, frame::RenderableFrame, options::MorphOptions},
};

/// One slide: presentation styling plus its resting keyframe.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    /// Background style token, passed through to the renderer.
    pub background: String,
    /// Default text style token, passed through to the renderer.
    pub text_color: String,
    /// Elements at rest.
    #[serde(flatten)]
    pub keyframe: Keyframe,
}

fn default_background() -> String {
    "educational-gradient-1".to_owned()
}

fn default_text_color() -> String {
    "text-gray-800".to_owned()
}

impl Slide {
    /// Slide with default styling.
    pub fn new(keyframe: Keyframe) -> Self {
        Self {
            background: default_background(),
            text_color: default_text_color(),
            keyframe,
        }
    }

    /// Parse one slide object. Element errors keep their own variant.
    pub fn from_json_value(value: &serde_json::Value) -> MorphResult<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| MorphError::validation("slide must be a JSON object"))?;
        let style = |key: &str, default: fn() -> String| match obj.get(key) {
            None | Some(serde_json::Value::Null) => Ok(default()),
            Some(serde_json::Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(MorphError::validation(format!(
                "slide {key} must be a string"
            ))),
        };
        Ok(Self {
            background: style("background", default_background)?,
            text_color: style("textColor", default_text_color)?,
            keyframe: Keyframe::from_json_value(value)?,
        })
    }
}

/// Ordered, non-empty list of slides.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    /// Build a deck; at least one slide is required.
    pub fn new(slides: Vec<Slide>) -> MorphResult<Self> {
        if slides.is_empty() {
            return Err(MorphError::validation("deck must contain at least one slide"));
        }
        Ok(Self { slides })
    }

    /// Parse `{ "slides": [...] }` or a bare array of slides.
    pub fn from_json_value(value: &serde_json::Value) -> MorphResult<Self> {
        let items = match value {
            serde_json::Value::Array(items) => items,
            serde_json::Value::Object(obj) => obj
                .get("slides")
                .and_then(|v| v.as_array())
                .ok_or_else(|| MorphError::validation("deck object must have a `slides` array"))?,
            _ => {
                return Err(MorphError::validation(
                    "deck must be an array of slides or an object with `slides`",
                ));
            }
        };

        let slides = items
            .iter()
            .map(Slide::from_json_value)
            .collect::<MorphResult<Vec<_>>>()?;
        Self::new(slides)
    }

    /// Parse deck JSON text.
    pub fn from_json_str(s: &str) -> MorphResult<Self> {
        let value: serde_json::Value = serde_json::from_str(s)?;
        Self::from_json_value(&value)
    }

    /// Read and parse a deck file.
    pub fn from_path(path: &Path) -> MorphResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read deck '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Slides in presentation order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Slide at `index`.
    pub fn slide(&self, index: usize) -> MorphResult<&Slide> {
        self.slides.get(index).ok_or_else(|| {
            MorphError::validation(format!(
                "slide index {index} out of range (deck has {} slides)",
                self.slides.len()
            ))
        })
    }

    /// Number of slides (never zero).
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

/// Drives a deck: current position plus the transition in flight, if any.
///
/// The caller owns the clock and passes `now_ms` into every call.
#[derive(Clone, Debug)]
pub struct DeckPlayer {
    deck: Deck,
    current: usize,
    options: MorphOptions,
    active: Option<ActiveTransition>,
}

impl DeckPlayer {
    /// Player resting on the first slide.
    pub fn new(deck: Deck, options: MorphOptions) -> MorphResult<Self> {
        options.validate()?;
        Ok(Self {
            deck,
            current: 0,
            options,
            active: None,
        })
    }

    /// The deck being played.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Index of the slide being shown or transitioned to.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Slide being shown or transitioned to.
    pub fn current_slide(&self) -> &Slide {
        &self.deck.slides[self.current]
    }

    /// Options used for future transitions.
    pub fn options(&self) -> &MorphOptions {
        &self.options
    }

    /// Replace the options; a transition already in flight keeps its plan.
    pub fn set_options(&mut self, options: MorphOptions) -> MorphResult<()> {
        options.validate()?;
        self.options = options;
        Ok(())
    }

    /// Transition in flight, if any.
    pub fn active(&self) -> Option<&ActiveTransition> {
        self.active.as_ref()
    }

    /// Whether a transition is still moving at `now_ms`.
    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.active
            .as_ref()
            .is_some_and(|a| !a.is_complete_at(now_ms))
    }

    /// What is on screen at `now_ms`.
    pub fn frame(&self, now_ms: f64) -> RenderableFrame {
        match &self.active {
            Some(active) => active.sample_at(now_ms),
            None => RenderableFrame::at_rest(&self.current_slide().keyframe),
        }
    }

    /// Advance one slide. Returns `false` at the last slide.
    pub fn next(&mut self, now_ms: f64) -> MorphResult<bool> {
        if self.current + 1 >= self.deck.len() {
            return Ok(false);
        }
        self.go_to(self.current + 1, now_ms)
    }

    /// Go back one slide. Returns `false` at the first slide.
    pub fn previous(&mut self, now_ms: f64) -> MorphResult<bool> {
        if self.current == 0 {
            return Ok(false);
        }
        self.go_to(self.current - 1, now_ms)
    }

    /// Jump to `index`, morphing from whatever is on screen. Returns `false` when `index`
    /// is already current.
    #[tracing::instrument(skip(self), fields(from = self.current))]
    pub fn go_to(&mut self, index: usize, now_ms: f64) -> MorphResult<bool> {
        let next = self.deck.slide(index)?.keyframe.clone();
        if index == self.current {
            return Ok(false);
        }

        let active = match &self.active {
            Some(active) if !active.is_complete_at(now_ms) => {
                active.interrupt(now_ms, &next, &self.options)?
            }
            _ => ActiveTransition::begin(
                &self.current_slide().keyframe,
                &next,
                &self.options,
                now_ms,
            )?,
        };
        self.active = Some(active);
        self.current = index;
        Ok(true)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/deck.rs"]
mod tests;
