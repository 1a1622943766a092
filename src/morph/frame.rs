use std::collections::HashSet;

use serde::Serialize;

use crate::keyframe::{element::Element, model::Keyframe};

/// Role of a rendered entry within its transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Morphing between two resting states.
    Persist,
    /// Arriving from its entrance pose.
    Enter,
    /// Leaving towards its exit pose.
    Exit,
}

/// One element's resolved state at a sampled instant.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderedElement {
    /// Fully resolved attributes.
    #[serde(flatten)]
    pub element: Element,
    /// False once an exit has finished; the renderer drops the element.
    pub visible: bool,
    /// Lifecycle role.
    pub phase: Phase,
}

/// Everything a renderer needs for one instant, in paint order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderableFrame {
    /// Whether every directive has settled.
    pub complete: bool,
    /// Entries sorted by stack order; ties keep plan order.
    pub entries: Vec<RenderedElement>,
}

/// Resting state captured from a frame, used to start a new transition mid-flight.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    /// One live element per id, in paint order.
    pub keyframe: Keyframe,
    /// Still-visible exits whose id is also held by a live element.
    pub residual_exits: Vec<Element>,
}

impl RenderableFrame {
    /// Frame showing `keyframe` at rest.
    pub fn at_rest(keyframe: &Keyframe) -> Self {
        let mut entries: Vec<RenderedElement> = keyframe
            .elements()
            .iter()
            .map(|el| RenderedElement {
                element: el.clone(),
                visible: true,
                phase: Phase::Persist,
            })
            .collect();
        entries.sort_by_key(|e| e.element.base.stack_order);
        Self {
            complete: true,
            entries,
        }
    }

    /// Entries a renderer should draw.
    pub fn visible(&self) -> impl Iterator<Item = &RenderedElement> {
        self.entries.iter().filter(|e| e.visible)
    }

    /// The visible entry for `id`, preferring a live one over an exiting copy.
    pub fn find(&self, id: &str) -> Option<&RenderedElement> {
        self.visible()
            .find(|e| e.element.id == id && e.phase != Phase::Exit)
            .or_else(|| self.visible().find(|e| e.element.id == id))
    }

    /// Capture the frame as a resting keyframe plus leftover ghosts.
    ///
    /// Live entries claim their id first. A visible exiting entry joins the keyframe when
    /// its id is free, so navigating back can revive it; otherwise it stays a residual exit.
    /// Finished exits are dropped.
    pub fn snapshot(&self) -> Snapshot {
        let mut claimed = HashSet::new();
        let mut elements = Vec::with_capacity(self.entries.len());
        for e in self.visible().filter(|e| e.phase != Phase::Exit) {
            if claimed.insert(e.element.id.as_str()) {
                elements.push(e.element.clone());
            }
        }

        let mut residual_exits = Vec::new();
        for e in self.visible().filter(|e| e.phase == Phase::Exit) {
            if claimed.insert(e.element.id.as_str()) {
                elements.push(e.element.clone());
            } else {
                residual_exits.push(e.element.clone());
            }
        }

        tracing::debug!(
            live = elements.len(),
            residual = residual_exits.len(),
            "frame snapshot"
        );

        Snapshot {
            keyframe: Keyframe::from_unique(elements),
            residual_exits,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/morph/frame.rs"]
mod tests;
