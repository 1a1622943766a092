use crate::keyframe::element::{Element, ElementKind, ElementProps};

/// Offset applied to an element's resting state to get its off-stage appearance.
///
/// Entering elements animate from their posed state to rest; exiting elements animate from
/// rest to their posed state. Scale is about the box center and also shrinks size-like
/// attributes (font size, stroke width, corner radius). Opacity is multiplied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// Horizontal offset in slide pixels.
    pub dx: f64,
    /// Vertical offset in slide pixels.
    pub dy: f64,
    /// Uniform scale about the box center.
    pub scale: f64,
    /// Rotation offset in degrees.
    pub rotation_deg: f64,
    /// Opacity multiplier.
    pub opacity: f64,
}

impl Pose {
    /// Opacity-only pose: same geometry, fully transparent.
    pub const FADE: Self = Self {
        dx: 0.0,
        dy: 0.0,
        scale: 1.0,
        rotation_deg: 0.0,
        opacity: 0.0,
    };

    const fn moved(dx: f64, dy: f64, scale: f64, rotation_deg: f64) -> Self {
        Self {
            dx,
            dy,
            scale,
            rotation_deg,
            opacity: 0.0,
        }
    }
}

/// Kind-specific starting pose for an entering element.
pub fn entrance_pose(kind: ElementKind) -> Pose {
    match kind {
        ElementKind::Text => Pose::moved(-20.0, 0.0, 0.95, 0.0),
        ElementKind::Image => Pose::moved(0.0, 0.0, 0.8, 0.0),
        ElementKind::Shape => Pose::moved(0.0, 0.0, 0.5, -15.0),
        ElementKind::Icon => Pose::moved(0.0, 0.0, 0.5, -180.0),
        ElementKind::Video => Pose::moved(0.0, 20.0, 0.95, 0.0),
    }
}

/// Kind-specific ending pose for an exiting element.
pub fn exit_pose(kind: ElementKind) -> Pose {
    match kind {
        ElementKind::Text => Pose::moved(20.0, 0.0, 0.95, 0.0),
        ElementKind::Image => Pose::moved(0.0, 0.0, 1.1, 0.0),
        ElementKind::Shape => Pose::moved(0.0, 0.0, 0.5, 15.0),
        ElementKind::Icon => Pose::moved(0.0, 0.0, 0.5, 180.0),
        ElementKind::Video => Pose::moved(0.0, -20.0, 0.95, 0.0),
    }
}

/// `el` displaced by `pose`.
pub fn apply_pose(el: &Element, pose: Pose) -> Element {
    let mut out = el.clone();
    let b = &mut out.base;
    let w = b.width * pose.scale;
    let h = b.height * pose.scale;
    b.x += (b.width - w) * 0.5 + pose.dx;
    b.y += (b.height - h) * 0.5 + pose.dy;
    b.width = w;
    b.height = h;
    b.rotation += pose.rotation_deg;
    b.opacity *= pose.opacity;

    let s = pose.scale;
    match &mut out.props {
        ElementProps::Text(p) => p.font_size *= s,
        ElementProps::Image(p) => p.corner_radius *= s,
        ElementProps::Shape(p) => {
            p.stroke_width *= s;
            p.corner_radius *= s;
        }
        ElementProps::Icon(p) => p.stroke_width *= s,
        ElementProps::Video(p) => p.corner_radius *= s,
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/morph/pose.rs"]
mod tests;
