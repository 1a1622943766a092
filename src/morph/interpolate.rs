use crate::{
    animation::lerp::{Lerp, snap},
    foundation::{color::Color, error::MorphError, error::MorphResult},
    keyframe::element::{BaseAttrs, Element, ElementProps},
};

/// Pairing check for a persisting id.
pub(crate) fn ensure_same_kind(prev: &Element, next: &Element) -> MorphResult<()> {
    if prev.kind() == next.kind() {
        Ok(())
    } else {
        Err(MorphError::KindMismatchOnPersist {
            id: next.id.clone(),
            previous: prev.kind(),
            next: next.kind(),
        })
    }
}

/// Resolve the in-between state of one element at eased progress `t`, with opacity at its
/// own eased progress `t_opacity`.
///
/// Numeric attributes and colors interpolate; categorical ones switch at the midpoint of
/// `t`. Both factors at or below 0 yield `from` and both at or above 1 yield `to`, bit for
/// bit, so overshooting curves saturate at the endpoints.
///
/// Both elements are expected to share a kind. If they don't, the whole attribute set
/// snaps at the midpoint.
pub(crate) fn morph_element(from: &Element, to: &Element, t: f64, t_opacity: f64) -> Element {
    if t <= 0.0 && t_opacity <= 0.0 {
        return from.clone();
    }
    if t >= 1.0 && t_opacity >= 1.0 {
        return to.clone();
    }

    let props = match (&from.props, &to.props) {
        (ElementProps::Text(a), ElementProps::Text(b)) => {
            let mut p = b.clone();
            p.text = snap(&a.text, &b.text, t);
            p.font_size = f64::lerp(&a.font_size, &b.font_size, t);
            p.color = Color::lerp(&a.color, &b.color, t);
            p.font_weight = snap(&a.font_weight, &b.font_weight, t);
            p.font_family = snap(&a.font_family, &b.font_family, t);
            p.text_align = snap(&a.text_align, &b.text_align, t);
            p.line_height = f64::lerp(&a.line_height, &b.line_height, t);
            ElementProps::Text(p)
        }
        (ElementProps::Image(a), ElementProps::Image(b)) => {
            let mut p = b.clone();
            p.source = snap(&a.source, &b.source, t);
            p.alt = snap(&a.alt, &b.alt, t);
            p.object_fit = snap(&a.object_fit, &b.object_fit, t);
            p.corner_radius = f64::lerp(&a.corner_radius, &b.corner_radius, t);
            ElementProps::Image(p)
        }
        (ElementProps::Shape(a), ElementProps::Shape(b)) => {
            let mut p = b.clone();
            p.shape_kind = snap(&a.shape_kind, &b.shape_kind, t);
            p.fill_color = Color::lerp(&a.fill_color, &b.fill_color, t);
            p.stroke_color = Color::lerp(&a.stroke_color, &b.stroke_color, t);
            p.stroke_width = f64::lerp(&a.stroke_width, &b.stroke_width, t);
            p.corner_radius = f64::lerp(&a.corner_radius, &b.corner_radius, t);
            p.svg_path = snap(&a.svg_path, &b.svg_path, t);
            ElementProps::Shape(p)
        }
        (ElementProps::Icon(a), ElementProps::Icon(b)) => {
            let mut p = b.clone();
            p.icon_name = snap(&a.icon_name, &b.icon_name, t);
            p.color = Color::lerp(&a.color, &b.color, t);
            p.stroke_width = f64::lerp(&a.stroke_width, &b.stroke_width, t);
            ElementProps::Icon(p)
        }
        (ElementProps::Video(a), ElementProps::Video(b)) => {
            let mut p = b.clone();
            p.source = snap(&a.source, &b.source, t);
            p.object_fit = snap(&a.object_fit, &b.object_fit, t);
            p.corner_radius = f64::lerp(&a.corner_radius, &b.corner_radius, t);
            p.muted = snap(&a.muted, &b.muted, t);
            p.looping = snap(&a.looping, &b.looping, t);
            ElementProps::Video(p)
        }
        (a, b) => snap(a, b, t),
    };

    Element {
        id: to.id.clone(),
        base: morph_base(&from.base, &to.base, t, t_opacity),
        props,
    }
}

fn morph_base(a: &BaseAttrs, b: &BaseAttrs, t: f64, t_opacity: f64) -> BaseAttrs {
    BaseAttrs {
        x: f64::lerp(&a.x, &b.x, t),
        y: f64::lerp(&a.y, &b.y, t),
        width: f64::lerp(&a.width, &b.width, t),
        height: f64::lerp(&a.height, &b.height, t),
        rotation: f64::lerp(&a.rotation, &b.rotation, t),
        opacity: f64::lerp(&a.opacity, &b.opacity, t_opacity),
        stack_order: snap(&a.stack_order, &b.stack_order, t),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/morph/interpolate.rs"]
mod tests;
