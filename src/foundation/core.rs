use crate::foundation::error::{MorphError, MorphResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// Reject NaN/infinite attribute values with a field-qualified message.
pub(crate) fn ensure_finite(id: &str, field: &str, v: f64) -> MorphResult<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(MorphError::validation(format!(
            "element '{id}': {field} must be finite"
        )))
    }
}

/// Reject negative or non-finite attribute values.
pub(crate) fn ensure_non_negative(id: &str, field: &str, v: f64) -> MorphResult<()> {
    ensure_finite(id, field, v)?;
    if v < 0.0 {
        return Err(MorphError::validation(format!(
            "element '{id}': {field} must be >= 0"
        )));
    }
    Ok(())
}

/// Affine placing a `width x height` box at `(x, y)`, rotated by `rotation_deg` about its
/// center.
pub(crate) fn box_affine(x: f64, y: f64, width: f64, height: f64, rotation_deg: f64) -> Affine {
    let center = Vec2::new(width * 0.5, height * 0.5);
    Affine::translate(Vec2::new(x, y))
        * Affine::translate(center)
        * Affine::rotate(rotation_deg.to_radians())
        * Affine::translate(-center)
}
