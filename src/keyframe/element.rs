use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::foundation::{
    color::Color,
    core::{Affine, Rect, box_affine, ensure_finite, ensure_non_negative},
    error::{MorphError, MorphResult},
};

/// Closed set of element kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Styled text block.
    Text,
    /// Raster or vector image.
    Image,
    /// Geometric shape.
    Shape,
    /// Named icon from an icon set.
    Icon,
    /// Video frame surface.
    Video,
}

impl ElementKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 5] = [Self::Text, Self::Image, Self::Shape, Self::Icon, Self::Video];

    /// Stable lowercase discriminator used in slide JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Shape => "shape",
            Self::Icon => "icon",
            Self::Video => "video",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = MorphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "shape" => Ok(Self::Shape),
            "icon" => Ok(Self::Icon),
            "video" => Ok(Self::Video),
            _ => Err(MorphError::unknown_kind("", s)),
        }
    }
}

/// Geometric and visual attributes shared by every kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseAttrs {
    /// Left edge in slide pixels.
    pub x: f64,
    /// Top edge in slide pixels.
    pub y: f64,
    /// Box width.
    pub width: f64,
    /// Box height.
    pub height: f64,
    /// Rotation about the box center, in degrees.
    #[serde(default)]
    pub rotation: f64,
    /// Opacity in `[0, 1]`.
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    /// Paint order; higher paints later. Switches at the transition midpoint.
    #[serde(default, alias = "zIndex")]
    pub stack_order: i32,
}

impl Default for BaseAttrs {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 100.0,
            rotation: 0.0,
            opacity: 1.0,
            stack_order: 0,
        }
    }
}

fn default_opacity() -> f64 {
    1.0
}

/// Horizontal text alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Flush left.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Flush right.
    Right,
    /// Justified.
    Justify,
}

/// How image or video content fits its box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectFit {
    /// Letterbox inside the box.
    Contain,
    /// Fill the box, cropping overflow.
    #[default]
    Cover,
    /// Stretch to the box.
    Fill,
    /// Natural size.
    None,
    /// Natural size, shrunk to fit when larger.
    ScaleDown,
}

/// Geometry of a shape element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Rectangle (optionally rounded).
    #[default]
    Rect,
    /// Circle inscribed in the box.
    Circle,
    /// Ellipse filling the box.
    Ellipse,
    /// Arbitrary SVG path.
    Path,
}

/// Text-specific attributes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextProps {
    /// Displayed content.
    pub text: String,
    /// Font size in pixels.
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    /// Text color.
    #[serde(default)]
    pub color: Color,
    /// CSS-style weight (`normal`, `bold`, `600`, ...).
    #[serde(default = "default_font_weight")]
    pub font_weight: String,
    /// Font family name.
    #[serde(default = "default_font_family")]
    pub font_family: String,
    /// Horizontal alignment.
    #[serde(default)]
    pub text_align: TextAlign,
    /// Line height as a multiple of the font size.
    #[serde(default = "default_line_height")]
    pub line_height: f64,
}

impl Default for TextProps {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_size: default_font_size(),
            color: Color::BLACK,
            font_weight: default_font_weight(),
            font_family: default_font_family(),
            text_align: TextAlign::Left,
            line_height: default_line_height(),
        }
    }
}

fn default_font_size() -> f64 {
    24.0
}

fn default_font_weight() -> String {
    "normal".to_owned()
}

fn default_font_family() -> String {
    "inherit".to_owned()
}

fn default_line_height() -> f64 {
    1.5
}

/// Image-specific attributes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageProps {
    /// Image URL or path.
    #[serde(alias = "src")]
    pub source: String,
    /// Alternative text.
    #[serde(default)]
    pub alt: String,
    /// Content fit.
    #[serde(default)]
    pub object_fit: ObjectFit,
    /// Corner rounding radius in pixels.
    #[serde(default, alias = "borderRadius")]
    pub corner_radius: f64,
}

/// Shape-specific attributes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeProps {
    /// Shape geometry.
    #[serde(alias = "shapeType")]
    pub shape_kind: ShapeKind,
    /// Fill color.
    #[serde(default, alias = "fill")]
    pub fill_color: Color,
    /// Stroke color; transparent means no visible border.
    #[serde(default = "transparent", alias = "stroke")]
    pub stroke_color: Color,
    /// Stroke width in pixels.
    #[serde(default)]
    pub stroke_width: f64,
    /// Corner rounding radius for rectangles.
    #[serde(default, alias = "borderRadius")]
    pub corner_radius: f64,
    /// SVG path data for [`ShapeKind::Path`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg_path: Option<String>,
}

impl Default for ShapeProps {
    fn default() -> Self {
        Self {
            shape_kind: ShapeKind::Rect,
            fill_color: Color::BLACK,
            stroke_color: Color::TRANSPARENT,
            stroke_width: 0.0,
            corner_radius: 0.0,
            svg_path: None,
        }
    }
}

fn transparent() -> Color {
    Color::TRANSPARENT
}

/// Icon-specific attributes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconProps {
    /// Icon name within the icon set.
    pub icon_name: String,
    /// Stroke color.
    #[serde(default)]
    pub color: Color,
    /// Stroke width in pixels.
    #[serde(default = "default_icon_stroke")]
    pub stroke_width: f64,
}

impl Default for IconProps {
    fn default() -> Self {
        Self {
            icon_name: String::new(),
            color: Color::BLACK,
            stroke_width: default_icon_stroke(),
        }
    }
}

fn default_icon_stroke() -> f64 {
    2.0
}

/// Video-specific attributes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoProps {
    /// Video URL or path.
    #[serde(alias = "src")]
    pub source: String,
    /// Content fit.
    #[serde(default)]
    pub object_fit: ObjectFit,
    /// Corner rounding radius in pixels.
    #[serde(default, alias = "borderRadius")]
    pub corner_radius: f64,
    /// Play without audio.
    #[serde(default = "yes")]
    pub muted: bool,
    /// Restart when playback ends.
    #[serde(default, alias = "loop")]
    pub looping: bool,
}

impl Default for VideoProps {
    fn default() -> Self {
        Self {
            source: String::new(),
            object_fit: ObjectFit::Cover,
            corner_radius: 0.0,
            muted: true,
            looping: false,
        }
    }
}

fn yes() -> bool {
    true
}

/// Kind-specific attribute sets, tagged by `kind`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ElementProps {
    /// Text attributes.
    Text(TextProps),
    /// Image attributes.
    Image(ImageProps),
    /// Shape attributes.
    Shape(ShapeProps),
    /// Icon attributes.
    Icon(IconProps),
    /// Video attributes.
    Video(VideoProps),
}

impl ElementProps {
    /// Kind discriminator for these attributes.
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Text(_) => ElementKind::Text,
            Self::Image(_) => ElementKind::Image,
            Self::Shape(_) => ElementKind::Shape,
            Self::Icon(_) => ElementKind::Icon,
            Self::Video(_) => ElementKind::Video,
        }
    }
}

/// A single visual primitive on a slide.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Stable identity used to match this element across keyframes.
    pub id: String,
    /// Shared geometric/visual attributes.
    #[serde(flatten)]
    pub base: BaseAttrs,
    /// Kind-specific attributes.
    #[serde(flatten)]
    pub props: ElementProps,
}

impl Element {
    /// Build an element with default base attributes.
    pub fn new(id: impl Into<String>, props: ElementProps) -> Self {
        Self {
            id: id.into(),
            base: BaseAttrs::default(),
            props,
        }
    }

    /// Text element with default styling.
    pub fn text(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(
            id,
            ElementProps::Text(TextProps {
                text: text.into(),
                ..TextProps::default()
            }),
        )
    }

    /// Image element with default fit.
    pub fn image(id: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(
            id,
            ElementProps::Image(ImageProps {
                source: source.into(),
                ..ImageProps::default()
            }),
        )
    }

    /// Shape element with default fill.
    pub fn shape(id: impl Into<String>, shape_kind: ShapeKind) -> Self {
        Self::new(
            id,
            ElementProps::Shape(ShapeProps {
                shape_kind,
                ..ShapeProps::default()
            }),
        )
    }

    /// Icon element with default stroke.
    pub fn icon(id: impl Into<String>, icon_name: impl Into<String>) -> Self {
        Self::new(
            id,
            ElementProps::Icon(IconProps {
                icon_name: icon_name.into(),
                ..IconProps::default()
            }),
        )
    }

    /// Video element with default playback flags.
    pub fn video(id: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(
            id,
            ElementProps::Video(VideoProps {
                source: source.into(),
                ..VideoProps::default()
            }),
        )
    }

    /// Set the top-left position.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.base.x = x;
        self.base.y = y;
        self
    }

    /// Set the box size.
    pub fn sized(mut self, width: f64, height: f64) -> Self {
        self.base.width = width;
        self.base.height = height;
        self
    }

    /// Set rotation in degrees.
    pub fn rotated(mut self, degrees: f64) -> Self {
        self.base.rotation = degrees;
        self
    }

    /// Set opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.base.opacity = opacity;
        self
    }

    /// Set paint order.
    pub fn stacked(mut self, stack_order: i32) -> Self {
        self.base.stack_order = stack_order;
        self
    }

    /// Kind discriminator.
    pub fn kind(&self) -> ElementKind {
        self.props.kind()
    }

    /// Axis-aligned box before rotation.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.base.x,
            self.base.y,
            self.base.x + self.base.width,
            self.base.y + self.base.height,
        )
    }

    /// Local-to-slide transform: translation to `(x, y)` and rotation about the box center.
    pub fn transform(&self) -> Affine {
        box_affine(
            self.base.x,
            self.base.y,
            self.base.width,
            self.base.height,
            self.base.rotation,
        )
    }

    /// Parse one element from slide JSON.
    ///
    /// Accepts the legacy `type` discriminator in place of `kind`. An unrecognized
    /// discriminator is reported as [`MorphError::UnknownElementKind`].
    pub fn from_json_value(value: &serde_json::Value) -> MorphResult<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| MorphError::validation("element must be a JSON object"))?;
        let id = obj
            .get("id")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_owned();

        let raw_kind = match (obj.get("kind"), obj.get("type")) {
            (Some(k), _) => k,
            (None, Some(t)) => t,
            (None, None) => {
                return Err(MorphError::validation(format!(
                    "element '{id}': missing kind"
                )));
            }
        };
        let raw_kind = raw_kind.as_str().ok_or_else(|| {
            MorphError::validation(format!("element '{id}': kind must be a string"))
        })?;
        let kind = raw_kind
            .parse::<ElementKind>()
            .map_err(|_| MorphError::unknown_kind(id.clone(), raw_kind))?;

        let mut obj = obj.clone();
        obj.remove("type");
        obj.insert(
            "kind".to_owned(),
            serde_json::Value::String(kind.as_str().to_owned()),
        );

        let element: Self = serde_json::from_value(serde_json::Value::Object(obj))
            .map_err(|e| MorphError::serde(format!("element '{id}': {e}")))?;
        element.validate()?;
        Ok(element)
    }

    /// Check attribute ranges: finite numbers, non-negative sizes, opacity in `[0, 1]`.
    pub fn validate(&self) -> MorphResult<()> {
        let id = self.id.as_str();
        if id.trim().is_empty() {
            return Err(MorphError::validation("element id must be non-empty"));
        }

        let b = &self.base;
        ensure_finite(id, "x", b.x)?;
        ensure_finite(id, "y", b.y)?;
        ensure_non_negative(id, "width", b.width)?;
        ensure_non_negative(id, "height", b.height)?;
        ensure_finite(id, "rotation", b.rotation)?;
        ensure_finite(id, "opacity", b.opacity)?;
        if !(0.0..=1.0).contains(&b.opacity) {
            return Err(MorphError::validation(format!(
                "element '{id}': opacity must be in [0, 1]"
            )));
        }

        let check_color = |field: &str, c: Color| {
            if c.is_finite() {
                Ok(())
            } else {
                Err(MorphError::validation(format!(
                    "element '{id}': {field} must be finite"
                )))
            }
        };

        match &self.props {
            ElementProps::Text(p) => {
                ensure_non_negative(id, "fontSize", p.font_size)?;
                ensure_non_negative(id, "lineHeight", p.line_height)?;
                check_color("color", p.color)?;
            }
            ElementProps::Image(p) => {
                ensure_non_negative(id, "cornerRadius", p.corner_radius)?;
            }
            ElementProps::Shape(p) => {
                ensure_non_negative(id, "strokeWidth", p.stroke_width)?;
                ensure_non_negative(id, "cornerRadius", p.corner_radius)?;
                check_color("fillColor", p.fill_color)?;
                check_color("strokeColor", p.stroke_color)?;
            }
            ElementProps::Icon(p) => {
                ensure_non_negative(id, "strokeWidth", p.stroke_width)?;
                check_color("color", p.color)?;
            }
            ElementProps::Video(p) => {
                ensure_non_negative(id, "cornerRadius", p.corner_radius)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/keyframe/element.rs"]
mod tests;
