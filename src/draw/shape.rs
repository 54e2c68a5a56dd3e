//! Shape definitions for diagram primitives.

use super::color::{BLACK, Color};
use super::font::{FontStyle, FontWeight};

/// A position in data coordinates (x to the right, y up).
pub type Point = (f64, f64);

/// Fill and outline of a closed patch (rectangle or circle).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PatchStyle {
    /// Interior color, `None` for an outline-only patch
    pub fill: Option<Color>,
    /// Outline color
    pub edge: Color,
    /// Overrides the alpha of both fill and edge when set
    pub alpha: Option<f64>,
    /// Outline width in points
    pub line_width: f64,
}

impl PatchStyle {
    /// Filled patch with a 1pt black outline.
    pub fn filled(fill: Color) -> Self {
        Self {
            fill: Some(fill),
            edge: BLACK,
            alpha: None,
            line_width: 1.0,
        }
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    /// Fill color with the patch alpha applied.
    pub fn fill_color(&self) -> Option<Color> {
        self.fill.map(|fill| self.effective(fill))
    }

    /// Edge color with the patch alpha applied.
    pub fn edge_color(&self) -> Color {
        self.effective(self.edge)
    }

    fn effective(&self, color: Color) -> Color {
        match self.alpha {
            Some(alpha) => color.with_alpha(alpha),
            None => color,
        }
    }
}

/// Where arrowheads are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrowHead {
    /// Open head at the destination (`->`)
    Forward,
    /// Open heads at both ends (`<->`)
    Both,
    /// Filled triangular head at the destination (`-|>`)
    ForwardFilled,
}

/// Stroke pattern of a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
}

/// Appearance of an arrow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowStyle {
    pub head: ArrowHead,
    /// Head size multiplier in points
    pub mutation_scale: f64,
    pub color: Color,
    /// Line width in points
    pub line_width: f64,
    pub line_style: LineStyle,
}

impl ArrowStyle {
    pub fn new(head: ArrowHead, color: Color) -> Self {
        Self {
            head,
            mutation_scale: 10.0,
            color,
            line_width: 1.0,
            line_style: LineStyle::Solid,
        }
    }

    pub fn scale(mut self, mutation_scale: f64) -> Self {
        self.mutation_scale = mutation_scale;
        self
    }

    pub fn width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    pub fn dashed(mut self) -> Self {
        self.line_style = LineStyle::Dashed;
        self
    }

    /// Head length in points.
    pub fn head_length(&self) -> f64 {
        0.4 * self.mutation_scale
    }

    /// Half the head width in points.
    pub fn head_half_width(&self) -> f64 {
        0.2 * self.mutation_scale
    }
}

/// Horizontal anchor of a text label relative to its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical anchor of a text label relative to its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VAlign {
    Top,
    Center,
    #[default]
    Baseline,
    Bottom,
}

/// A text label anchored at a data position.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    pub position: Point,
    /// Text content (may contain '\n' for line breaks)
    pub text: String,
    /// Font size in points
    pub size: f64,
    pub color: Color,
    pub weight: FontWeight,
    pub style: FontStyle,
    pub h_align: HAlign,
    pub v_align: VAlign,
    /// Counter-clockwise rotation in degrees
    pub rotation: f64,
}

impl TextLabel {
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            position: (x, y),
            text: text.into(),
            size: 10.0,
            color: BLACK,
            weight: FontWeight::Normal,
            style: FontStyle::Normal,
            h_align: HAlign::default(),
            v_align: VAlign::default(),
            rotation: 0.0,
        }
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    pub fn italic(mut self) -> Self {
        self.style = FontStyle::Italic;
        self
    }

    pub fn align(mut self, h_align: HAlign, v_align: VAlign) -> Self {
        self.h_align = h_align;
        self.v_align = v_align;
        self
    }

    /// Centers the label on its position.
    pub fn centered(self) -> Self {
        self.align(HAlign::Center, VAlign::Center)
    }

    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }
}

/// A drawable primitive placed on a canvas.
///
/// Coordinates are in data units; the viewport maps them to pixels at render time.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Axis-aligned rectangle anchored at its lower-left corner
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        style: PatchStyle,
    },
    /// Circle in data units (an ellipse on screen when the axes scales differ)
    Circle {
        center: Point,
        radius: f64,
        style: PatchStyle,
    },
    /// Straight arrow between two points
    Arrow {
        from: Point,
        to: Point,
        style: ArrowStyle,
    },
    /// Text label
    Text(TextLabel),
}

/// Layer of rectangles, circles and arrows.
pub const PATCH_LAYER: u8 = 1;
/// Layer of text labels; always above patches.
pub const TEXT_LAYER: u8 = 3;

impl Shape {
    pub fn rect(x: f64, y: f64, width: f64, height: f64, style: PatchStyle) -> Self {
        Shape::Rect {
            x,
            y,
            width,
            height,
            style,
        }
    }

    pub fn circle(center: Point, radius: f64, style: PatchStyle) -> Self {
        Shape::Circle {
            center,
            radius,
            style,
        }
    }

    pub fn arrow(from: Point, to: Point, style: ArrowStyle) -> Self {
        Shape::Arrow { from, to, style }
    }

    /// Drawing layer; lower layers are painted first.
    pub fn layer(&self) -> u8 {
        match self {
            Shape::Text(_) => TEXT_LAYER,
            _ => PATCH_LAYER,
        }
    }

    /// Whether the shape is clipped to the axes rectangle.
    pub fn is_clipped(&self) -> bool {
        !matches!(self, Shape::Text(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{ACCENT_GOLD, WHITE};

    #[test]
    fn patch_alpha_applies_to_fill_and_edge() {
        let style = PatchStyle::filled(ACCENT_GOLD).alpha(0.7);
        assert_eq!(style.fill_color().unwrap().a, 0.7);
        assert_eq!(style.edge_color().a, 0.7);
        assert_eq!(style.edge_color().r, 0.0);
    }

    #[test]
    fn patch_without_alpha_keeps_colors() {
        let style = PatchStyle::filled(WHITE);
        assert_eq!(style.fill_color(), Some(WHITE));
        assert_eq!(style.edge_color(), BLACK);
    }

    #[test]
    fn arrow_head_geometry_scales_with_mutation() {
        let style = ArrowStyle::new(ArrowHead::Forward, BLACK).scale(20.0);
        assert_eq!(style.head_length(), 8.0);
        assert_eq!(style.head_half_width(), 4.0);
    }

    #[test]
    fn text_sits_above_patches_and_is_not_clipped() {
        let text = Shape::Text(TextLabel::new(0.0, 0.0, "label"));
        let rect = Shape::rect(0.0, 0.0, 1.0, 1.0, PatchStyle::filled(WHITE));
        assert!(text.layer() > rect.layer());
        assert!(!text.is_clipped());
        assert!(rect.is_clipped());
    }

    #[test]
    fn text_builder_sets_font_and_alignment() {
        let label = TextLabel::new(1.0, 2.0, "Switch")
            .size(14.0)
            .bold()
            .italic()
            .centered()
            .rotated(90.0);
        assert_eq!(label.size, 14.0);
        assert_eq!(label.weight, FontWeight::Bold);
        assert_eq!(label.style, FontStyle::Italic);
        assert_eq!((label.h_align, label.v_align), (HAlign::Center, VAlign::Center));
        assert_eq!(label.rotation, 90.0);
    }
}
