//! Canvas container for a single figure.

use super::color::{Color, WHITE};
use super::font::FontWeight;
use super::legend::Legend;
use super::shape::{Shape, TextLabel};

/// The plotting rectangle inside the figure that data coordinates map onto.
#[derive(Debug, Clone, PartialEq)]
pub struct Axes {
    /// Data range shown horizontally (left, right)
    pub x_limits: (f64, f64),
    /// Data range shown vertically (bottom, top)
    pub y_limits: (f64, f64),
    /// Background of the axes rectangle
    pub face_color: Option<Color>,
    /// Hidden axes draw no background
    pub visible: bool,
}

impl Default for Axes {
    fn default() -> Self {
        Self {
            x_limits: (0.0, 1.0),
            y_limits: (0.0, 1.0),
            face_color: Some(WHITE),
            visible: true,
        }
    }
}

impl Axes {
    /// Axes background, if one should be painted.
    pub fn background(&self) -> Option<Color> {
        if self.visible { self.face_color } else { None }
    }
}

/// Figure title drawn centered above the axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Title {
    pub text: String,
    /// Font size in points
    pub size: f64,
    pub weight: FontWeight,
    /// Gap between the axes top and the title baseline, in points
    pub pad: f64,
    pub color: Color,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: 12.0,
            weight: FontWeight::Normal,
            pad: 6.0,
            color: super::color::BLACK,
        }
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    pub fn pad(mut self, pad: f64) -> Self {
        self.pad = pad;
        self
    }

    /// The title as a label anchored at `(x, y)` in pixel space.
    pub(crate) fn label_at(&self, x: f64, y: f64) -> TextLabel {
        let mut label = TextLabel::new(x, y, self.text.clone())
            .size(self.size)
            .color(self.color)
            .align(super::shape::HAlign::Center, super::shape::VAlign::Baseline);
        label.weight = self.weight;
        label
    }
}

/// In-memory description of a figure before rasterization.
///
/// Holds every shape in insertion order; rendering paints them by layer and,
/// within a layer, first added = bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    /// Figure width in inches
    pub width_in: f64,
    /// Figure height in inches
    pub height_in: f64,
    /// Figure background
    pub face_color: Color,
    pub axes: Axes,
    pub shapes: Vec<Shape>,
    pub legend: Option<Legend>,
    pub title: Option<Title>,
}

impl Canvas {
    /// Creates an empty white figure of the given size in inches.
    pub fn new(width_in: f64, height_in: f64) -> Self {
        Self {
            width_in,
            height_in,
            face_color: WHITE,
            axes: Axes::default(),
            shapes: Vec::new(),
            legend: None,
            title: None,
        }
    }

    /// Figure size in pixels at the given DPI.
    pub fn pixel_size(&self, dpi: f64) -> (i32, i32) {
        (
            (self.width_in * dpi).round() as i32,
            (self.height_in * dpi).round() as i32,
        )
    }

    pub fn set_axes_background(&mut self, color: Color) {
        self.axes.face_color = Some(color);
    }

    pub fn set_limits(&mut self, x_limits: (f64, f64), y_limits: (f64, f64)) {
        self.axes.x_limits = x_limits;
        self.axes.y_limits = y_limits;
    }

    /// Turns off the axes, including their background.
    pub fn hide_axes(&mut self) {
        self.axes.visible = false;
    }

    /// Adds a new shape (drawn on top of existing shapes of the same layer).
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn add_text(&mut self, label: TextLabel) {
        self.shapes.push(Shape::Text(label));
    }

    pub fn set_legend(&mut self, legend: Legend) {
        self.legend = Some(legend);
    }

    pub fn set_title(&mut self, title: Title) {
        self.title = Some(title);
    }

    /// Shapes in paint order: by layer, then by insertion order.
    pub fn paint_order(&self) -> Vec<&Shape> {
        let mut ordered: Vec<&Shape> = self.shapes.iter().collect();
        // sort_by_key is stable, so insertion order survives within a layer
        ordered.sort_by_key(|shape| shape.layer());
        ordered
    }
}
