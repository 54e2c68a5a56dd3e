//! Mapping from data coordinates to figure pixels.

use super::canvas::Canvas;
use super::shape::Point;

/// Padding around the axes, in points (1.08 x the 10pt default font size).
pub const LAYOUT_PAD_PT: f64 = 1.08 * 10.0;

/// Axis-aligned box in pixel space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PixelBox {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &PixelBox) -> PixelBox {
        PixelBox {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// Resolved layout of one canvas at one DPI.
///
/// [`Viewport::new`] insets the axes by a fixed pad on every side;
/// [`Viewport::fit_content`] then pulls them in further so that whatever is
/// drawn around the axes stays inside the figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub dpi: f64,
    /// Figure size in pixels
    pub figure_width: f64,
    pub figure_height: f64,
    /// Axes rectangle in figure pixels
    pub axes: PixelBox,
    x_limits: (f64, f64),
    y_limits: (f64, f64),
}

impl Viewport {
    /// Lays out `canvas` at `dpi` with the axes inset by [`LAYOUT_PAD_PT`].
    pub fn new(canvas: &Canvas, dpi: f64) -> Self {
        let (width, height) = canvas.pixel_size(dpi);
        let figure_width = width as f64;
        let figure_height = height as f64;
        let pad = LAYOUT_PAD_PT * dpi / 72.0;

        let axes = PixelBox {
            left: pad,
            top: pad,
            right: (figure_width - pad).max(pad),
            bottom: (figure_height - pad).max(pad),
        };

        Self {
            dpi,
            figure_width,
            figure_height,
            axes,
            x_limits: canvas.axes.x_limits,
            y_limits: canvas.axes.y_limits,
        }
    }

    /// Moves the axes so that `content`, measured against the current axes,
    /// fits inside the figure minus the layout pad.
    ///
    /// The overhang of `content` past each axes edge becomes extra margin on
    /// that side. Returns `false` and leaves the axes alone when the margins
    /// would leave no room for them.
    pub fn fit_content(&mut self, content: PixelBox) -> bool {
        let pad = self.points(LAYOUT_PAD_PT);
        let axes = PixelBox {
            left: pad + (self.axes.left - content.left).max(0.0),
            top: pad + (self.axes.top - content.top).max(0.0),
            right: self.figure_width - pad - (content.right - self.axes.right).max(0.0),
            bottom: self.figure_height - pad - (content.bottom - self.axes.bottom).max(0.0),
        };

        if axes.width() <= 0.0 || axes.height() <= 0.0 {
            return false;
        }
        self.axes = axes;
        true
    }

    /// Converts a length in points to pixels.
    pub fn points(&self, pt: f64) -> f64 {
        pt * self.dpi / 72.0
    }

    /// Pixels per data unit horizontally.
    pub fn x_scale(&self) -> f64 {
        self.axes.width() / span(self.x_limits)
    }

    /// Pixels per data unit vertically.
    pub fn y_scale(&self) -> f64 {
        self.axes.height() / span(self.y_limits)
    }

    /// Maps a data point to figure pixels.
    pub fn to_pixel(&self, (x, y): Point) -> (f64, f64) {
        let px = self.axes.left + (x - self.x_limits.0) * self.x_scale();
        let py = self.axes.bottom - (y - self.y_limits.0) * self.y_scale();
        (px, py)
    }

    /// Baseline anchor of the title: centered over the axes, `pad` points above.
    pub fn title_anchor(&self, pad_pt: f64) -> (f64, f64) {
        (
            (self.axes.left + self.axes.right) / 2.0,
            self.axes.top - self.points(pad_pt),
        )
    }
}

fn span((low, high): (f64, f64)) -> f64 {
    let span = high - low;
    if span.abs() < f64::EPSILON { 1.0 } else { span }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Canvas {
        let mut canvas = Canvas::new(10.0, 8.0);
        canvas.set_limits((0.0, 10.0), (0.0, 8.0));
        canvas
    }

    #[test]
    fn axes_inset_by_layout_pad() {
        let viewport = Viewport::new(&canvas(), 72.0);
        let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
        assert!(close(viewport.axes.left, LAYOUT_PAD_PT));
        assert!(close(viewport.axes.top, LAYOUT_PAD_PT));
        assert!(close(viewport.axes.right, 720.0 - LAYOUT_PAD_PT));
        assert!(close(viewport.axes.bottom, 576.0 - LAYOUT_PAD_PT));
    }

    #[test]
    fn data_origin_maps_to_lower_left_of_axes() {
        let viewport = Viewport::new(&canvas(), 72.0);
        let (x, y) = viewport.to_pixel((0.0, 0.0));
        assert!((x - viewport.axes.left).abs() < 1e-9);
        assert!((y - viewport.axes.bottom).abs() < 1e-9);
        let (x, y) = viewport.to_pixel((10.0, 8.0));
        assert!((x - viewport.axes.right).abs() < 1e-9);
        assert!((y - viewport.axes.top).abs() < 1e-9);
    }

    #[test]
    fn title_anchor_sits_above_axes() {
        let viewport = Viewport::new(&canvas(), 144.0);
        let (x, baseline) = viewport.title_anchor(20.0);
        assert!((x - 720.0).abs() < 1e-9);
        assert!((baseline - (viewport.axes.top - 40.0)).abs() < 1e-9);
    }

    #[test]
    fn fit_content_turns_overhang_into_margin() {
        let mut viewport = Viewport::new(&canvas(), 72.0);
        let axes = viewport.axes;
        let content = PixelBox {
            left: axes.left,
            top: axes.top - 30.0,
            right: axes.right + 50.0,
            bottom: axes.bottom,
        };

        assert!(viewport.fit_content(content));
        let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
        assert!(close(viewport.axes.left, LAYOUT_PAD_PT));
        assert!(close(viewport.axes.top, LAYOUT_PAD_PT + 30.0));
        assert!(close(viewport.axes.right, 720.0 - LAYOUT_PAD_PT - 50.0));
        assert!(close(viewport.axes.bottom, 576.0 - LAYOUT_PAD_PT));
    }

    #[test]
    fn fit_content_rejects_content_wider_than_figure() {
        let mut viewport = Viewport::new(&canvas(), 72.0);
        let before = viewport.axes;
        let content = PixelBox {
            left: before.left - 400.0,
            top: before.top,
            right: before.right + 400.0,
            bottom: before.bottom,
        };

        assert!(!viewport.fit_content(content));
        assert_eq!(viewport.axes, before);
    }

    #[test]
    fn unequal_scales_are_preserved() {
        let mut canvas = Canvas::new(12.0, 9.0);
        canvas.set_limits((0.0, 14.0), (0.0, 9.0));
        let viewport = Viewport::new(&canvas, 100.0);
        assert!(viewport.x_scale() < viewport.y_scale());
    }

    #[test]
    fn degenerate_limits_do_not_divide_by_zero() {
        let mut canvas = canvas();
        canvas.set_limits((2.0, 2.0), (0.0, 8.0));
        let viewport = Viewport::new(&canvas, 72.0);
        assert!(viewport.x_scale().is_finite());
    }
}
