//! Tight layout: shrink the axes until every unclipped artist fits the figure.
//!
//! Text labels, the legend and the title are measured once. Their pixel
//! footprint is then recomputed against the current axes and the overhang
//! past each axes edge is turned into margin. Labels anchored in data
//! coordinates move when the axes shrink, so the fit is repeated until the
//! axes stop moving.

use super::canvas::Canvas;
use super::render::{TextExtent, alignment_offset, layout_legend, legend_labels, measure_text};
use super::shape::{Shape, TextLabel};
use super::viewport::{PixelBox, Viewport};

/// Upper bound on refinement passes.
const MAX_PASSES: usize = 6;

/// Axes movement in pixels below which the layout counts as settled.
const SETTLED_PX: f64 = 0.25;

/// Pixel box covered by `label` drawn at `anchor` with the measured `extent`.
///
/// Rotation is applied about the anchor, after alignment, the same way
/// [`super::render::render_text`] draws it.
pub fn text_box(label: &TextLabel, anchor: (f64, f64), extent: &TextExtent) -> PixelBox {
    let (dx, dy) = alignment_offset(label.h_align, label.v_align, extent);
    let (sin, cos) = (-label.rotation.to_radians()).sin_cos();
    let corners = [
        (dx, dy),
        (dx + extent.width, dy),
        (dx, dy + extent.height),
        (dx + extent.width, dy + extent.height),
    ];

    let mut bounds = PixelBox {
        left: f64::INFINITY,
        top: f64::INFINITY,
        right: f64::NEG_INFINITY,
        bottom: f64::NEG_INFINITY,
    };
    for (u, v) in corners {
        let x = anchor.0 + u * cos - v * sin;
        let y = anchor.1 + u * sin + v * cos;
        bounds.left = bounds.left.min(x);
        bounds.top = bounds.top.min(y);
        bounds.right = bounds.right.max(x);
        bounds.bottom = bounds.bottom.max(y);
    }
    bounds
}

/// Everything drawn outside the clip, measured at one DPI.
struct Artists<'a> {
    labels: Vec<(&'a TextLabel, TextExtent)>,
    legend: Vec<TextExtent>,
    title: Option<(TextLabel, TextExtent, f64)>,
}

impl<'a> Artists<'a> {
    fn measure(canvas: &'a Canvas, dpi: f64, family: &str) -> Self {
        let labels: Vec<_> = canvas
            .shapes
            .iter()
            .filter(|shape| !shape.is_clipped())
            .filter_map(|shape| match shape {
                Shape::Text(label) => {
                    measure_text(label, family, dpi).map(|extent| (label, extent))
                }
                _ => None,
            })
            .collect();

        let legend: Vec<TextExtent> = canvas
            .legend
            .as_ref()
            .filter(|legend| !legend.is_empty())
            .map(|legend| {
                legend_labels(legend)
                    .iter()
                    .map(|label| measure_text(label, family, dpi).unwrap_or_default())
                    .collect()
            })
            .unwrap_or_default();

        let title = canvas.title.as_ref().and_then(|title| {
            let label = title.label_at(0.0, 0.0);
            measure_text(&label, family, dpi).map(|extent| (label, extent, title.pad))
        });

        Self {
            labels,
            legend,
            title,
        }
    }

    /// Union of the axes and every measured artist under `viewport`.
    fn footprint(&self, canvas: &Canvas, viewport: &Viewport) -> PixelBox {
        let mut content = viewport.axes;

        for (label, extent) in &self.labels {
            let anchor = viewport.to_pixel(label.position);
            content = content.union(&text_box(label, anchor, extent));
        }

        if let Some(legend) = canvas.legend.as_ref().filter(|_| !self.legend.is_empty()) {
            content = content.union(&layout_legend(legend, viewport, &self.legend).frame);
        }

        if let Some((label, extent, pad)) = &self.title {
            let anchor = viewport.title_anchor(*pad);
            content = content.union(&text_box(label, anchor, extent));
        }

        content
    }
}

/// Lays out `canvas` at `dpi` so that labels, legend and title stay inside
/// the figure.
pub fn tight_viewport(canvas: &Canvas, dpi: f64, family: &str) -> Viewport {
    let artists = Artists::measure(canvas, dpi, family);
    let mut viewport = Viewport::new(canvas, dpi);

    for pass in 1..=MAX_PASSES {
        let before = viewport.axes;
        let content = artists.footprint(canvas, &viewport);
        if !viewport.fit_content(content) {
            log::warn!(
                "Labels of a {}x{} in figure do not fit at {} dpi; axes left unchanged",
                canvas.width_in,
                canvas.height_in,
                dpi
            );
            break;
        }

        let moved = [
            (viewport.axes.left - before.left).abs(),
            (viewport.axes.top - before.top).abs(),
            (viewport.axes.right - before.right).abs(),
            (viewport.axes.bottom - before.bottom).abs(),
        ]
        .into_iter()
        .fold(0.0, f64::max);
        log::trace!("Layout pass {}: axes {:?}", pass, viewport.axes);
        if moved < SETTLED_PX {
            break;
        }
    }

    viewport
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::canvas::Title;
    use crate::draw::color::ACCENT_BLUE;
    use crate::draw::legend::{Legend, LegendLocation, LegendSymbol};
    use crate::draw::shape::{HAlign, VAlign};
    use crate::draw::viewport::LAYOUT_PAD_PT;

    const FAMILY: &str = "DejaVu Sans";

    fn extent() -> TextExtent {
        TextExtent {
            width: 40.0,
            height: 20.0,
            baseline: 15.0,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn centered_text_box_surrounds_anchor() {
        let label = TextLabel::new(0.0, 0.0, "x").centered();
        let bounds = text_box(&label, (100.0, 50.0), &extent());
        assert!(close(bounds.left, 80.0));
        assert!(close(bounds.right, 120.0));
        assert!(close(bounds.top, 40.0));
        assert!(close(bounds.bottom, 60.0));
    }

    #[test]
    fn vertical_text_box_swaps_width_and_height() {
        let label = TextLabel::new(0.0, 0.0, "x").centered().rotated(90.0);
        let bounds = text_box(&label, (100.0, 50.0), &extent());
        assert!((bounds.width() - 20.0).abs() < 1e-9);
        assert!((bounds.height() - 40.0).abs() < 1e-9);
        assert!((bounds.left - 90.0).abs() < 1e-9);
    }

    #[test]
    fn canvas_without_artists_keeps_default_axes() {
        let mut canvas = Canvas::new(4.0, 3.0);
        canvas.set_limits((0.0, 4.0), (0.0, 3.0));
        assert_eq!(
            tight_viewport(&canvas, 72.0, FAMILY),
            Viewport::new(&canvas, 72.0)
        );
    }

    #[test]
    fn overhanging_label_is_pulled_inside_figure() {
        let mut canvas = Canvas::new(4.0, 3.0);
        canvas.set_limits((0.0, 4.0), (0.0, 3.0));
        let label = TextLabel::new(3.9, 1.5, "A label running past the axes")
            .size(12.0)
            .align(HAlign::Left, VAlign::Center);
        canvas.add_text(label.clone());

        let viewport = tight_viewport(&canvas, 72.0, FAMILY);
        let extent = measure_text(&label, FAMILY, 72.0).expect("text should measure");
        let bounds = text_box(&label, viewport.to_pixel(label.position), &extent);

        assert!(viewport.axes.right < Viewport::new(&canvas, 72.0).axes.right);
        assert!(bounds.right <= viewport.figure_width - LAYOUT_PAD_PT + 0.5);
    }

    #[test]
    fn title_reserves_room_above_axes() {
        let mut canvas = Canvas::new(4.0, 3.0);
        canvas.set_limits((0.0, 4.0), (0.0, 3.0));
        canvas.set_title(Title::new("Heading").size(16.0).pad(20.0));

        let viewport = tight_viewport(&canvas, 72.0, FAMILY);
        assert!(viewport.axes.top > LAYOUT_PAD_PT + 20.0);
        let (_, baseline) = viewport.title_anchor(20.0);
        assert!(baseline > LAYOUT_PAD_PT);
    }

    #[test]
    fn legend_inside_axes_does_not_move_them() {
        let mut canvas = Canvas::new(6.0, 4.0);
        canvas.set_limits((0.0, 6.0), (0.0, 4.0));
        canvas.set_legend(
            Legend::new(LegendLocation::UpperLeft)
                .entry(LegendSymbol::swatch(ACCENT_BLUE), "Agent"),
        );

        assert_eq!(
            tight_viewport(&canvas, 72.0, FAMILY).axes,
            Viewport::new(&canvas, 72.0).axes
        );
    }
}
