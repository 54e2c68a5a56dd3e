//! Cairo-based rendering functions for canvases and shapes.

use super::canvas::Canvas;
use super::color::{BLACK, Color, FRAME_GRAY, WHITE};
use super::font::FontDescriptor;
use super::legend::{Legend, LegendLocation, spacing};
use super::shape::{ArrowHead, ArrowStyle, HAlign, LineStyle, PatchStyle, Point, Shape, TextLabel, VAlign};
use super::viewport::{PixelBox, Viewport};
use crate::util;

/// Distance arrows stop short of their end points, in points.
const ARROW_SHRINK_PT: f64 = 2.0;

/// Dash pattern of dashed lines, in multiples of the line width.
const DASH_PATTERN: [f64; 2] = [3.7, 1.6];

/// Opacity of the legend frame fill.
const LEGEND_FRAME_ALPHA: f64 = 0.8;

/// Measured size of a text layout in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtent {
    pub width: f64,
    pub height: f64,
    /// Distance from the layout top to the first baseline
    pub baseline: f64,
}

/// Renders everything on a canvas: axes background, shapes, legend, title.
///
/// The figure background is painted by the caller, which owns the surface.
/// Shapes are drawn in [`Canvas::paint_order`]; patches are clipped to the
/// axes rectangle while text may spill outside it.
pub fn render_canvas(
    ctx: &cairo::Context,
    canvas: &Canvas,
    viewport: &Viewport,
    family: &str,
) -> Result<(), cairo::Error> {
    if let Some(background) = canvas.axes.background() {
        pixel_rectangle(ctx, &viewport.axes);
        background.apply(ctx);
        ctx.fill()?;
    }

    for shape in canvas.paint_order() {
        if shape.is_clipped() {
            ctx.save()?;
            pixel_rectangle(ctx, &viewport.axes);
            ctx.clip();
            render_shape(ctx, shape, viewport, family)?;
            ctx.restore()?;
        } else {
            render_shape(ctx, shape, viewport, family)?;
        }
    }

    if let Some(legend) = canvas.legend.as_ref().filter(|legend| !legend.is_empty()) {
        render_legend(ctx, legend, viewport, family)?;
    }

    if let Some(title) = &canvas.title {
        let (x, y) = viewport.title_anchor(title.pad);
        render_text(ctx, &title.label_at(x, y), (x, y), family, viewport.dpi)?;
    }

    Ok(())
}

/// Renders a single shape to a Cairo context.
///
/// Dispatches to the appropriate internal rendering function based on shape type.
pub fn render_shape(
    ctx: &cairo::Context,
    shape: &Shape,
    viewport: &Viewport,
    family: &str,
) -> Result<(), cairo::Error> {
    match shape {
        Shape::Rect {
            x,
            y,
            width,
            height,
            style,
        } => render_rect(ctx, viewport, *x, *y, *width, *height, style),
        Shape::Circle {
            center,
            radius,
            style,
        } => render_circle(ctx, viewport, *center, *radius, style),
        Shape::Arrow { from, to, style } => render_arrow(ctx, viewport, *from, *to, style),
        Shape::Text(label) => {
            let anchor = viewport.to_pixel(label.position);
            render_text(ctx, label, anchor, family, viewport.dpi)
        }
    }
}

/// Render a rectangle given by its lower-left corner in data units.
fn render_rect(
    ctx: &cairo::Context,
    viewport: &Viewport,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    style: &PatchStyle,
) -> Result<(), cairo::Error> {
    let (x1, y1) = viewport.to_pixel((x, y + height));
    let (x2, y2) = viewport.to_pixel((x + width, y));

    // Normalize so negative sizes still describe the same area
    ctx.rectangle(x1.min(x2), y1.min(y2), (x2 - x1).abs(), (y2 - y1).abs());
    paint_patch(ctx, viewport, style)
}

/// Render a data-space circle using Cairo's arc with scaling.
fn render_circle(
    ctx: &cairo::Context,
    viewport: &Viewport,
    center: Point,
    radius: f64,
    style: &PatchStyle,
) -> Result<(), cairo::Error> {
    let rx = radius * viewport.x_scale();
    let ry = radius * viewport.y_scale();
    if rx <= 0.0 || ry <= 0.0 {
        return Ok(());
    }

    let (cx, cy) = viewport.to_pixel(center);
    ctx.save()?;
    ctx.translate(cx, cy);
    ctx.scale(rx, ry);
    ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * std::f64::consts::PI);
    ctx.restore()?;

    paint_patch(ctx, viewport, style)
}

/// Fills and outlines the current path.
fn paint_patch(
    ctx: &cairo::Context,
    viewport: &Viewport,
    style: &PatchStyle,
) -> Result<(), cairo::Error> {
    if let Some(fill) = style.fill_color() {
        fill.apply(ctx);
        ctx.fill_preserve()?;
    }

    if style.line_width > 0.0 {
        style.edge_color().apply(ctx);
        ctx.set_line_width(viewport.points(style.line_width));
        ctx.set_line_join(cairo::LineJoin::Miter);
        ctx.stroke()?;
    } else {
        ctx.new_path();
    }
    Ok(())
}

/// Render an arrow between two data points.
///
/// Both ends stop [`ARROW_SHRINK_PT`] short of the given points, matching the
/// way connectors leave a small gap to the shapes they link.
fn render_arrow(
    ctx: &cairo::Context,
    viewport: &Viewport,
    from: Point,
    to: Point,
    style: &ArrowStyle,
) -> Result<(), cairo::Error> {
    let shrink = viewport.points(ARROW_SHRINK_PT);
    let (start, end) = util::shrink_segment(
        viewport.to_pixel(from),
        viewport.to_pixel(to),
        shrink,
        shrink,
    );
    let line_width = viewport.points(style.line_width);

    ctx.save()?;
    style.color.apply(ctx);
    ctx.set_line_width(line_width);
    ctx.set_line_cap(cairo::LineCap::Butt);
    ctx.set_line_join(cairo::LineJoin::Miter);

    if style.line_style == LineStyle::Dashed {
        ctx.set_dash(&DASH_PATTERN.map(|d| d * line_width), 0.0);
    }
    ctx.move_to(start.0, start.1);
    ctx.line_to(end.0, end.1);
    ctx.stroke()?;

    // Heads keep the shaft's dash pattern.
    // `head_length` runs along the shaft, `head_half_width` across it.
    let head_length = viewport.points(style.head_length());
    let half_width = viewport.points(style.head_half_width());
    let side = head_length.hypot(half_width);
    let angle = half_width.atan2(head_length).to_degrees();

    match style.head {
        ArrowHead::Forward => render_open_head(ctx, end, start, side, angle)?,
        ArrowHead::Both => {
            render_open_head(ctx, end, start, side, angle)?;
            render_open_head(ctx, start, end, side, angle)?;
        }
        ArrowHead::ForwardFilled => render_filled_head(ctx, end, start, side, angle)?,
    }

    ctx.restore()
}

fn render_open_head(
    ctx: &cairo::Context,
    tip: (f64, f64),
    tail: (f64, f64),
    side: f64,
    angle: f64,
) -> Result<(), cairo::Error> {
    let [left, right] = util::calculate_arrowhead_custom(tip.0, tip.1, tail.0, tail.1, side, angle);
    ctx.move_to(left.0, left.1);
    ctx.line_to(tip.0, tip.1);
    ctx.line_to(right.0, right.1);
    ctx.stroke()
}

fn render_filled_head(
    ctx: &cairo::Context,
    tip: (f64, f64),
    tail: (f64, f64),
    side: f64,
    angle: f64,
) -> Result<(), cairo::Error> {
    let [left, right] = util::calculate_arrowhead_custom(tip.0, tip.1, tail.0, tail.1, side, angle);
    ctx.move_to(tip.0, tip.1);
    ctx.line_to(left.0, left.1);
    ctx.line_to(right.0, right.1);
    ctx.close_path();
    ctx.fill_preserve()?;
    ctx.stroke()
}

/// Creates a Pango layout for `label` with its font sized for `dpi`.
///
/// Multi-line text is aligned according to the label's horizontal anchor.
pub fn text_layout(
    ctx: &cairo::Context,
    label: &TextLabel,
    family: &str,
    dpi: f64,
) -> pango::Layout {
    let layout = pangocairo::functions::create_layout(ctx);
    let font = FontDescriptor::new(family, label.weight, label.style);
    layout.set_font_description(Some(&font.to_pango(label.size * dpi / 72.0)));
    layout.set_alignment(match label.h_align {
        HAlign::Left => pango::Alignment::Left,
        HAlign::Center => pango::Alignment::Center,
        HAlign::Right => pango::Alignment::Right,
    });
    layout.set_text(&label.text);
    layout
}

fn layout_extent(layout: &pango::Layout) -> TextExtent {
    let (_ink_rect, logical_rect) = layout.extents();
    let scale = pango::SCALE as f64;
    TextExtent {
        width: logical_rect.width() as f64 / scale,
        height: logical_rect.height() as f64 / scale,
        baseline: layout.baseline() as f64 / scale,
    }
}

/// Measures a label without a target surface.
pub fn measure_text(label: &TextLabel, family: &str, dpi: f64) -> Option<TextExtent> {
    if label.text.is_empty() {
        return None;
    }

    // Use a tiny image surface for measurement; the layout is all we need.
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 1, 1).ok()?;
    let ctx = cairo::Context::new(&surface).ok()?;
    let layout = text_layout(&ctx, label, family, dpi);
    Some(layout_extent(&layout))
}

/// Offset from the anchor to the layout's top-left corner for the given alignment.
pub fn alignment_offset(h_align: HAlign, v_align: VAlign, extent: &TextExtent) -> (f64, f64) {
    let dx = match h_align {
        HAlign::Left => 0.0,
        HAlign::Center => -extent.width / 2.0,
        HAlign::Right => -extent.width,
    };
    let dy = match v_align {
        VAlign::Top => 0.0,
        VAlign::Center => -extent.height / 2.0,
        VAlign::Baseline => -extent.baseline,
        VAlign::Bottom => -extent.height,
    };
    (dx, dy)
}

/// Renders text anchored at a pixel position using Pango.
///
/// The label is rotated counter-clockwise about its anchor; alignment is
/// applied in the label's own (rotated) frame.
pub fn render_text(
    ctx: &cairo::Context,
    label: &TextLabel,
    anchor: (f64, f64),
    family: &str,
    dpi: f64,
) -> Result<(), cairo::Error> {
    if label.text.is_empty() {
        return Ok(());
    }

    // Save context state to prevent settings from leaking to other drawing operations
    ctx.save()?;
    ctx.set_antialias(cairo::Antialias::Best);

    let layout = text_layout(ctx, label, family, dpi);
    let (dx, dy) = alignment_offset(label.h_align, label.v_align, &layout_extent(&layout));

    ctx.translate(anchor.0, anchor.1);
    ctx.rotate(-label.rotation.to_radians());
    pangocairo::functions::update_layout(ctx, &layout);

    ctx.move_to(dx, dy);
    label.color.apply(ctx);
    pangocairo::functions::show_layout(ctx, &layout);

    ctx.restore()
}

/// Resolved pixel geometry of a legend.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendLayout {
    pub frame: PixelBox,
    /// Handle box and label anchor (left, vertical center) per entry
    pub rows: Vec<(PixelBox, (f64, f64))>,
}

/// Places a legend inside the axes given the measured size of every label.
pub fn layout_legend(legend: &Legend, viewport: &Viewport, labels: &[TextExtent]) -> LegendLayout {
    let em = viewport.points(legend.font_size);
    let border_pad = spacing::BORDER_PAD * em;
    let handle_length = spacing::HANDLE_LENGTH * em;
    let handle_height = spacing::HANDLE_HEIGHT * em;
    let handle_text_pad = spacing::HANDLE_TEXT_PAD * em;
    let label_spacing = spacing::LABEL_SPACING * em;
    let axes_pad = spacing::AXES_PAD * em;

    let row_heights: Vec<f64> = labels
        .iter()
        .map(|extent| extent.height.max(handle_height))
        .collect();
    let widest = labels.iter().map(|extent| extent.width).fold(0.0, f64::max);

    let width = 2.0 * border_pad + handle_length + handle_text_pad + widest;
    let height = 2.0 * border_pad
        + row_heights.iter().sum::<f64>()
        + label_spacing * row_heights.len().saturating_sub(1) as f64;

    let axes = viewport.axes;
    let left = match legend.location {
        LegendLocation::UpperLeft | LegendLocation::LowerLeft => axes.left + axes_pad,
        LegendLocation::UpperRight | LegendLocation::LowerRight => axes.right - axes_pad - width,
    };
    let top = match legend.location {
        LegendLocation::UpperLeft | LegendLocation::UpperRight => axes.top + axes_pad,
        LegendLocation::LowerLeft | LegendLocation::LowerRight => axes.bottom - axes_pad - height,
    };

    let mut rows = Vec::with_capacity(row_heights.len());
    let mut y = top + border_pad;
    for row_height in row_heights {
        let center_y = y + row_height / 2.0;
        let handle_left = left + border_pad;
        let handle = PixelBox {
            left: handle_left,
            top: center_y - handle_height / 2.0,
            right: handle_left + handle_length,
            bottom: center_y + handle_height / 2.0,
        };
        rows.push((handle, (handle.right + handle_text_pad, center_y)));
        y += row_height + label_spacing;
    }

    LegendLayout {
        frame: PixelBox {
            left,
            top,
            right: left + width,
            bottom: top + height,
        },
        rows,
    }
}

/// Legend entry labels, left aligned and vertically centered on their row.
pub(crate) fn legend_labels(legend: &Legend) -> Vec<TextLabel> {
    legend
        .entries
        .iter()
        .map(|(_, text)| {
            TextLabel::new(0.0, 0.0, text.as_str())
                .size(legend.font_size)
                .color(BLACK)
                .align(HAlign::Left, VAlign::Center)
        })
        .collect()
}

fn render_legend(
    ctx: &cairo::Context,
    legend: &Legend,
    viewport: &Viewport,
    family: &str,
) -> Result<(), cairo::Error> {
    let labels = legend_labels(legend);
    let extents: Vec<TextExtent> = labels
        .iter()
        .map(|label| layout_extent(&text_layout(ctx, label, family, viewport.dpi)))
        .collect();

    let layout = layout_legend(legend, viewport, &extents);
    let em = viewport.points(legend.font_size);
    let line_width = viewport.points(1.0);

    rounded_rectangle(ctx, &layout.frame, spacing::CORNER_RADIUS * em);
    WHITE.with_alpha(LEGEND_FRAME_ALPHA).apply(ctx);
    ctx.fill_preserve()?;
    FRAME_GRAY.apply(ctx);
    ctx.set_line_width(line_width);
    ctx.stroke()?;

    for (((symbol, _), label), (handle, anchor)) in
        legend.entries.iter().zip(&labels).zip(&layout.rows)
    {
        pixel_rectangle(ctx, handle);
        fill_and_outline(ctx, symbol.fill, symbol.edge, line_width)?;
        render_text(ctx, label, *anchor, family, viewport.dpi)?;
    }

    Ok(())
}

fn fill_and_outline(
    ctx: &cairo::Context,
    fill: Color,
    edge: Color,
    line_width: f64,
) -> Result<(), cairo::Error> {
    fill.apply(ctx);
    ctx.fill_preserve()?;
    edge.apply(ctx);
    ctx.set_line_width(line_width);
    ctx.stroke()
}

fn pixel_rectangle(ctx: &cairo::Context, rect: &PixelBox) {
    ctx.rectangle(rect.left, rect.top, rect.width(), rect.height());
}

/// Adds a rectangle with circular corners to the current path.
fn rounded_rectangle(ctx: &cairo::Context, rect: &PixelBox, radius: f64) {
    use std::f64::consts::{FRAC_PI_2, PI};

    let r = radius.min(rect.width() / 2.0).min(rect.height() / 2.0).max(0.0);
    ctx.new_sub_path();
    ctx.arc(rect.right - r, rect.top + r, r, -FRAC_PI_2, 0.0);
    ctx.arc(rect.right - r, rect.bottom - r, r, 0.0, FRAC_PI_2);
    ctx.arc(rect.left + r, rect.bottom - r, r, FRAC_PI_2, PI);
    ctx.arc(rect.left + r, rect.top + r, r, PI, 3.0 * FRAC_PI_2);
    ctx.close_path();
}
