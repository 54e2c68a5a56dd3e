//! Rasterization of canvases to PNG.
//!
//! A canvas is rendered onto an oversized surface so that text spilling past
//! the figure edge survives, then cropped either to the figure rectangle or
//! tightly to the drawn content, encoded as PNG and written atomically.
//! The axes are laid out first so that every label fits inside the figure.

pub mod crop;
pub mod encode;
pub mod file;
pub mod types;

pub use file::{partial_path, save_png, write_atomically};
pub use types::{ExportError, ExportOptions};

use crate::config::BBoxMode;
use crate::draw::{Canvas, render_canvas, tight_viewport};
use crate::util::Rect;
use cairo::{Context, Format, ImageSurface};

/// Margin around the figure that unclipped text may draw into, in inches.
const OVERFLOW_INCHES: f64 = 1.0;

/// Renders `canvas` and returns the cropped raster.
pub fn rasterize(canvas: &Canvas, options: &ExportOptions) -> Result<ImageSurface, ExportError> {
    let dpi = options.dpi;
    let (width, height) = canvas.pixel_size(dpi);
    let figure = Rect::new(0, 0, width, height)
        .ok_or(ExportError::InvalidDimensions { width, height })?;

    let margin = (OVERFLOW_INCHES * dpi).round() as i32;
    let mut surface =
        ImageSurface::create(Format::ARgb32, width + 2 * margin, height + 2 * margin)?;

    let viewport = tight_viewport(canvas, dpi, &options.font_family);
    log::debug!(
        "Figure {}x{} px at {} dpi, axes {:?}",
        width,
        height,
        dpi,
        viewport.axes
    );

    {
        let ctx = Context::new(&surface)?;
        canvas.face_color.apply(&ctx);
        ctx.paint()?;
        ctx.translate(margin as f64, margin as f64);
        render_canvas(&ctx, canvas, &viewport, &options.font_family)?;
    }

    let figure_region = Rect {
        x: margin,
        y: margin,
        ..figure
    };
    let region = match options.bbox {
        BBoxMode::Figure => figure_region,
        BBoxMode::Tight => {
            let pad = (options.pad_inches * dpi).round() as i32;
            crop::content_bounds(&mut surface, canvas.face_color)?
                .map(|mut content| {
                    content.inflate(pad);
                    content.clamp_to_bounds(surface.width(), surface.height());
                    content
                })
                .filter(Rect::is_valid)
                .unwrap_or(figure_region)
        }
    };
    log::debug!("Crop region {:?}", region);

    crop::crop(&surface, region)
}

/// Renders `canvas` and encodes the result as PNG bytes tagged with the DPI.
pub fn encode_png(canvas: &Canvas, options: &ExportOptions) -> Result<Vec<u8>, ExportError> {
    let mut surface = rasterize(canvas, options)?;
    encode::write_png(&mut surface, options.dpi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::ALERT_RED;
    use crate::draw::{PatchStyle, Shape};

    fn options(bbox: BBoxMode) -> ExportOptions {
        ExportOptions {
            dpi: 50.0,
            bbox,
            ..ExportOptions::default()
        }
    }

    fn red_block() -> Canvas {
        let mut canvas = Canvas::new(4.0, 2.0);
        canvas.set_limits((0.0, 4.0), (0.0, 2.0));
        canvas.hide_axes();
        let mut style = PatchStyle::filled(ALERT_RED);
        style.line_width = 0.0;
        canvas.add_shape(Shape::rect(1.0, 0.5, 1.0, 1.0, style));
        canvas
    }

    #[test]
    fn figure_bbox_matches_figure_size() {
        let surface = rasterize(&red_block(), &options(BBoxMode::Figure)).unwrap();
        assert_eq!((surface.width(), surface.height()), (200, 100));
    }

    #[test]
    fn tight_bbox_shrinks_to_content() {
        let surface = rasterize(&red_block(), &options(BBoxMode::Tight)).unwrap();
        assert!(surface.width() < 200);
        assert!(surface.height() <= 100);
        assert!(surface.width() > 10);
    }

    #[test]
    fn empty_canvas_falls_back_to_figure() {
        let mut canvas = Canvas::new(2.0, 1.0);
        canvas.hide_axes();
        let surface = rasterize(&canvas, &options(BBoxMode::Tight)).unwrap();
        assert_eq!((surface.width(), surface.height()), (100, 50));
    }

    #[test]
    fn zero_sized_canvas_is_rejected() {
        let canvas = Canvas::new(0.0, 1.0);
        let err = rasterize(&canvas, &options(BBoxMode::Figure)).unwrap_err();
        assert!(matches!(err, ExportError::InvalidDimensions { width: 0, .. }));
    }

    #[test]
    fn encoded_png_has_signature() {
        let bytes = encode_png(&red_block(), &options(BBoxMode::Figure)).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn filled_rect_lands_in_expected_pixels() {
        let mut surface = rasterize(&red_block(), &options(BBoxMode::Figure)).unwrap();
        let stride = surface.stride() as usize;
        let viewport = crate::draw::Viewport::new(&red_block(), 50.0);
        let (x, y) = viewport.to_pixel((1.5, 1.0));
        let data = surface.data().unwrap();
        let offset = y as usize * stride + x as usize * 4;
        // ARGB32 is stored as native-endian u32: B, G, R, A on little endian
        let pixel = u32::from_ne_bytes(data[offset..offset + 4].try_into().unwrap());
        assert_eq!(pixel, 0xFFFF5050);
    }
}
