//! Content detection and cropping of rendered surfaces.

use super::types::ExportError;
use crate::draw::Color;
use crate::util::Rect;
use cairo::{Context, Format, ImageSurface};

const BYTES_PER_PIXEL: usize = 4;

/// Returns the ARGB32 bytes Cairo stores for an opaque fill of `color`.
pub fn background_pixel(color: Color) -> Result<[u8; 4], ExportError> {
    let mut surface = ImageSurface::create(Format::ARgb32, 1, 1)?;
    {
        let ctx = Context::new(&surface)?;
        color.apply(&ctx);
        ctx.paint()?;
    }
    surface.flush();

    let data = surface
        .data()
        .map_err(|err| ExportError::SurfaceData(err.to_string()))?;
    let mut pixel = [0u8; 4];
    pixel.copy_from_slice(&data[..BYTES_PER_PIXEL]);
    Ok(pixel)
}

/// Finds the smallest rectangle containing every pixel that differs from `background`.
///
/// Returns `None` when the surface holds nothing but background.
pub fn content_bounds(
    surface: &mut ImageSurface,
    background: Color,
) -> Result<Option<Rect>, ExportError> {
    let background = background_pixel(background)?;
    let width = surface.width().max(0) as usize;
    let height = surface.height().max(0) as usize;
    let stride = surface.stride().max(0) as usize;

    surface.flush();
    let data = surface
        .data()
        .map_err(|err| ExportError::SurfaceData(err.to_string()))?;

    let mut bounds: Option<(usize, usize, usize, usize)> = None;
    for y in 0..height {
        let row = &data[y * stride..y * stride + width * BYTES_PER_PIXEL];
        let mut pixels = row.chunks_exact(BYTES_PER_PIXEL);
        let Some(first) = pixels.position(|pixel| pixel != &background[..]) else {
            continue;
        };
        let last = row
            .chunks_exact(BYTES_PER_PIXEL)
            .rposition(|pixel| pixel != &background[..])
            .unwrap_or(first);

        bounds = Some(match bounds {
            None => (first, y, last, y),
            Some((min_x, min_y, max_x, _)) => (min_x.min(first), min_y, max_x.max(last), y),
        });
    }

    Ok(bounds.and_then(|(min_x, min_y, max_x, max_y)| {
        Rect::from_min_max(
            min_x as i32,
            min_y as i32,
            max_x as i32 + 1,
            max_y as i32 + 1,
        )
    }))
}

/// Copies `region` of `surface` into a new surface of exactly that size.
pub fn crop(surface: &ImageSurface, region: Rect) -> Result<ImageSurface, ExportError> {
    if !region.is_valid() {
        return Err(ExportError::InvalidDimensions {
            width: region.width,
            height: region.height,
        });
    }

    let cropped = ImageSurface::create(Format::ARgb32, region.width, region.height)?;
    {
        let ctx = Context::new(&cropped)?;
        ctx.set_operator(cairo::Operator::Source);
        ctx.set_source_surface(surface, -(region.x as f64), -(region.y as f64))?;
        ctx.paint()?;
    }
    Ok(cropped)
}
