//! PNG encoding of rendered surfaces, including the physical resolution.

use super::types::ExportError;
use cairo::ImageSurface;

const METERS_PER_INCH: f64 = 0.0254;
const BYTES_PER_PIXEL: usize = 4;

/// Pixels per meter stored in the `pHYs` chunk for `dpi`.
pub fn pixels_per_meter(dpi: f64) -> u32 {
    (dpi / METERS_PER_INCH).round() as u32
}

/// Converts premultiplied native-endian ARGB32 rows to straight RGBA bytes.
fn straight_rgba(data: &[u8], width: usize, height: usize, stride: usize) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(width * height * BYTES_PER_PIXEL);
    for row in data.chunks(stride).take(height) {
        for pixel in row[..width * BYTES_PER_PIXEL].chunks_exact(BYTES_PER_PIXEL) {
            let argb = u32::from_ne_bytes([pixel[0], pixel[1], pixel[2], pixel[3]]);
            let alpha = argb >> 24;
            let channel = |shift: u32| {
                let value = (argb >> shift) & 0xFF;
                if alpha == 0 {
                    0
                } else {
                    ((value * 255 + alpha / 2) / alpha) as u8
                }
            };
            rgba.extend_from_slice(&[channel(16), channel(8), channel(0), alpha as u8]);
        }
    }
    rgba
}

/// Encodes `surface` as an 8-bit RGBA PNG tagged with `dpi`.
pub fn write_png(surface: &mut ImageSurface, dpi: f64) -> Result<Vec<u8>, ExportError> {
    let width = surface.width().max(0) as u32;
    let height = surface.height().max(0) as u32;
    let stride = surface.stride().max(0) as usize;

    surface.flush();
    let rgba = {
        let data = surface
            .data()
            .map_err(|err| ExportError::SurfaceData(err.to_string()))?;
        straight_rgba(&data, width as usize, height as usize, stride)
    };

    let ppu = pixels_per_meter(dpi);
    let mut bytes = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut bytes, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_pixel_dims(Some(png::PixelDimensions {
            xppu: ppu,
            yppu: ppu,
            unit: png::Unit::Meter,
        }));
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&rgba)?;
        writer.finish()?;
    }

    log::debug!("Encoded {}x{} PNG at {} px/m ({} bytes)", width, height, ppu, bytes.len());
    Ok(bytes)
}
