//! RGBA color type and the diagram palette.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use sdn_diagrams::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let translucent = red.with_alpha(0.5);
/// assert_eq!(translucent.a, 0.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates an opaque color from 8-bit channels.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Returns the same color with its alpha replaced.
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Sets this color as the Cairo source.
    pub fn apply(&self, ctx: &cairo::Context) {
        ctx.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

/// Predefined white color (R=1.0, G=1.0, B=1.0)
pub const WHITE: Color = Color::rgb8(0xFF, 0xFF, 0xFF);

/// Predefined black color (R=0.0, G=0.0, B=0.0)
pub const BLACK: Color = Color::rgb8(0x00, 0x00, 0x00);

/// Mid gray, `#808080`.
pub const GRAY: Color = Color::rgb8(0x80, 0x80, 0x80);

// ============================================================================
// Diagram palette (office-theme accents shared by both figures)
// ============================================================================

pub const ACCENT_BLUE: Color = Color::rgb8(0x44, 0x72, 0xC4);
pub const ACCENT_GREEN: Color = Color::rgb8(0x70, 0xAD, 0x47);
pub const ACCENT_GOLD: Color = Color::rgb8(0xFF, 0xC0, 0x00);
pub const LIGHT_GRAY: Color = Color::rgb8(0xD9, 0xD9, 0xD9);
pub const LIGHT_BLUE: Color = Color::rgb8(0x5B, 0x9B, 0xD5);
pub const ALERT_RED: Color = Color::rgb8(0xFF, 0x50, 0x50);
pub const TEXT_DARK: Color = Color::rgb8(0x33, 0x33, 0x33);
pub const PANEL_BACKGROUND: Color = Color::rgb8(0xF8, 0xF8, 0xF8);

/// Legend frame border.
pub const FRAME_GRAY: Color = Color::rgb8(0xCC, 0xCC, 0xCC);
