//! Rendering primitives and shape definitions (Cairo-based).
//!
//! This module defines the core drawing types used to describe a figure:
//! - [`Color`]: RGBA color representation with the diagram palette
//! - [`Shape`]: Drawing primitives (rectangles, circles, arrows, text)
//! - [`Legend`]: Static (symbol, label) list overlaid on the axes
//! - [`Canvas`]: Container for everything drawn on one figure
//! - [`Viewport`]: Data-to-pixel mapping for a canvas at a given DPI
//! - [`tight_viewport`]: Axes placement that keeps every label inside the figure
//! - Rendering functions for Cairo-based output

pub mod canvas;
pub mod color;
pub mod font;
pub mod layout;
pub mod legend;
pub mod render;
pub mod shape;
pub mod viewport;

// Re-export commonly used types at module level
pub use canvas::{Axes, Canvas, Title};
pub use color::Color;
pub use font::{FontDescriptor, FontStyle, FontWeight};
pub use layout::tight_viewport;
pub use legend::{Legend, LegendLocation, LegendSymbol};
pub use render::{TextExtent, measure_text, render_canvas, render_shape, render_text};
pub use shape::{
    ArrowHead, ArrowStyle, HAlign, LineStyle, PatchStyle, Point, Shape, TextLabel, VAlign,
};
pub use viewport::{PixelBox, Viewport};
