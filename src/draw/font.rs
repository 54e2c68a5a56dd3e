//! Font descriptor for text rendering.

/// Stroke weight of a text label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn as_str(self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

/// Slant of a text label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

impl FontStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
        }
    }
}

/// Font configuration for text rendering.
///
/// Describes which font to use, including family name, weight, and style.
/// The family comes from the configuration; weight and style come from each label.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Font family name (e.g., "DejaVu Sans", "Liberation Sans")
    pub family: String,

    /// Font weight (e.g., "normal", "bold")
    pub weight: String,

    /// Font style (e.g., "normal", "italic")
    pub style: String,
}

/// Family used when nothing else is configured.
pub const DEFAULT_FAMILY: &str = "DejaVu Sans";

impl FontDescriptor {
    /// Creates a new font descriptor for the given family, weight and style.
    pub fn new(family: &str, weight: FontWeight, style: FontStyle) -> Self {
        Self {
            family: family.to_string(),
            weight: weight.as_str().to_string(),
            style: style.as_str().to_string(),
        }
    }

    /// Converts this font descriptor to a Pango font description string.
    ///
    /// Format: "Family Style Weight"; the size is set separately in absolute
    /// device pixels so that it tracks the export DPI.
    /// Example: "DejaVu Sans Bold" or "DejaVu Sans Italic"
    pub fn to_pango_string(&self) -> String {
        let mut parts = vec![self.family.clone()];

        if self.style.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.style));
        }

        if self.weight.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.weight));
        }

        parts.join(" ")
    }

    /// Builds a Pango font description sized in device pixels.
    pub fn to_pango(&self, size_px: f64) -> pango::FontDescription {
        let mut desc = pango::FontDescription::from_string(&self.to_pango_string());
        desc.set_absolute_size(size_px * pango::SCALE as f64);
        desc
    }
}

/// Capitalizes the first letter of a string.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
