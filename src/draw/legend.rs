//! Static legend mapping symbol colors to their meaning.

use super::color::{BLACK, Color};

/// The colored rectangle drawn next to a legend label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendSymbol {
    pub fill: Color,
    pub edge: Color,
}

impl LegendSymbol {
    /// A filled rectangle with a black outline.
    pub fn swatch(fill: Color) -> Self {
        Self { fill, edge: BLACK }
    }
}

/// Axes corner the legend is anchored to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LegendLocation {
    #[default]
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

/// Ordered list of (symbol, label) pairs.
#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    pub entries: Vec<(LegendSymbol, String)>,
    pub location: LegendLocation,
    /// Label font size in points
    pub font_size: f64,
}

impl Legend {
    pub fn new(location: LegendLocation) -> Self {
        Self {
            entries: Vec::new(),
            location,
            font_size: 10.0,
        }
    }

    pub fn font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Appends an entry below the existing ones.
    pub fn entry(mut self, symbol: LegendSymbol, label: impl Into<String>) -> Self {
        self.entries.push((symbol, label.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Spacing of the legend box, in units of the legend font size.
pub(crate) mod spacing {
    pub const BORDER_PAD: f64 = 0.4;
    pub const LABEL_SPACING: f64 = 0.5;
    pub const HANDLE_LENGTH: f64 = 2.0;
    pub const HANDLE_HEIGHT: f64 = 0.7;
    pub const HANDLE_TEXT_PAD: f64 = 0.8;
    pub const AXES_PAD: f64 = 0.5;
    pub const CORNER_RADIUS: f64 = 0.2;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{ACCENT_BLUE, LIGHT_GRAY};

    #[test]
    fn entries_keep_insertion_order() {
        let legend = Legend::new(LegendLocation::UpperLeft)
            .entry(LegendSymbol::swatch(ACCENT_BLUE), "Monitor Agent")
            .entry(LegendSymbol::swatch(LIGHT_GRAY), "SDN Switch");

        let labels: Vec<_> = legend.entries.iter().map(|(_, label)| label.as_str()).collect();
        assert_eq!(labels, ["Monitor Agent", "SDN Switch"]);
        assert_eq!(legend.entries[0].0.fill, ACCENT_BLUE);
        assert_eq!(legend.entries[1].0.edge, BLACK);
    }

    #[test]
    fn new_legend_is_empty() {
        let legend = Legend::new(LegendLocation::LowerRight);
        assert!(legend.is_empty());
        assert_eq!(legend.font_size, 10.0);
    }
}
