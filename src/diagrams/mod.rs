//! The two fixed figures and how to render them.
//!
//! Each builder returns a fully populated [`Canvas`]; nothing about the
//! content depends on runtime input. [`render`] exports one figure into an
//! output directory under its fixed file name.

pub mod mobile_agent_framework;
pub mod sdn_architecture;

use crate::draw::Canvas;
use crate::export::{self, ExportError, ExportOptions};
use std::path::{Path, PathBuf};

/// Selects one of the fixed diagrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Figure {
    /// Distributed mobile agent framework for SDN security
    MobileAgentFramework,
    /// Layered SDN architecture with the saturation attack path
    SdnArchitecture,
}

impl Figure {
    /// Every figure, in render order.
    pub const ALL: [Figure; 2] = [Figure::MobileAgentFramework, Figure::SdnArchitecture];

    /// Output file name inside the target directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Figure::MobileAgentFramework => "mobile_agent_framework.png",
            Figure::SdnArchitecture => "sdn_architecture.png",
        }
    }

    /// Builds the figure's canvas.
    pub fn build(self) -> Canvas {
        match self {
            Figure::MobileAgentFramework => mobile_agent_framework::build(),
            Figure::SdnArchitecture => sdn_architecture::build(),
        }
    }
}

/// Builds `figure` and writes it to `directory/<file name>`.
///
/// The directory must exist; a missing or unwritable directory is reported as
/// [`ExportError::Write`] and no file is created.
pub fn render(
    figure: Figure,
    directory: &Path,
    options: &ExportOptions,
) -> Result<PathBuf, ExportError> {
    let canvas = figure.build();
    log::debug!(
        "Built {:?}: {} shapes, {}x{} in",
        figure,
        canvas.shapes.len(),
        canvas.width_in,
        canvas.height_in
    );
    export::save_png(&canvas, &directory.join(figure.file_name()), options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_are_fixed() {
        assert_eq!(
            Figure::MobileAgentFramework.file_name(),
            "mobile_agent_framework.png"
        );
        assert_eq!(Figure::SdnArchitecture.file_name(), "sdn_architecture.png");
    }

    #[test]
    fn figure_sizes_match_publication_layout() {
        let mobile = Figure::MobileAgentFramework.build();
        assert_eq!((mobile.width_in, mobile.height_in), (12.0, 9.0));
        let sdn = Figure::SdnArchitecture.build();
        assert_eq!((sdn.width_in, sdn.height_in), (10.0, 8.0));
    }

    #[test]
    fn builders_are_deterministic() {
        for figure in Figure::ALL {
            assert_eq!(figure.build(), figure.build());
        }
    }
}
