use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use sdn_diagrams::config::BBoxMode;
use sdn_diagrams::{Config, Figure, diagrams};
use std::path::PathBuf;

/// Which figures to render.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum FigureSelection {
    /// Both figures
    All,
    /// mobile_agent_framework.png
    MobileAgentFramework,
    /// sdn_architecture.png
    SdnArchitecture,
}

impl FigureSelection {
    fn figures(self) -> Vec<Figure> {
        match self {
            FigureSelection::All => Figure::ALL.to_vec(),
            FigureSelection::MobileAgentFramework => vec![Figure::MobileAgentFramework],
            FigureSelection::SdnArchitecture => vec![Figure::SdnArchitecture],
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sdn-diagrams")]
#[command(
    version,
    about = "Renders the SDN architecture and mobile agent framework figures to PNG"
)]
struct Cli {
    /// Figure to render
    #[arg(long, short = 'f', value_enum, default_value_t = FigureSelection::All)]
    figure: FigureSelection,

    /// Directory the PNG files are written to (must already exist)
    #[arg(long, short = 'o', value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Output resolution in dots per inch
    #[arg(long, value_name = "DPI")]
    dpi: Option<f64>,

    /// Keep the full figure instead of cropping to the drawn content
    #[arg(long, action = ArgAction::SetTrue)]
    no_tight: bool,

    /// Read settings from this file instead of ~/.config/sdn-diagrams/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Command-line flags win over the config file
    if let Some(directory) = cli.output_dir {
        config.output.directory = directory;
    }
    if let Some(dpi) = cli.dpi {
        config.output.dpi = dpi;
    }
    if cli.no_tight {
        config.output.bbox = BBoxMode::Figure;
    }
    config.validate_and_clamp();

    let options = config.export_options();
    log::debug!("Export options: {:?}", options);

    for figure in cli.figure.figures() {
        let path = diagrams::render(figure, &config.output.directory, &options)
            .with_context(|| format!("Failed to render {}", figure.file_name()))?;
        log::info!("Rendered {:?} to {}", figure, path.display());
        println!("{}", path.display());
    }

    Ok(())
}
