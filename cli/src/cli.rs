use std::path::PathBuf;

/// Utility-pole survey map builder (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "polemap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Build a map scene from survey rows (forbids stdout)
    Build(BuildArgs),

    /// Report detected column groups and filter counts without writing anything
    Inspect(InspectArgs),
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, clap::ValueEnum)]
pub enum View { Mr, Utility }

impl From<View> for polemap::ViewMode {
    fn from(view: View) -> Self {
        match view {
            View::Mr => polemap::ViewMode::Mr,
            View::Utility => polemap::ViewMode::Utility,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct BuildArgs {
    /// Input survey rows (CSV with a header row)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Output GeoJSON file, defaults to "./map.geojson"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Classify poles by make-ready level or by owning company
    #[arg(long, value_enum, default_value_t = View::Mr)]
    pub view: View,

    /// Optional markup GeoJSON merged into the map
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub overlay: Option<PathBuf>,

    /// Optional JSON style file overriding the built-in colors
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub styles: Option<PathBuf>,

    /// Overwrite if the output file exists
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    /// Input survey rows (CSV with a header row)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// View whose filter rules are applied
    #[arg(long, value_enum, default_value_t = View::Mr)]
    pub view: View,
}
