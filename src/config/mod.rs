#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::app::runner::DemoKind;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "pattern-demos")]
#[command(about = "Composite pricing and menu facade demos")]
pub struct CliConfig {
    /// Which demo to run
    #[arg(long, value_enum, default_value = "all")]
    pub demo: DemoKind,

    /// Optional TOML file with pricing, menus and showcase items
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the markup from the config file
    #[arg(long)]
    pub markup_percent: Option<u32>,

    /// Print the composite report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
