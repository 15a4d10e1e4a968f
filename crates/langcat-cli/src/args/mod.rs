mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "langcat")]
#[command(about = "Browse, search and chart a catalog of programming languages", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Catalog JSON file (default: $LANGCAT_DATA, config `data_path`, then ./data.json)
    #[arg(long, global = true)]
    pub data: Option<String>,

    /// Config file (default: $LANGCAT_CONFIG or the XDG config dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Write logs to this file instead of stderr (the TUI only logs to a file)
    #[arg(long, global = true)]
    pub log_file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
