//! Utils

use clap::{Parser, ValueEnum};

/// Log output format.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Arguments for the allocation demo
#[derive(Debug, Parser)]
pub struct ExampleAllocateArgs {
    /// Number of people to seat
    #[clap(short, long, default_value_t = 16)]
    pub party: u32,

    /// Inventory fixture to allocate from
    #[clap(short, long, default_value = "restaurant")]
    pub fixture: String,

    /// Allow joining tables that do not accept junctions
    #[clap(long)]
    pub mix_any: bool,

    /// Disable the penalty for splitting parties across small tables
    #[clap(long)]
    pub no_preserve_small_tables: bool,

    /// Print search statistics
    #[clap(short, long)]
    pub stats: bool,

    /// Log level (trace, debug, info, warn, error)
    #[clap(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[clap(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}
