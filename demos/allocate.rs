//! Allocation Example
//!
//! Seats a party from an inventory fixture and prints the chosen tables.
//!
//! Use `-f` to load an inventory fixture by name
//! Use `-p` to set the party size
//! Use `-s` to print search statistics

use std::{io, time::Instant};

use anyhow::Result;
use clap::Parser;
use tablefit::{
    allocator::Allocator,
    fixtures::Fixture,
    report::AllocationReport,
    solvers::stats::SearchStatistics,
    utils::{ExampleAllocateArgs, LogFormat},
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging(args: &ExampleAllocateArgs) -> Result<()> {
    let filter = EnvFilter::try_new(&args.log_level)?;
    let registry = tracing_subscriber::registry().with(filter);

    match args.log_format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_writer(io::stderr),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_writer(io::stderr),
            )
            .try_init()?,
    }

    Ok(())
}

/// Allocation Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = ExampleAllocateArgs::parse();

    init_logging(&args)?;

    let inventory = Fixture::new().load(&args.fixture)?;

    let mut config = inventory.config;

    if args.mix_any {
        config = config.with_junction_only(false);
    }

    if args.no_preserve_small_tables {
        config = config.with_preserve_small_tables(false);
    }

    let allocator = Allocator::new(config);
    let mut stats = SearchStatistics::default();

    let start = Instant::now();
    let result = allocator.allocate_with_observer(args.party, &inventory.tables, &mut stats)?;
    let elapsed = start.elapsed().as_secs_f32();

    match result {
        Some(allocation) => {
            let stdout = io::stdout();
            let handle = stdout.lock();

            AllocationReport::new(&allocation, &inventory.tables).write_to(handle)?;
        }
        None => println!("\nNo tables available for a party of {}", args.party),
    }

    if args.stats {
        println!("{stats}");
    }

    println!("\nSolution: {elapsed}s");

    Ok(())
}
