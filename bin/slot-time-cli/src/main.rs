//! # Configuration
//!
//! The tool is configured through:
//! - Base configuration file (`base_config.ron`)
//! - An optional RON file passed with `--config` (overrides base config)
//! - Environment variables prefixed with `SLOTTIME_` (override both files)
//!
//! ## Base Configuration
//!
//! ```ron
//! Config(
//!     chain: ChainConfig(
//!         genesis_instant: "2017-09-23T21:44:51+00:00",
//!         slots_per_epoch: 21600,
//!         slot_duration: "20s",
//!     ),
//! )
//! ```
//!
//! ## Environment Variable Overrides
//!
//! Use double underscores (`__`) to override nested configuration fields:
//!
//! ```bash
//! export SLOTTIME_CHAIN__GENESIS_INSTANT="2019-12-13T19:13:37+00:00"
//! export SLOTTIME_CHAIN__SLOTS_PER_EPOCH="43200"
//! export SLOTTIME_CHAIN__SLOT_DURATION="2s"
//!
//! slot-time slot-at 2020-01-14T16:51:37+01:00
//! slot-time start-of 17.10653 --json
//! slot-time diff 17.1200 16.35600
//! ```
//!
//! # Logging
//!
//! Logging is controlled via the `RUST_LOG` environment variable and written to stderr.
//! Defaults to `info` level.

use chrono::Utc;
use clap::Parser;
use slot_time_cli::{Args, config};
use tracing::{Subscriber, subscriber};
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    subscriber::set_global_default(make_tracing_subscriber(env_filter))?;

    let config = config::get_configuration(args.config.as_deref())?;
    let settings = config.chain.to_settings()?;

    tracing::debug!(
        genesis = %settings.genesis_instant(),
        slots_per_epoch = settings.slots_per_epoch().get(),
        slot_duration = %settings.slot_duration(),
        "loaded chain settings"
    );

    let report = slot_time_cli::run(args.command, &settings, Utc::now().fixed_offset())?;

    println!("{}", report.render(args.json)?);

    Ok(())
}

fn make_tracing_subscriber(env_filter: EnvFilter) -> impl Subscriber {
    Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_line_number(true),
        )
        .with(env_filter)
}
