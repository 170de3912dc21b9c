#![allow(missing_docs)]

pub mod config;

mod error;
mod report;


pub use self::{
    error::CliError,
    report::{DiffReport, Report, SlotReport},
};

use std::path::PathBuf;

use chrono::{DateTime, FixedOffset};
use clap::{Parser, Subcommand};
use slot_time_domain::{AbstractDate, ChainTimeSettings};

/// Converts between wall-clock instants and slot dates of a chain.
#[derive(Debug, Parser)]
#[command(name = "slot-time", version)]
pub struct Args {
    /// Additional configuration file in RON format, overriding the base configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Prints the slot date an instant falls into, with the instants the slot spans
    SlotAt {
        /// RFC 3339 instant (e.g., "2020-01-14T16:51:37+01:00"), defaults to now
        instant: Option<String>,
    },

    /// Prints the instants a slot date spans
    StartOf {
        /// Slot date of the format <EPOCH>.<SLOT>
        date: AbstractDate,
    },

    /// Prints the number of slots from the second slot date to the first
    Diff {
        /// Slot date of the format <EPOCH>.<SLOT>
        to: AbstractDate,

        /// Slot date of the format <EPOCH>.<SLOT>
        from: AbstractDate,
    },
}

/// Runs a command against the given chain settings.
///
/// `now` is the instant used by [`Command::SlotAt`] when no instant is given.
pub fn run(
    command: Command,
    settings: &ChainTimeSettings,
    now: DateTime<FixedOffset>,
) -> Result<Report, CliError> {
    tracing::debug!(?command, "running command");

    let report = match command {
        Command::SlotAt { instant } => {
            let instant = match instant {
                Some(text) => DateTime::parse_from_rfc3339(&text)?,
                None => now,
            };

            let date = settings.slot_date_for(&instant)?;
            Report::Slot(SlotReport::from_date(&date)?)
        },
        Command::StartOf { date } => {
            let date = settings.materialize(date)?;
            Report::Slot(SlotReport::from_date(&date)?)
        },
        Command::Diff { to, from } => {
            let slots = settings.materialize(to)?.diff(&settings.materialize(from)?);
            Report::Diff(DiffReport::builder().from(from).to(to).slots(slots).build())
        },
    };

    Ok(report)
}
