use core::fmt;

use bon::Builder;
use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::Serialize;
use serde_with::{DisplayFromStr, serde_as};
use slot_time_domain::{AbstractDate, BigInt, ConcreteDate};

use crate::error::CliError;

/// The outcome of a command, printable as text or JSON.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Report {
    Slot(SlotReport),
    Diff(DiffReport),
}

/// A slot date together with the instants it spans.
#[derive(Debug, Builder, Serialize)]
pub struct SlotReport {
    date: AbstractDate,
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
}

/// The number of slots between two slot dates.
#[serde_as]
#[derive(Debug, Builder, Serialize)]
pub struct DiffReport {
    from: AbstractDate,
    to: AbstractDate,
    #[serde_as(as = "DisplayFromStr")]
    slots: BigInt,
}

impl Report {
    pub fn render(&self, json: bool) -> Result<String, CliError> {
        if json { Ok(serde_json::to_string(self)?) } else { Ok(self.to_string()) }
    }
}

impl SlotReport {
    pub(crate) fn from_date(date: &ConcreteDate<'_>) -> Result<Self, CliError> {
        let report = Self::builder()
            .date(date.abstract_date())
            .start(date.start_instant()?)
            .end(date.end_instant()?)
            .build();

        Ok(report)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Slot(SlotReport { date, start, end }) => write!(
                f,
                "{date} {} {}",
                start.to_rfc3339_opts(SecondsFormat::AutoSi, false),
                end.to_rfc3339_opts(SecondsFormat::AutoSi, false),
            ),
            Report::Diff(DiffReport { slots, .. }) => write!(f, "{slots}"),
        }
    }
}
