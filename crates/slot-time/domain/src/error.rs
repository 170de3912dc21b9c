use alloc::string::String;

use chrono::{DateTime, FixedOffset, TimeDelta};
use num_bigint::BigUint;

use crate::AbstractDate;

/// Error returned when a text cannot be parsed into an [`AbstractDate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to parse '{text}': {reason}")]
pub struct ParseError {
    text: String,
    reason: ParseErrorReason,
}

/// The reason why a text is not a valid `<EPOCH>.<SLOT>` date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorReason {
    /// The text does not consist of exactly two dot-separated segments.
    #[error(
        "the date must be of the format '<EPOCH>.<SLOT>', where epoch and slot are positive numbers"
    )]
    Format,

    /// The epoch segment is not a non-negative decimal number.
    #[error("epoch must be a positive number, but was '{0}'")]
    Epoch(String),

    /// The slot segment is not a non-negative decimal number.
    #[error("slot must be a positive number, but was '{0}'")]
    Slot(String),
}

impl ParseError {
    pub(crate) fn new<T>(text: T, reason: ParseErrorReason) -> Self
    where
        String: From<T>,
    {
        Self { text: text.into(), reason }
    }

    /// Returns the text that failed to parse.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns why the text failed to parse.
    pub fn reason(&self) -> &ParseErrorReason {
        &self.reason
    }
}

/// Error returned when a slot number does not fit into an epoch of the given settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("slot number {slot} exceeds the number of slots per epoch ({slots_per_epoch})")]
pub struct SlotOutOfBoundsError {
    /// The rejected slot number.
    pub slot: u64,

    /// The number of slots per epoch of the settings the slot was checked against.
    pub slots_per_epoch: u64,
}

/// Errors of the conversions between slot dates and wall-clock instants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    /// The instant lies strictly before the genesis instant of the chain.
    #[error("the time {instant} is before the creation time of the genesis block ({genesis})")]
    PrecedesGenesis {
        /// The instant that was converted.
        instant: DateTime<FixedOffset>,
        /// The genesis instant of the chain.
        genesis: DateTime<FixedOffset>,
    },

    /// The instant at which the slot date begins or ends cannot be represented.
    #[error("instant of slot date {date} is out of the representable range")]
    OutOfRange {
        /// The slot date whose instant was requested.
        date: AbstractDate,
    },

    /// The instant lies so far after genesis that its epoch does not fit into 64 bits.
    #[error("epoch of absolute slot {total_slots} exceeds the largest epoch number")]
    EpochOverflow {
        /// The number of slots elapsed since genesis.
        total_slots: BigUint,
    },

    /// The derived slot date was rejected by the settings.
    #[error(transparent)]
    SlotOutOfBounds(#[from] SlotOutOfBoundsError),
}

/// Errors of building [`ChainTimeSettings`](crate::ChainTimeSettings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The slot duration is zero or negative.
    #[error("slot duration must be positive, but was {0}")]
    NonPositiveSlotDuration(TimeDelta),
}

/// Error returned when two concrete slot dates do not share the same chain time settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("slot dates were built against different chain time settings")]
pub struct SettingsMismatchError;
