//! Slot dates without knowledge of a chain's timeline.

use core::{fmt, str::FromStr};

use alloc::string::{String, ToString};

use dissolve_derive::Dissolve;

use crate::{
    SlotDate,
    error::{ParseError, ParseErrorReason},
};

/// A slot date determined only by its epoch and slot number.
///
/// An abstract date does not know the number of slots per epoch, the duration of a slot or
/// the genesis instant of a chain. It can be compared and printed, and becomes a
/// [`ConcreteDate`](crate::ConcreteDate) once materialized against
/// [`ChainTimeSettings`](crate::ChainTimeSettings).
///
/// The canonical text form is `<EPOCH>.<SLOT>`, e.g. `17.10653`. The ordering is
/// lexicographic on (epoch, slot).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Dissolve)]
pub struct AbstractDate {
    /// The epoch number.
    epoch: u64,

    /// The slot number within the epoch.
    slot: u64,
}

impl AbstractDate {
    /// Creates an abstract date from the given epoch and slot number.
    ///
    /// Any pair is valid. Bounds of the slot number are only checked once the date is
    /// materialized against chain time settings.
    pub const fn new(epoch: u64, slot: u64) -> Self {
        Self { epoch, slot }
    }

    /// Returns the epoch number.
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Returns the slot number within the epoch.
    pub const fn slot(&self) -> u64 {
        self.slot
    }

    /// Returns `true` if both dates refer to the same epoch and slot.
    pub fn same_as(&self, other: &Self) -> bool {
        self == other
    }

    /// Returns `true` if this date lies strictly before the other date.
    pub fn before(&self, other: &Self) -> bool {
        self.epoch < other.epoch || (self.epoch == other.epoch && self.slot < other.slot)
    }

    /// Returns `true` if this date lies strictly after the other date.
    pub fn after(&self, other: &Self) -> bool {
        other.before(self)
    }

    /// Returns the canonical `<EPOCH>.<SLOT>` text of this date.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Parses a date of the format `<EPOCH>.<SLOT>`.
    ///
    /// Both segments must be non-negative decimal numbers fitting into 64 bits. Signs,
    /// whitespace and empty segments are rejected.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] naming the text and whether the format, the epoch or the slot
    /// was invalid.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut segments = text.split('.');

        let (Some(epoch), Some(slot), None) = (segments.next(), segments.next(), segments.next())
        else {
            return Err(ParseError::new(text, ParseErrorReason::Format));
        };

        let epoch = parse_number(epoch)
            .ok_or_else(|| ParseError::new(text, ParseErrorReason::Epoch(epoch.into())))?;
        let slot = parse_number(slot)
            .ok_or_else(|| ParseError::new(text, ParseErrorReason::Slot(slot.into())))?;

        Ok(Self { epoch, slot })
    }
}

// `u64::from_str` accepts a leading '+'; only plain digits are canonical.
fn parse_number(segment: &str) -> Option<u64> {
    if segment.bytes().all(|b| b.is_ascii_digit()) { segment.parse().ok() } else { None }
}

impl SlotDate for AbstractDate {
    fn epoch(&self) -> u64 {
        self.epoch
    }

    fn slot(&self) -> u64 {
        self.slot
    }

    fn to_abstract(&self) -> AbstractDate {
        *self
    }
}

impl fmt::Display for AbstractDate {
    /// Formats the date as `<EPOCH>.<SLOT>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.epoch, self.slot)
    }
}

impl FromStr for AbstractDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<(u64, u64)> for AbstractDate {
    /// Converts an `(epoch, slot)` pair into an abstract date.
    fn from((epoch, slot): (u64, u64)) -> Self {
        Self::new(epoch, slot)
    }
}
