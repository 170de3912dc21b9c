//! Slot dates bound to the timeline of a concrete chain.

use core::{fmt, num::NonZeroU64};

use chrono::{DateTime, FixedOffset};
use num_bigint::{BigInt, BigUint};

use crate::{
    AbstractDate, ChainTimeSettings, SlotDate,
    error::{SettingsMismatchError, SlotOutOfBoundsError, TimeError},
    span,
};

/// A slot date bound to the [`ChainTimeSettings`] of a chain.
///
/// The slot number is always smaller than the number of slots per epoch of the settings. The
/// date borrows its settings, so it cannot outlive them.
#[derive(Debug, Clone, Copy)]
pub struct ConcreteDate<'s> {
    date: AbstractDate,
    settings: &'s ChainTimeSettings,
}

impl<'s> ConcreteDate<'s> {
    /// Creates a concrete date from the given epoch and slot number.
    ///
    /// # Errors
    ///
    /// Returns a [`SlotOutOfBoundsError`] if `slot` is not smaller than the number of slots
    /// per epoch of the settings.
    pub fn new(
        epoch: u64,
        slot: u64,
        settings: &'s ChainTimeSettings,
    ) -> Result<Self, SlotOutOfBoundsError> {
        let slots_per_epoch = settings.slots_per_epoch().get();

        if slot >= slots_per_epoch {
            return Err(SlotOutOfBoundsError { slot, slots_per_epoch });
        }

        Ok(Self { date: AbstractDate::new(epoch, slot), settings })
    }

    /// Binds the abstract date to the given settings.
    ///
    /// # Errors
    ///
    /// Returns a [`SlotOutOfBoundsError`] if the slot of the date is not smaller than the
    /// number of slots per epoch of the settings.
    pub fn materialize(
        date: AbstractDate,
        settings: &'s ChainTimeSettings,
    ) -> Result<Self, SlotOutOfBoundsError> {
        Self::new(date.epoch(), date.slot(), settings)
    }

    /// Returns the epoch number.
    pub fn epoch(&self) -> u64 {
        self.date.epoch()
    }

    /// Returns the slot number within the epoch.
    pub fn slot(&self) -> u64 {
        self.date.slot()
    }

    /// Returns the date without its settings.
    pub fn abstract_date(&self) -> AbstractDate {
        self.date
    }

    /// Returns the settings the date is bound to.
    pub fn settings(&self) -> &'s ChainTimeSettings {
        self.settings
    }

    /// Returns the number of slots from genesis to the start of this date.
    pub fn absolute_slot(&self) -> BigUint {
        absolute_slot(&self.date, self.settings.slots_per_epoch())
    }

    /// Returns the number of slots from `other` to this date.
    ///
    /// The result is negative if `other` lies after this date. Both coordinates are counted
    /// with the slots per epoch of this date's settings; use [`try_diff`](Self::try_diff) to
    /// reject dates of another chain.
    pub fn diff<D>(&self, other: &D) -> BigInt
    where
        D: SlotDate,
    {
        let slots_per_epoch = self.settings.slots_per_epoch();

        BigInt::from(absolute_slot(&self.date, slots_per_epoch))
            - BigInt::from(absolute_slot(other, slots_per_epoch))
    }

    /// Returns the number of slots from `other` to this date, if both share the same settings.
    ///
    /// # Errors
    ///
    /// Returns a [`SettingsMismatchError`] if the settings of the two dates are not the same.
    pub fn try_diff(&self, other: &ConcreteDate<'_>) -> Result<BigInt, SettingsMismatchError> {
        if !self.settings.same(other.settings) {
            return Err(SettingsMismatchError);
        }

        Ok(self.diff(other))
    }

    /// Returns the instant at which this slot begins.
    ///
    /// The instant carries the UTC offset of the genesis instant.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::OutOfRange`] if the instant cannot be represented.
    pub fn start_instant(&self) -> Result<DateTime<FixedOffset>, TimeError> {
        let offset = self.absolute_slot() * self.settings.slot_duration_nanos();

        span::add_nanos(self.settings.genesis_instant(), &offset).ok_or_else(|| {
            tracing::debug!(date = %self.date, "start instant out of range");
            TimeError::OutOfRange { date: self.date }
        })
    }

    /// Returns the instant at which this slot ends, which is the start of the next slot.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::OutOfRange`] if the instant cannot be represented.
    pub fn end_instant(&self) -> Result<DateTime<FixedOffset>, TimeError> {
        self.start_instant()?
            .checked_add_signed(self.settings.slot_duration())
            .ok_or(TimeError::OutOfRange { date: self.date })
    }
}

fn absolute_slot<D>(date: &D, slots_per_epoch: NonZeroU64) -> BigUint
where
    D: SlotDate,
{
    BigUint::from(date.epoch()) * slots_per_epoch.get() + date.slot()
}

impl SlotDate for ConcreteDate<'_> {
    fn epoch(&self) -> u64 {
        self.date.epoch()
    }

    fn slot(&self) -> u64 {
        self.date.slot()
    }

    fn to_abstract(&self) -> AbstractDate {
        self.date
    }
}

impl PartialEq for ConcreteDate<'_> {
    /// Two concrete dates are equal if their coordinates and their settings are the same.
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date && self.settings.same(other.settings)
    }
}

impl Eq for ConcreteDate<'_> {}

impl fmt::Display for ConcreteDate<'_> {
    /// Formats the date as `<EPOCH>.<SLOT>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.date, f)
    }
}

impl From<ConcreteDate<'_>> for AbstractDate {
    fn from(date: ConcreteDate<'_>) -> Self {
        date.date
    }
}
