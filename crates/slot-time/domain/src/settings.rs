//! Timing parameters of a concrete chain and the instant-to-slot conversion.

use core::num::NonZeroU64;

use chrono::{DateTime, FixedOffset, TimeDelta, TimeZone};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::{
    AbstractDate, ConcreteDate,
    error::{SettingsError, SlotOutOfBoundsError, TimeError},
    span,
};

/// The settings anchoring the timeline of a chain.
///
/// A chain starts at its genesis instant with epoch 0, slot 0. Every epoch is divided into
/// the same number of slots and every slot lasts the same duration.
///
/// # Examples
///
/// ```
/// # use core::num::NonZeroU64;
/// # use chrono::{DateTime, TimeDelta};
/// # use slot_time_domain::ChainTimeSettings;
/// let settings = ChainTimeSettings::builder()
///     .genesis_instant(DateTime::parse_from_rfc3339("2019-12-13T19:13:37+00:00").unwrap())
///     .slots_per_epoch(NonZeroU64::new(43200).unwrap())
///     .slot_duration(TimeDelta::seconds(2))
///     .build()
///     .unwrap();
///
/// let date = settings.date(17, 10653).unwrap();
/// assert_eq!(date.to_string(), "17.10653");
/// ```
#[derive(Debug, Clone)]
pub struct ChainTimeSettings {
    genesis_instant: DateTime<FixedOffset>,
    slots_per_epoch: NonZeroU64,
    slot_duration: TimeDelta,
    slot_duration_nanos: BigUint,
}

#[bon::bon]
impl ChainTimeSettings {
    /// Creates the settings of a chain.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::NonPositiveSlotDuration`] if the slot duration is not positive.
    #[builder]
    pub fn new(
        /// The instant at which epoch 0, slot 0 begins.
        #[builder(into)]
        genesis_instant: DateTime<FixedOffset>,
        /// The number of slots an epoch is divided into.
        slots_per_epoch: NonZeroU64,
        /// The duration of every slot.
        slot_duration: TimeDelta,
    ) -> Result<Self, SettingsError> {
        let slot_duration_nanos = span::delta_to_nanos(slot_duration)
            .filter(|nanos| !nanos.is_zero())
            .ok_or(SettingsError::NonPositiveSlotDuration(slot_duration))?;

        Ok(Self { genesis_instant, slots_per_epoch, slot_duration, slot_duration_nanos })
    }
}

impl ChainTimeSettings {
    /// Returns the instant at which epoch 0, slot 0 begins.
    pub fn genesis_instant(&self) -> DateTime<FixedOffset> {
        self.genesis_instant
    }

    /// Returns the number of slots per epoch.
    pub fn slots_per_epoch(&self) -> NonZeroU64 {
        self.slots_per_epoch
    }

    /// Returns the duration of a slot.
    pub fn slot_duration(&self) -> TimeDelta {
        self.slot_duration
    }

    pub(crate) fn slot_duration_nanos(&self) -> &BigUint {
        &self.slot_duration_nanos
    }

    /// Returns `true` if both settings describe the same timeline.
    ///
    /// Genesis instants are compared as absolute points in time, so the same instant written
    /// with different UTC offsets is the same.
    pub fn same(&self, other: &Self) -> bool {
        self.genesis_instant == other.genesis_instant
            && self.slots_per_epoch == other.slots_per_epoch
            && self.slot_duration == other.slot_duration
    }

    /// Creates a concrete date on this chain.
    ///
    /// # Errors
    ///
    /// Returns a [`SlotOutOfBoundsError`] if the slot does not fit into an epoch.
    pub fn date(&self, epoch: u64, slot: u64) -> Result<ConcreteDate<'_>, SlotOutOfBoundsError> {
        ConcreteDate::new(epoch, slot, self)
    }

    /// Binds an abstract date to this chain.
    ///
    /// # Errors
    ///
    /// Returns a [`SlotOutOfBoundsError`] if the slot does not fit into an epoch.
    pub fn materialize(
        &self,
        date: AbstractDate,
    ) -> Result<ConcreteDate<'_>, SlotOutOfBoundsError> {
        ConcreteDate::materialize(date, self)
    }

    /// Returns the slot date the given instant falls into.
    ///
    /// The genesis instant itself is epoch 0, slot 0, and every slot covers the half-open
    /// interval from its start instant up to the start of the next slot.
    ///
    /// # Errors
    ///
    /// * [`TimeError::PrecedesGenesis`] if the instant lies before the genesis instant.
    /// * [`TimeError::EpochOverflow`] if the epoch of the instant does not fit into 64 bits.
    pub fn slot_date_for<Tz>(
        &self,
        instant: &DateTime<Tz>,
    ) -> Result<ConcreteDate<'_>, TimeError>
    where
        Tz: TimeZone,
    {
        let instant = instant.fixed_offset();

        let Some(elapsed) = span::nanos_between(self.genesis_instant, instant) else {
            tracing::debug!(%instant, genesis = %self.genesis_instant, "instant precedes genesis");

            return Err(TimeError::PrecedesGenesis { instant, genesis: self.genesis_instant });
        };

        let total_slots = elapsed / &self.slot_duration_nanos;
        let (epoch, slot) = total_slots.div_rem(&BigUint::from(self.slots_per_epoch.get()));

        let (Some(epoch), Some(slot)) = (epoch.to_u64(), slot.to_u64()) else {
            return Err(TimeError::EpochOverflow { total_slots });
        };

        tracing::trace!(%instant, epoch, slot, "resolved slot date");

        Ok(ConcreteDate::new(epoch, slot, self)?)
    }
}

impl PartialEq for ChainTimeSettings {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl Eq for ChainTimeSettings {}
