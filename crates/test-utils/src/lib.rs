//! Test utilities for the slot time crates.
//!
//! This crate provides the reference chain settings used throughout the test suites, along
//! with helpers to build instants from RFC 3339 text.

use core::num::NonZeroU64;

use chrono::{DateTime, FixedOffset, TimeDelta};
use slot_time_domain::ChainTimeSettings;

/// Genesis instant of the reference chain.
pub const REFERENCE_GENESIS: &str = "2019-12-13T19:13:37+00:00";

/// Number of slots per epoch of the reference chain.
pub const REFERENCE_SLOTS_PER_EPOCH: u64 = 43200;

/// Slot duration of the reference chain, in seconds.
pub const REFERENCE_SLOT_SECONDS: i64 = 2;

/// Parses an RFC 3339 instant, keeping its UTC offset.
///
/// Panics if the text is not a valid RFC 3339 instant.
pub fn instant(text: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(text).unwrap()
}

/// Returns the settings of the reference chain: genesis at [`REFERENCE_GENESIS`],
/// [`REFERENCE_SLOTS_PER_EPOCH`] slots per epoch and [`REFERENCE_SLOT_SECONDS`] seconds per
/// slot.
pub fn reference_settings() -> ChainTimeSettings {
    settings(REFERENCE_SLOTS_PER_EPOCH, TimeDelta::seconds(REFERENCE_SLOT_SECONDS))
}

/// Returns settings anchored at the reference genesis with the given epoch layout.
///
/// Panics if `slots_per_epoch` is zero or `slot_duration` is not positive.
pub fn settings(slots_per_epoch: u64, slot_duration: TimeDelta) -> ChainTimeSettings {
    ChainTimeSettings::builder()
        .genesis_instant(instant(REFERENCE_GENESIS))
        .slots_per_epoch(NonZeroU64::new(slots_per_epoch).unwrap())
        .slot_duration(slot_duration)
        .build()
        .unwrap()
}
