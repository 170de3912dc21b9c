//! Slot dates of an epoch-based blockchain.
//!
//! This crate converts between slot coordinates, an epoch number paired with a slot number
//! inside that epoch, and wall-clock instants. An [`AbstractDate`] knows nothing about the
//! timeline of a chain, while a [`ConcreteDate`] is bound to the [`ChainTimeSettings`] of one
//! chain and can therefore be turned into instants and compared by slot distance.
//!
//! All products and differences of epochs and slots are computed with arbitrary precision, so
//! every `u64` epoch is handled exactly.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod abstract_date;
mod concrete_date;
mod error;
mod settings;
mod span;

#[cfg(feature = "serde")]
mod with_serde;

#[cfg(test)]
mod tests;

pub use self::{
    abstract_date::{AbstractDate, AbstractDateDissolved},
    concrete_date::ConcreteDate,
    error::{
        ParseError, ParseErrorReason, SettingsError, SettingsMismatchError, SlotOutOfBoundsError,
        TimeError,
    },
    settings::ChainTimeSettings,
};

pub use num_bigint::{BigInt, BigUint};

/// A coordinate on the slot timeline of a chain.
///
/// Implemented by both [`AbstractDate`] and [`ConcreteDate`], so code that only needs the
/// epoch and slot numbers can accept either.
pub trait SlotDate {
    /// Returns the epoch number.
    fn epoch(&self) -> u64;

    /// Returns the slot number within the epoch.
    fn slot(&self) -> u64;

    /// Returns the coordinate without any chain time settings attached.
    fn to_abstract(&self) -> AbstractDate {
        AbstractDate::new(self.epoch(), self.slot())
    }
}
