use std::borrow::Cow;

use slot_time_domain::{ParseError, SettingsError, SlotOutOfBoundsError, TimeError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid slot date: {0}")]
    InvalidSlotDate(#[from] ParseError),

    #[error("invalid instant: {0}")]
    InvalidInstant(#[from] chrono::ParseError),

    #[error("slot out of bounds error: {0}")]
    SlotOutOfBounds(#[from] SlotOutOfBoundsError),

    #[error("time error: {0}")]
    Time(#[from] TimeError),

    #[error("invalid config error: {0}")]
    InvalidConfig(Cow<'static, str>),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::InvalidConfig(err.to_string().into())
    }
}
