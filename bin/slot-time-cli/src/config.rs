//! Configuration management for the slot time command-line tool.
//!
//! This module provides configuration loading from the embedded base configuration, an
//! optional configuration file and environment variables. Environment variables override
//! every file and use the prefix `SLOTTIME_`.

use core::{num::NonZeroU64, time::Duration};

use std::path::Path;

use chrono::{DateTime, FixedOffset, TimeDelta};
use config::{ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use slot_time_domain::ChainTimeSettings;

use crate::error::CliError;

/// Loads the configuration from the base config, `path` and environment variables.
///
/// Environment variables use double underscores `__` to denote nested keys.
/// For example, `SLOTTIME_CHAIN__SLOTS_PER_EPOCH` corresponds to `chain.slots_per_epoch`.
///
/// # Errors
///
/// If the configuration could not be loaded or parsed
pub fn get_configuration(path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut builder = config::Config::builder()
        .add_source(File::from_str(include_str!("base_config.ron"), FileFormat::Ron));

    if let Some(path) = path {
        builder = builder.add_source(File::from(path).format(FileFormat::Ron));
    }

    builder
        .add_source(
            Environment::with_prefix(Config::CONFIG_ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
}

/// Root configuration structure containing all application settings.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Timing parameters of the chain
    pub chain: ChainConfig,
}

/// Timing parameters of the chain.
#[derive(Debug, Deserialize)]
pub struct ChainConfig {
    /// The RFC 3339 instant at which epoch 0, slot 0 begins (e.g., "2017-09-23T21:44:51+00:00")
    pub genesis_instant: DateTime<FixedOffset>,

    /// The number of slots per epoch
    pub slots_per_epoch: NonZeroU64,

    /// The duration of a slot (e.g., "20s", "1s 500ms")
    #[serde(with = "humantime_serde")]
    pub slot_duration: Duration,
}

impl Config {
    const CONFIG_ENV_PREFIX: &str = "SLOTTIME";
}

impl ChainConfig {
    /// Builds the chain time settings described by this configuration.
    ///
    /// # Errors
    ///
    /// If the slot duration is zero or too large to be represented
    pub fn to_settings(&self) -> Result<ChainTimeSettings, CliError> {
        let slot_duration = TimeDelta::from_std(self.slot_duration)
            .map_err(|err| CliError::InvalidConfig(err.to_string().into()))?;

        let settings = ChainTimeSettings::builder()
            .genesis_instant(self.genesis_instant)
            .slots_per_epoch(self.slots_per_epoch)
            .slot_duration(slot_duration)
            .build()?;

        Ok(settings)
    }
}
