use alloc::string::String;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

use crate::{AbstractDate, ConcreteDate};

impl Serialize for AbstractDate {
    /// Serializes the date as a string of the format `<EPOCH>.<SLOT>`.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AbstractDate {
    /// Deserializes the date from a string of the format `<EPOCH>.<SLOT>`.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer)
            .map(|text| AbstractDate::parse(&text))?
            .map_err(D::Error::custom)
    }
}

impl Serialize for ConcreteDate<'_> {
    /// Serializes the date like its [`AbstractDate`], without the settings.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.abstract_date().serialize(serializer)
    }
}
