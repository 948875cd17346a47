//! Leaf nodes of a score tree.

use crate::types::attributes::{AttributeStore, Attributed};
use crate::types::time::{IntoTime, Time};
use crate::types::value::Value;
use num_traits::Zero;

/// A sounding pitch held for a duration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Note {
    /// MIDI-style pitch number (60 = middle C)
    pub pitch: i64,
    pub duration: Time,
    pub attributes: AttributeStore,
}

impl Note {
    pub fn new(pitch: i64, duration: impl IntoTime) -> Self {
        Self::with_attributes(pitch, duration, AttributeStore::new())
    }

    pub fn with_attributes(
        pitch: i64,
        duration: impl IntoTime,
        attributes: impl Into<AttributeStore>,
    ) -> Self {
        Note {
            pitch,
            duration: duration.into_time(),
            attributes: attributes.into(),
        }
    }

    /// Same note shifted by `interval` semitones
    pub fn transpose(&self, interval: i64) -> Self {
        Note {
            pitch: self.pitch + interval,
            ..self.clone()
        }
    }

    /// Same note with a different duration
    pub fn with_duration(&self, duration: Time) -> Self {
        Note {
            duration,
            ..self.clone()
        }
    }
}

/// Silence for a duration. `Rest(0)` is the identity of the algebra.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rest {
    pub duration: Time,
    pub attributes: AttributeStore,
}

impl Rest {
    pub fn new(duration: impl IntoTime) -> Self {
        Self::with_attributes(duration, AttributeStore::new())
    }

    pub fn with_attributes(
        duration: impl IntoTime,
        attributes: impl Into<AttributeStore>,
    ) -> Self {
        Rest {
            duration: duration.into_time(),
            attributes: attributes.into(),
        }
    }

    /// The empty score
    pub fn none() -> Self {
        Self::new(Time::zero())
    }

    pub fn with_duration(&self, duration: Time) -> Self {
        Rest {
            duration,
            ..self.clone()
        }
    }
}

/// Zero-length, non-sounding data such as a tempo or a CC value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Controller {
    pub name: String,
    pub attributes: AttributeStore,
}

impl Controller {
    pub fn new(name: impl Into<String>, attributes: impl Into<AttributeStore>) -> Self {
        Controller {
            name: name.into(),
            attributes: attributes.into(),
        }
    }

    /// The controller's data: the entry under its own name, else the `value` entry
    pub fn value(&self) -> Option<&Value> {
        self.attributes
            .read(&self.name)
            .or_else(|| self.attributes.read("value"))
    }
}

impl Attributed for Note {
    fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    fn replace_attributes(&self, attributes: AttributeStore) -> Self {
        Note {
            attributes,
            ..self.clone()
        }
    }
}

impl Attributed for Rest {
    fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    fn replace_attributes(&self, attributes: AttributeStore) -> Self {
        Rest {
            attributes,
            ..self.clone()
        }
    }
}

impl Attributed for Controller {
    fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    fn replace_attributes(&self, attributes: AttributeStore) -> Self {
        Controller {
            attributes,
            ..self.clone()
        }
    }
}
