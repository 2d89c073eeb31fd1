//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// The value contains a character that cannot appear in a storage key.
    #[error("{field} {value:?} contains invalid character {ch:?}")]
    InvalidCharacter {
        field: &'static str,
        value: String,
        ch: char,
    },

    /// The value is a reserved path component.
    #[error("{field} cannot be {value:?}")]
    Reserved { field: &'static str, value: String },
}

/// A validated punchclock name.
///
/// Names identify a timer and double as its storage key, so they must be
/// non-empty and usable as a single path component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimerName(String);

impl TimerName {
    const FIELD: &'static str = "timer name";

    /// Creates a new name after validation.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if name == "." || name == ".." {
            return Err(ValidationError::Reserved {
                field: Self::FIELD,
                value: name,
            });
        }
        if let Some(ch) = name.chars().find(|c| matches!(c, '/' | '\\' | '\0')) {
            return Err(ValidationError::InvalidCharacter {
                field: Self::FIELD,
                value: name,
                ch,
            });
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for TimerName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TimerName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TimerName> for String {
    fn from(name: TimerName) -> Self {
        name.0
    }
}

impl fmt::Display for TimerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TimerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
