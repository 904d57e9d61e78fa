//! Participant name - the unique key of a participant in the room

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A trimmed, non-empty participant name
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ParticipantName(String);

impl ParticipantName {
    /// Maximum length in characters
    pub const MAX_LEN: usize = 64;

    /// Parse a raw name, trimming surrounding whitespace
    pub fn parse(raw: &str) -> Result<Self, ParticipantNameError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ParticipantNameError::Empty);
        }
        if trimmed.chars().count() > Self::MAX_LEN {
            return Err(ParticipantNameError::TooLong { max: Self::MAX_LEN });
        }
        Ok(Self(trimmed.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ParticipantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ParticipantName {
    type Err = ParticipantNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ParticipantName {
    type Error = ParticipantNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ParticipantName> for String {
    fn from(name: ParticipantName) -> Self {
        name.0
    }
}

impl AsRef<str> for ParticipantName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Error when parsing a participant name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParticipantNameError {
    #[error("name must not be empty")]
    Empty,

    #[error("name must be at most {max} characters")]
    TooLong { max: usize },
}
