use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::error::OriginError;

pub const DEFAULT_TRUSTED_ORIGIN: &str = "http://localhost:3000";

/// A scheme+host+port string identifying a communication partner.
///
/// Origins are compared byte for byte. No normalization of case, default
/// ports or trailing slashes is performed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Origin(String);

impl Origin {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, OriginError> {
        let value = value.into();
        if value.is_empty() {
            return Err(OriginError::Empty);
        }
        if value == "*" {
            return Err(OriginError::Wildcard);
        }
        if value.chars().any(char::is_whitespace) {
            return Err(OriginError::Whitespace { value });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Origin {
    fn default() -> Self {
        Self(DEFAULT_TRUSTED_ORIGIN.to_string())
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Origin {
    type Err = OriginError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::new(value)
    }
}

impl TryFrom<String> for Origin {
    type Error = OriginError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Origin> for String {
    fn from(origin: Origin) -> Self {
        origin.0
    }
}
