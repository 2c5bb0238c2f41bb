use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A role from the user directory
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Developer,
    Manager,
    Designer,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Developer, Role::Manager, Role::Designer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Developer => "developer",
            Role::Manager => "manager",
            Role::Designer => "designer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == value)
            .ok_or_else(|| RoleParseError {
                value: value.to_string(),
            })
    }
}

/// The active selection filter: either every role, or exactly one.
///
/// On the wire a filter is the bare lowercase role name, or `"all"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Filter {
    #[default]
    All,
    Only(Role),
}

impl Filter {
    const ALL_TAG: &'static str = "all";

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => Self::ALL_TAG,
            Filter::Only(role) => role.as_str(),
        }
    }

    /// Returns whether a record with the given role passes this filter
    pub fn matches(&self, role: Role) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(selected) => *selected == role,
        }
    }
}

impl From<Role> for Filter {
    fn from(role: Role) -> Self {
        Filter::Only(role)
    }
}

impl From<Filter> for &'static str {
    fn from(filter: Filter) -> Self {
        filter.as_str()
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = FilterParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == Self::ALL_TAG {
            return Ok(Filter::All);
        }
        value
            .parse::<Role>()
            .map(Filter::Only)
            .map_err(|_| FilterParseError {
                value: value.to_string(),
            })
    }
}

impl TryFrom<String> for Filter {
    type Error = FilterParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Returned when a string names no known role
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown role '{value}'. Expected one of: developer, manager, designer")]
pub struct RoleParseError {
    pub value: String,
}

/// Returned when a string is neither `"all"` nor a known role
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown filter '{value}'. Expected 'all' or one of: developer, manager, designer")]
pub struct FilterParseError {
    pub value: String,
}
