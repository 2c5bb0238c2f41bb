use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use framesync_shared::{Filter, Role};

use crate::FramesyncHostError;

/// One record of the user directory
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    pub fn new<I, N, E>(id: I, name: N, email: E, role: Role) -> Self
    where
        I: Into<String>,
        N: Into<String>,
        E: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
        }
    }
}

/// Static, read-only list of users. Not part of the protocol; the host only
/// filters it for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<User>", try_from = "Vec<User>")]
pub struct Directory {
    users: Vec<User>,
}

impl Directory {
    /// Builds a directory, rejecting duplicate ids
    pub fn try_new(users: Vec<User>) -> Result<Self, FramesyncHostError> {
        let mut seen = HashSet::new();
        for user in &users {
            if !seen.insert(user.id.as_str()) {
                return Err(FramesyncHostError::DuplicateUserId {
                    id: user.id.clone(),
                });
            }
        }
        Ok(Self { users })
    }

    /// Loads a directory from a JSON array of `{id, name, email, role}`
    pub fn from_json(json: &str) -> Result<Self, FramesyncHostError> {
        let users: Vec<User> =
            serde_json::from_str(json).map_err(|error| FramesyncHostError::Config {
                reason: error.to_string(),
            })?;
        Self::try_new(users)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Records passing `filter`, in directory order
    pub fn filtered(&self, filter: Filter) -> Vec<&User> {
        self.users
            .iter()
            .filter(|user| filter.matches(user.role))
            .collect()
    }
}

impl TryFrom<Vec<User>> for Directory {
    type Error = FramesyncHostError;

    fn try_from(users: Vec<User>) -> Result<Self, Self::Error> {
        Self::try_new(users)
    }
}

impl From<Directory> for Vec<User> {
    fn from(directory: Directory) -> Self {
        directory.users
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self {
            users: vec![
                User::new("1", "John Doe", "johndoe@gmail.com", Role::Developer),
                User::new("2", "Jane Doe", "janedoe@gmail.com", Role::Manager),
                User::new("3", "Sam Smith", "samsmith@gmail.com", Role::Designer),
            ],
        }
    }
}
