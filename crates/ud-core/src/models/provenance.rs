use crate::{LOCAL_ID_THRESHOLD, UserId};

use serde::{Deserialize, Serialize};

/// Where a user record came from.
///
/// Local records are persisted; remote records only ever change in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Fetched from the public directory endpoint
    Remote,
    /// Created through the add-user wizard and kept in local storage
    Local,
}

impl Provenance {
    /// Classify an id with the id-threshold heuristic.
    pub fn from_id(id: UserId) -> Self {
        if id > LOCAL_ID_THRESHOLD {
            Self::Local
        } else {
            Self::Remote
        }
    }

    /// Whether mutations of this record are written through to local storage.
    pub fn is_persisted(&self) -> bool {
        matches!(self, Self::Local)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Local => "local",
        }
    }
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
