//! Voter address type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The identity of a participant, as assigned by the surrounding substrate.
///
/// The election core treats addresses as opaque: it never derives, parses,
/// or validates them, it only compares and enumerates them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoterAddress(String);

impl VoterAddress {
    /// Create an address from a raw identity string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VoterAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for VoterAddress {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for VoterAddress {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
