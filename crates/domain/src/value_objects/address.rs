use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque account identifier on the host ledger.
///
/// The mechanism makes no assumption about the address format; it only needs
/// equality (to compare transfer endpoints against the pool) and hashing (to
/// key per-pool state).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// An empty address counts as unset for configuration purposes.
    pub fn is_unset(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Address {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
