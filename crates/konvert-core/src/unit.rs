use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque, case-sensitive unit name.
///
/// Units are plain identifiers with no canonicalization and no dimensional
/// typing: `"M"` and `"m"` are two different units, as are `"meter"` and
/// `"metre"`. Equality and hashing are plain string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Unit(String);

impl Unit {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Unit {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Unit {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
