use std::fmt;

use serde::{Deserialize, Serialize};

use crate::unit::Unit;

/// A magnitude paired with the unit it is measured in.
///
/// Quantities are never mutated: a conversion produces a new `Quantity`
/// rather than rewriting the input in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub magnitude: f64,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(magnitude: f64, unit: impl Into<Unit>) -> Self {
        Self {
            magnitude,
            unit: unit.into(),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit)
    }
}
