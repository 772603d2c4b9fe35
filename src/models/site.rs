use serde::{Deserialize, Serialize};

/// A candidate warehouse site.
///
/// Serialized field names (`location`, `shippingCost`, `generalCost`) are a
/// compatibility contract with the scenario files and the remote solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    #[serde(rename = "location")]
    pub name: String,

    #[serde(rename = "capacity")]
    pub capacity: f64,

    /// Per-unit shipping rate from the main plant to this site.
    #[serde(rename = "shippingCost")]
    pub shipping_cost: f64,

    /// Fixed monthly operating cost of the site.
    #[serde(rename = "generalCost")]
    pub fixed_cost: f64,
}

impl Site {
    pub fn new(name: impl Into<String>, capacity: f64, shipping_cost: f64, fixed_cost: f64) -> Self {
        Self {
            name: name.into(),
            capacity,
            shipping_cost,
            fixed_cost,
        }
    }

    /// Basic validation: non-empty name and strictly positive numbers.
    ///
    /// Upstream entry forms enforce the same rules; this is the last line
    /// before the enumeration and balancing transforms.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty()
            && self.capacity > 0.0
            && self.shipping_cost > 0.0
            && self.fixed_cost > 0.0
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
