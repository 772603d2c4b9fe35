use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A demand point with per-site base unit costs.
///
/// The per-site costs are a closed map flattened onto the record when
/// serialized, so a customer row reads `{ "client": ..., "demand": ...,
/// "Cleveland": 0.25, ... }`. Sites missing from the map cost 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "client")]
    pub name: String,

    pub demand: f64,

    #[serde(flatten)]
    pub unit_costs: BTreeMap<String, f64>,
}

impl Customer {
    pub fn new(name: impl Into<String>, demand: f64) -> Self {
        Self {
            name: name.into(),
            demand,
            unit_costs: BTreeMap::new(),
        }
    }

    pub fn with_cost(mut self, site: impl Into<String>, cost: f64) -> Self {
        self.unit_costs.insert(site.into(), cost);
        self
    }

    /// Base unit cost toward a site; missing entries default to 0.
    pub fn unit_cost(&self, site: &str) -> f64 {
        self.unit_costs.get(site).copied().unwrap_or(0.0)
    }

    /// Basic validation: non-empty name, positive demand, no negative costs.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && self.demand > 0.0 && self.unit_costs.values().all(|c| *c >= 0.0)
    }
}

/// A customer row of the balanced transportation table: demand plus the
/// delivered unit cost (base cost + site shipping rate) toward every site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalancedCustomer {
    #[serde(rename = "client")]
    pub name: String,

    pub demand: f64,

    #[serde(flatten)]
    pub delivered_costs: BTreeMap<String, f64>,
}

impl BalancedCustomer {
    /// Delivered unit cost toward a site; missing entries default to 0.
    pub fn delivered_cost(&self, site: &str) -> f64 {
        self.delivered_costs.get(site).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_cost_defaults_to_zero() {
        let customer = Customer::new("Dayton", 18.0).with_cost("Cleveland", 0.75);
        assert_eq!(customer.unit_cost("Cleveland"), 0.75);
        assert_eq!(customer.unit_cost("Harrisburg"), 0.0);
    }

    #[test]
    fn test_is_valid() {
        assert!(Customer::new("Dayton", 18.0).is_valid());
        assert!(!Customer::new("", 18.0).is_valid());
        assert!(!Customer::new("Dayton", 0.0).is_valid());
        assert!(!Customer::new("Dayton", 18.0).with_cost("Cleveland", -1.0).is_valid());
    }

    #[test]
    fn test_costs_flatten_onto_record() {
        let customer = Customer::new("Dayton", 18.0).with_cost("Cleveland", 0.75);
        let value = serde_json::to_value(&customer).unwrap();
        assert_eq!(value["client"], "Dayton");
        assert_eq!(value["demand"], 18.0);
        assert_eq!(value["Cleveland"], 0.75);

        let back: Customer = serde_json::from_value(value).unwrap();
        assert_eq!(back, customer);
    }
}
