use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{BalancedCustomer, Combination, Site};

/// Request body for the remote transportation solver, one combination per
/// call. Field names are the service's contract; do not rename.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveRequest {
    pub valid_combinations: Vec<CombinationPayload>,
    pub customers: Vec<CustomerPayload>,
    pub locations: Vec<LocationPayload>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CombinationPayload {
    /// Comma-joined member site names.
    pub combination: String,
    pub description: String,
    pub capacity: f64,
    pub cost: f64,
}

impl From<&Combination> for CombinationPayload {
    fn from(combo: &Combination) -> Self {
        Self {
            combination: combo.label(),
            description: combo.description.clone(),
            capacity: combo.total_capacity,
            cost: combo.total_fixed_cost,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CustomerPayload {
    pub client: String,
    pub demand: f64,
    #[serde(flatten)]
    pub costs: BTreeMap<String, f64>,
}

impl From<&BalancedCustomer> for CustomerPayload {
    fn from(customer: &BalancedCustomer) -> Self {
        Self {
            client: customer.name.clone(),
            demand: customer.demand,
            costs: customer.delivered_costs.clone(),
        }
    }
}

/// Capacity-masked view of a site: capacity is zeroed for sites outside the
/// combination under evaluation, so the solver cannot ship from them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationPayload {
    pub location: String,
    pub capacity: f64,
    pub shipping_cost: f64,
    pub general_cost: f64,
}

/// Assemble the request for one combination: the balanced customer rows and
/// every site, with capacity masked by combination membership.
pub fn build_request(
    combination: &Combination,
    customers: &[BalancedCustomer],
    sites: &[Site],
) -> SolveRequest {
    let locations = sites
        .iter()
        .map(|site| LocationPayload {
            location: site.name.clone(),
            capacity: if combination.contains(&site.name) {
                site.capacity
            } else {
                0.0
            },
            shipping_cost: site.shipping_cost,
            general_cost: site.fixed_cost,
        })
        .collect();

    SolveRequest {
        valid_combinations: vec![combination.into()],
        customers: customers.iter().map(CustomerPayload::from).collect(),
        locations,
    }
}

/// Solver response. Only `matrix` and `total_cost` are required; anything
/// else the service sends is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SolveResponse {
    pub matrix: Vec<ShipmentRow>,
    pub total_cost: f64,
}

/// One row of the optimal shipment matrix: a customer, its demand, and the
/// quantity shipped from each site (flattened site-name keys).
#[derive(Debug, Clone, Deserialize)]
pub struct ShipmentRow {
    #[serde(rename = "CLIENTE")]
    pub customer: String,

    #[serde(rename = "DEMANDA")]
    pub demand: f64,

    #[serde(flatten)]
    pub shipments: BTreeMap<String, f64>,
}
