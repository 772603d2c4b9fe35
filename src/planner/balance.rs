use std::collections::BTreeMap;

use crate::models::{BalancedCustomer, Customer, Site};
use crate::planner::constants::DUMMY_CUSTOMER_NAME;

/// The balanced transportation table: customers with delivered costs toward
/// every site, plus the totals the balancing decision was made from.
#[derive(Debug, Clone)]
pub struct BalancedTable {
    /// Original customers in their given order; dummy row (if any) last.
    pub customers: Vec<BalancedCustomer>,

    pub total_demand: f64,

    pub total_capacity: f64,
}

impl BalancedTable {
    /// Positive excess of capacity over demand, 0 otherwise.
    pub fn surplus(&self) -> f64 {
        (self.total_capacity - self.total_demand).max(0.0)
    }

    /// Capacity below demand. Left uncorrected; callers must surface it
    /// before handing the table to a solver.
    pub fn is_deficit(&self) -> bool {
        self.total_capacity < self.total_demand
    }

    /// Sum of demand over the balanced rows (dummy included).
    pub fn balanced_demand(&self) -> f64 {
        self.customers.iter().map(|c| c.demand).sum()
    }

    pub fn has_dummy(&self) -> bool {
        self.customers
            .last()
            .is_some_and(|c| c.name == DUMMY_CUSTOMER_NAME)
    }
}

/// Build the balanced transportation table.
///
/// Every customer gets a delivered cost toward every site: its base unit
/// cost (0 when the site is missing from its map) plus the site's shipping
/// rate. When capacity exceeds demand, one zero-cost dummy customer absorbs
/// the surplus so supply equals demand; a deficit is only flagged, never
/// fabricated away.
pub fn balance_demand(customers: &[Customer], sites: &[Site]) -> BalancedTable {
    let total_demand: f64 = customers.iter().map(|c| c.demand).sum();
    let total_capacity: f64 = sites.iter().map(|s| s.capacity).sum();
    let surplus = (total_capacity - total_demand).max(0.0);

    let mut balanced: Vec<BalancedCustomer> = customers
        .iter()
        .map(|customer| {
            let delivered_costs: BTreeMap<String, f64> = sites
                .iter()
                .map(|site| {
                    (
                        site.name.clone(),
                        customer.unit_cost(&site.name) + site.shipping_cost,
                    )
                })
                .collect();

            BalancedCustomer {
                name: customer.name.clone(),
                demand: customer.demand,
                delivered_costs,
            }
        })
        .collect();

    if surplus > 0.0 {
        let delivered_costs: BTreeMap<String, f64> =
            sites.iter().map(|site| (site.name.clone(), 0.0)).collect();

        balanced.push(BalancedCustomer {
            name: DUMMY_CUSTOMER_NAME.to_string(),
            demand: surplus,
            delivered_costs,
        });
    }

    BalancedTable {
        customers: balanced,
        total_demand,
        total_capacity,
    }
}
