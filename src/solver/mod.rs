mod client;
mod payload;

pub use client::{HttpSolverClient, TransportationSolver};
pub use payload::{
    build_request, CombinationPayload, CustomerPayload, LocationPayload, ShipmentRow,
    SolveRequest, SolveResponse,
};

use crate::error::Result;
use crate::models::{BalancedCustomer, Combination, Site};

/// Monthly cost breakdown of one evaluated combination.
#[derive(Debug, Clone)]
pub struct CostSummary {
    pub description: String,

    /// Optimal shipping cost reported by the solver.
    pub shipping_cost: f64,

    /// Combined fixed monthly cost of the member sites.
    pub fixed_cost: f64,
}

impl CostSummary {
    pub fn total(&self) -> f64 {
        self.shipping_cost + self.fixed_cost
    }
}

/// A combination together with its solver result.
#[derive(Debug, Clone)]
pub struct EvaluatedCombination {
    pub combination: Combination,
    pub response: SolveResponse,
}

impl EvaluatedCombination {
    pub fn cost_summary(&self) -> CostSummary {
        CostSummary {
            description: self.combination.description.clone(),
            shipping_cost: self.response.total_cost,
            fixed_cost: self.combination.total_fixed_cost,
        }
    }
}

/// Call the solver once per combination, in enumeration order.
///
/// Fails on the first solver error; combinations and balances computed by
/// the caller stay untouched either way.
pub fn evaluate_combinations(
    solver: &dyn TransportationSolver,
    combinations: &[Combination],
    customers: &[BalancedCustomer],
    sites: &[Site],
) -> Result<Vec<EvaluatedCombination>> {
    let mut evaluated = Vec::with_capacity(combinations.len());

    for combination in combinations {
        let request = build_request(combination, customers, sites);
        let response = solver.solve(&request)?;
        evaluated.push(EvaluatedCombination {
            combination: combination.clone(),
            response,
        });
    }

    Ok(evaluated)
}

/// Index of the cheapest evaluated combination by total monthly cost.
pub fn cheapest_index(evaluated: &[EvaluatedCombination]) -> Option<usize> {
    evaluated
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            a.cost_summary()
                .total()
                .partial_cmp(&b.cost_summary().total())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(i, _)| i)
}
