use std::collections::BTreeMap;

use warehouse_locator_rs::planner::{balance_demand, generate_combinations};
use warehouse_locator_rs::solver::{
    cheapest_index, evaluate_combinations, ShipmentRow, SolveRequest, SolveResponse,
    TransportationSolver,
};
use warehouse_locator_rs::state::Scenario;
use warehouse_locator_rs::Result;

/// Stand-in solver: ships every customer's full demand from the first open
/// site and prices the plan from the delivered costs in the request.
struct GreedySolver;

impl TransportationSolver for GreedySolver {
    fn solve(&self, request: &SolveRequest) -> Result<SolveResponse> {
        let open: Vec<&str> = request
            .locations
            .iter()
            .filter(|l| l.capacity > 0.0)
            .map(|l| l.location.as_str())
            .collect();

        let mut total_cost = 0.0;
        let matrix = request
            .customers
            .iter()
            .map(|customer| {
                let mut shipments = BTreeMap::new();
                for location in &request.locations {
                    shipments.insert(location.location.clone(), 0.0);
                }

                if let Some(first_open) = open.first() {
                    let unit = customer.costs.get(*first_open).copied().unwrap_or(0.0);
                    shipments.insert(first_open.to_string(), customer.demand);
                    total_cost += unit * customer.demand;
                }

                ShipmentRow {
                    customer: customer.client.clone(),
                    demand: customer.demand,
                    shipments,
                }
            })
            .collect();

        Ok(SolveResponse { matrix, total_cost })
    }
}

#[test]
fn test_example_scenario_end_to_end() {
    let scenario = Scenario::example();
    let demand = scenario.total_demand();

    let combinations = generate_combinations(&scenario.sites, demand).unwrap();
    assert!(!combinations.is_empty());

    let table = balance_demand(&scenario.customers, &scenario.sites);
    assert!(!table.is_deficit());
    assert!(table.has_dummy());

    let evaluated =
        evaluate_combinations(&GreedySolver, &combinations, &table.customers, &scenario.sites)
            .unwrap();

    // One result per combination, in enumeration order.
    assert_eq!(evaluated.len(), combinations.len());
    for (combo, item) in combinations.iter().zip(&evaluated) {
        assert_eq!(item.combination, *combo);
    }

    // The dummy customer's shipments are free, so it never contributes cost.
    let dummy_rows: Vec<_> = evaluated[0]
        .response
        .matrix
        .iter()
        .filter(|r| r.customer == "Dummy")
        .collect();
    assert_eq!(dummy_rows.len(), 1);

    let best = cheapest_index(&evaluated).unwrap();
    let best_total = evaluated[best].cost_summary().total();
    for item in &evaluated {
        assert!(item.cost_summary().total() >= best_total);
    }
}

#[test]
fn test_masked_sites_receive_no_shipments() {
    let scenario = Scenario::example();
    let demand = scenario.total_demand();

    let combinations = generate_combinations(&scenario.sites, demand).unwrap();
    let table = balance_demand(&scenario.customers, &scenario.sites);

    let evaluated =
        evaluate_combinations(&GreedySolver, &combinations, &table.customers, &scenario.sites)
            .unwrap();

    for item in &evaluated {
        for row in &item.response.matrix {
            for site in &scenario.sites {
                if !item.combination.contains(&site.name) {
                    let shipped = row.shipments.get(&site.name).copied().unwrap_or(0.0);
                    assert_eq!(
                        shipped, 0.0,
                        "{} shipped from closed site {}",
                        row.customer, site.name
                    );
                }
            }
        }
    }
}
