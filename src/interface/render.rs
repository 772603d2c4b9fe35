use crate::models::{Combination, Site};
use crate::planner::BalancedTable;
use crate::solver::{cheapest_index, EvaluatedCombination, SolveResponse};

/// Display the feasible-combinations table.
pub fn display_combinations(combinations: &[Combination], product: &str) {
    if combinations.is_empty() {
        println!("No feasible combinations.");
        return;
    }

    println!();
    println!("=== Combinations, capacities and costs of viable locations ===");
    println!();

    let label_width = combinations
        .iter()
        .map(|c| c.label().len())
        .max()
        .unwrap_or(11)
        .max("Combination".len());
    let desc_width = combinations
        .iter()
        .map(|c| c.description.len())
        .max()
        .unwrap_or(11)
        .max("Description".len());

    println!(
        "{:<label_width$}  {:<desc_width$}  {:>12}  {:>14}",
        "Combination", "Description", "Capacity", "Monthly cost"
    );

    for combo in combinations {
        println!(
            "{:<label_width$}  {:<desc_width$}  {:>12}  {:>14}",
            combo.label(),
            combo.description,
            format!("{:.0} {}", combo.total_capacity, product),
            format!("${:.0}", combo.total_fixed_cost),
        );
    }

    println!();
    println!("{} feasible combination(s)", combinations.len());
    println!();
}

/// Display the balanced transportation-cost matrix: delivered unit costs per
/// customer and site, demand column, and the capacity footer row.
pub fn display_cost_matrix(table: &BalancedTable, sites: &[Site]) {
    if table.customers.is_empty() {
        println!("Transportation costs: (no customers)");
        return;
    }

    println!();
    println!("=== Transportation costs and customer demand ===");
    println!();

    let name_width = table
        .customers
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(8)
        .max("CAPACITY".len());
    let col_width = sites.iter().map(|s| s.name.len()).max().unwrap_or(8).max(8);

    // Header: one column per site, demand last
    print!("{:<name_width$}", "Customer");
    for site in sites {
        print!("  {:>col_width$}", site.name);
    }
    println!("  {:>10}", "Demand");

    for customer in &table.customers {
        print!("{:<name_width$}", customer.name);
        for site in sites {
            print!(
                "  {:>col_width$}",
                format!("${:.2}", customer.delivered_cost(&site.name))
            );
        }
        println!("  {:>10}", format!("{:.0}", customer.demand));
    }

    // Footer: capacities, then supply / demand totals
    print!("{:<name_width$}", "CAPACITY");
    for site in sites {
        print!("  {:>col_width$}", format!("{:.0}", site.capacity));
    }
    println!(
        "  {:>10}",
        format!("{:.0} / {:.0}", table.total_capacity, table.balanced_demand())
    );
    println!();
}

/// Display one optimal shipment plan returned by the solver.
pub fn display_shipment_plan(description: &str, response: &SolveResponse, sites: &[Site]) {
    println!();
    println!("=== Optimal shipments: {} ===", description);
    println!();

    if response.matrix.is_empty() {
        println!("(solver returned an empty matrix)");
    } else {
        let name_width = response
            .matrix
            .iter()
            .map(|r| r.customer.len())
            .max()
            .unwrap_or(8)
            .max("Customer".len());
        let col_width = sites.iter().map(|s| s.name.len()).max().unwrap_or(8).max(6);

        print!("{:<name_width$}", "Customer");
        for site in sites {
            print!("  {:>col_width$}", site.name);
        }
        println!("  {:>10}", "Demand");

        for row in &response.matrix {
            print!("{:<name_width$}", row.customer);
            for site in sites {
                let shipped = row.shipments.get(&site.name).copied().unwrap_or(0.0);
                print!("  {:>col_width$}", format!("{:.0}", shipped));
            }
            println!("  {:>10}", format!("{:.0}", row.demand));
        }
    }

    println!();
    println!("Total shipping cost: ${:.2}", response.total_cost);
}

/// Display the cost-analysis summary across all evaluated combinations and
/// mark the cheapest total.
pub fn display_cost_summary(evaluated: &[EvaluatedCombination]) {
    if evaluated.is_empty() {
        println!("No combinations evaluated.");
        return;
    }

    let best = cheapest_index(evaluated);

    println!();
    println!("=== Total monthly costs per combination ===");
    println!();

    let desc_width = evaluated
        .iter()
        .map(|e| e.combination.description.len())
        .max()
        .unwrap_or(11)
        .max("Combination".len());

    println!(
        "{:<desc_width$}  {:>14}  {:>14}  {:>14}",
        "Combination", "Shipping", "Fixed", "Total"
    );

    for (i, item) in evaluated.iter().enumerate() {
        let summary = item.cost_summary();
        let marker = if Some(i) == best { "  <- optimal" } else { "" };

        println!(
            "{:<desc_width$}  {:>14}  {:>14}  {:>14}{}",
            summary.description,
            format!("${:.2}", summary.shipping_cost),
            format!("${:.2}", summary.fixed_cost),
            format!("${:.2}", summary.total()),
            marker
        );
    }

    println!();
}

/// Explain an empty combination result for a non-empty site list.
pub fn display_infeasible(total_capacity: f64, total_demand: f64) {
    println!(
        "Infeasible: even the full site set covers only {:.0} of {:.0} demanded.",
        total_capacity, total_demand
    );
}

/// Warn about a capacity deficit. The table is left unbalanced on purpose.
pub fn display_deficit_warning(table: &BalancedTable) {
    eprintln!(
        "Warning: total capacity ({:.0}) is below total demand ({:.0}); \
         supply and demand are unbalanced and the solver outcome is undefined.",
        table.total_capacity, table.total_demand
    );
}
