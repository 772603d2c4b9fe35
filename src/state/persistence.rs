use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{Combination, Site};
use crate::planner::BalancedTable;
use crate::state::Scenario;

/// Load a scenario from a JSON file.
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<Scenario> {
    let content = fs::read_to_string(path)?;
    let scenario: Scenario = serde_json::from_str(&content)?;
    Ok(scenario)
}

/// Save a scenario to a JSON file.
pub fn save_scenario<P: AsRef<Path>>(path: P, scenario: &Scenario) -> Result<()> {
    let json = serde_json::to_string_pretty(scenario)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write the feasible-combinations table to a CSV file.
pub fn write_combinations_csv<P: AsRef<Path>>(path: P, combinations: &[Combination]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["combination", "description", "capacity", "fixed_cost"])?;

    for combo in combinations {
        wtr.write_record([
            combo.label(),
            combo.description.clone(),
            format!("{}", combo.total_capacity),
            format!("{}", combo.total_fixed_cost),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the balanced transportation-cost table to a CSV file: one column
/// per site (in list order), delivered unit costs per customer, demand last.
pub fn write_costs_csv<P: AsRef<Path>>(
    path: P,
    table: &BalancedTable,
    sites: &[Site],
) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec!["client".to_string()];
    header.extend(sites.iter().map(|s| s.name.clone()));
    header.push("demand".to_string());
    wtr.write_record(&header)?;

    for customer in &table.customers {
        let mut row = vec![customer.name.clone()];
        row.extend(
            sites
                .iter()
                .map(|s| format!("{:.2}", customer.delivered_cost(&s.name))),
        );
        row.push(format!("{}", customer.demand));
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Customer;
    use crate::planner::{balance_demand, generate_combinations};
    use tempfile::NamedTempFile;

    #[test]
    fn test_scenario_roundtrip() {
        let scenario = Scenario::example();

        let file = NamedTempFile::new().unwrap();
        save_scenario(file.path(), &scenario).unwrap();

        let reloaded = load_scenario(file.path()).unwrap();
        assert_eq!(reloaded.sites, scenario.sites);
        assert_eq!(reloaded.customers, scenario.customers);
        assert_eq!(reloaded.context.company_name, "Good Tire, Inc.");
    }

    #[test]
    fn test_load_legacy_scenario_without_context() {
        let json = r#"{
            "sites": [
                { "location": "Cleveland", "capacity": 80, "shippingCost": 0.25, "generalCost": 40000 }
            ],
            "customers": [
                { "client": "Dayton", "demand": 18, "Cleveland": 0.75 }
            ]
        }"#;

        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), json).unwrap();

        let scenario = load_scenario(file.path()).unwrap();
        assert_eq!(scenario.sites[0].name, "Cleveland");
        assert_eq!(scenario.customers[0].unit_cost("Cleveland"), 0.75);
        // Context falls back to defaults.
        assert_eq!(scenario.context.product, "tires");
    }

    #[test]
    fn test_combinations_csv() {
        let scenario = Scenario::example();
        let combos = generate_combinations(&scenario.sites, scenario.total_demand()).unwrap();

        let file = NamedTempFile::new().unwrap();
        write_combinations_csv(file.path(), &combos).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "combination,description,capacity,fixed_cost"
        );
        assert_eq!(content.lines().count(), combos.len() + 1);
    }

    #[test]
    fn test_costs_csv_includes_dummy_row() {
        let sites = vec![Site::new("Cleveland", 80.0, 0.25, 40000.0)];
        let customers = vec![Customer::new("Dayton", 30.0).with_cost("Cleveland", 0.75)];
        let table = balance_demand(&customers, &sites);

        let file = NamedTempFile::new().unwrap();
        write_costs_csv(file.path(), &table, &sites).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "client,Cleveland,demand");
        assert_eq!(lines[1], "Dayton,1.00,30");
        assert_eq!(lines[2], "Dummy,0.00,50");
    }
}
