use clap::Parser;
use std::path::Path;

use warehouse_locator_rs::cli::{Cli, Command};
use warehouse_locator_rs::error::{LocatorError, Result};
use warehouse_locator_rs::interface::{
    collect_customers, collect_sites, display_combinations, display_cost_matrix,
    display_cost_summary, display_deficit_warning, display_infeasible, display_shipment_plan,
    prompt_context, prompt_site, prompt_site_name, prompt_yes_no,
};
use warehouse_locator_rs::planner::{balance_demand, generate_combinations, BalancedTable};
use warehouse_locator_rs::state::{
    load_scenario, save_scenario, write_combinations_csv, write_costs_csv, Scenario,
};
use warehouse_locator_rs::solver::{evaluate_combinations, HttpSolverClient};
use warehouse_locator_rs::Combination;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Analyze => cmd_analyze(&cli.file),
        Command::Solve { url } => cmd_solve(&cli.file, &url),
        Command::Init { example } => cmd_init(&cli.file, example),
        Command::EditSite => cmd_edit_site(&cli.file),
        Command::Export {
            combinations,
            costs,
        } => cmd_export(&cli.file, combinations.as_deref(), costs.as_deref()),
    }
}

/// Load a scenario and check it holds anything workable.
fn load_checked(file_path: &str) -> Result<Option<Scenario>> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Scenario file not found: {}", file_path);
        eprintln!("Run 'init' (or 'init --example') to create one.");
        return Ok(None);
    }

    let scenario = load_scenario(path)?;

    if !scenario.has_valid_sites() {
        println!("No sites yet. Run 'init' to enter candidate warehouse sites.");
        return Ok(None);
    }
    if !scenario.has_valid_customers() {
        println!("No customers yet. Run 'init' to enter customer demands.");
        return Ok(None);
    }

    Ok(Some(scenario))
}

/// Recompute both transforms from the current scenario. No caching; every
/// invocation works from the inputs as loaded.
fn analyze(scenario: &Scenario) -> Result<(Vec<Combination>, BalancedTable)> {
    let demand = scenario.total_demand();
    let combinations = generate_combinations(&scenario.sites, demand)?;
    let table = balance_demand(&scenario.customers, &scenario.sites);
    Ok((combinations, table))
}

/// Show feasible combinations and the balanced cost table.
fn cmd_analyze(file_path: &str) -> Result<()> {
    let Some(scenario) = load_checked(file_path)? else {
        return Ok(());
    };

    println!(
        "{} — {} sites, {} customers, total demand {:.0} {}",
        scenario.context.company_name,
        scenario.sites.len(),
        scenario.customers.len(),
        scenario.total_demand(),
        scenario.context.product,
    );

    let (combinations, table) = analyze(&scenario)?;

    if combinations.is_empty() {
        display_infeasible(scenario.total_capacity(), scenario.total_demand());
    } else {
        display_combinations(&combinations, &scenario.context.product);
    }

    if table.is_deficit() {
        display_deficit_warning(&table);
    }
    display_cost_matrix(&table, &scenario.sites);

    Ok(())
}

/// Analyze, then evaluate every combination against the remote solver.
fn cmd_solve(file_path: &str, url: &str) -> Result<()> {
    let Some(scenario) = load_checked(file_path)? else {
        return Ok(());
    };

    let (combinations, table) = analyze(&scenario)?;

    if combinations.is_empty() {
        display_infeasible(scenario.total_capacity(), scenario.total_demand());
        return Ok(());
    }

    if table.is_deficit() {
        display_deficit_warning(&table);
        println!("Refusing to call the solver on an unbalanced deficit.");
        return Ok(());
    }

    println!(
        "Evaluating {} combination(s) against {}...",
        combinations.len(),
        url
    );

    let solver = HttpSolverClient::new(url);
    let evaluated = evaluate_combinations(&solver, &combinations, &table.customers, &scenario.sites)?;

    for item in &evaluated {
        display_shipment_plan(&item.combination.description, &item.response, &scenario.sites);
    }

    display_cost_summary(&evaluated);

    Ok(())
}

/// Build a scenario interactively or from the built-in example.
fn cmd_init(file_path: &str, example: bool) -> Result<()> {
    let path = Path::new(file_path);

    if path.exists() {
        let overwrite = prompt_yes_no(
            &format!("{} already exists. Overwrite?", file_path),
            false,
        )?;
        if !overwrite {
            println!("Keeping the existing scenario.");
            return Ok(());
        }
    }

    let scenario = if example {
        Scenario::example()
    } else {
        let context = prompt_context()?;
        let mut scenario = Scenario::new(context);

        println!();
        println!("Enter the candidate warehouse sites.");
        scenario.sites = collect_sites()?;

        println!();
        println!("Enter the customers and their base unit costs.");
        scenario.customers = collect_customers(&scenario.sites)?;

        scenario
    };

    save_scenario(path, &scenario)?;
    println!(
        "Saved scenario with {} site(s) and {} customer(s) to {}.",
        scenario.sites.len(),
        scenario.customers.len(),
        file_path
    );

    Ok(())
}

/// Edit one site's numbers, matched by (fuzzy) name.
fn cmd_edit_site(file_path: &str) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Scenario file not found: {}", file_path);
        return Ok(());
    }

    let mut scenario = load_scenario(path)?;

    if scenario.sites.is_empty() {
        println!("No sites to edit.");
        return Ok(());
    }

    let Some(name) = prompt_site_name(&scenario.sites)? else {
        println!("Cancelled.");
        return Ok(());
    };

    println!("Enter the new values for {}.", name);
    let edited = prompt_site()?;

    let site = scenario
        .site_mut(&name)
        .ok_or_else(|| LocatorError::SiteNotFound(name.clone()))?;
    *site = edited;

    save_scenario(path, &scenario)?;
    println!("Updated {}. Scenario saved.", name);

    Ok(())
}

/// Export the combinations and/or balanced cost tables to CSV.
fn cmd_export(
    file_path: &str,
    combinations_path: Option<&str>,
    costs_path: Option<&str>,
) -> Result<()> {
    if combinations_path.is_none() && costs_path.is_none() {
        println!("Please specify at least one export target:");
        println!("  --combinations PATH  Write the feasible-combinations table");
        println!("  --costs PATH         Write the balanced cost table");
        return Ok(());
    }

    let Some(scenario) = load_checked(file_path)? else {
        return Ok(());
    };

    let (combinations, table) = analyze(&scenario)?;

    if let Some(out) = combinations_path {
        write_combinations_csv(out, &combinations)?;
        println!("Wrote {} combination(s) to {}.", combinations.len(), out);
    }

    if let Some(out) = costs_path {
        write_costs_csv(out, &table, &scenario.sites)?;
        println!("Wrote cost table ({} row(s)) to {}.", table.customers.len(), out);
    }

    Ok(())
}
