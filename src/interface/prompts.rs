use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{LocatorError, Result};
use crate::models::{Customer, DataContext, Site};

/// Prompt for a positive number.
fn prompt_positive(prompt: &str) -> Result<f64> {
    let input: String = Input::new().with_prompt(prompt).interact_text()?;

    let value: f64 = input
        .parse()
        .map_err(|_| LocatorError::InvalidInput("Invalid number".to_string()))?;

    if value <= 0.0 {
        return Err(LocatorError::InvalidInput(
            "Must be a positive number".to_string(),
        ));
    }

    Ok(value)
}

/// Prompt for a non-negative number (base unit costs may be zero).
fn prompt_non_negative(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    let value: f64 = input
        .parse()
        .map_err(|_| LocatorError::InvalidInput("Invalid number".to_string()))?;

    if value < 0.0 {
        return Err(LocatorError::InvalidInput(
            "Cost cannot be negative".to_string(),
        ));
    }

    Ok(value)
}

/// Prompt for the company context, with the stock defaults.
pub fn prompt_context() -> Result<DataContext> {
    let defaults = DataContext::default();

    let company_name: String = Input::new()
        .with_prompt("Company name")
        .default(defaults.company_name)
        .interact_text()?;

    let main_warehouse_location: String = Input::new()
        .with_prompt("Main plant location")
        .default(defaults.main_warehouse_location)
        .interact_text()?;

    let product: String = Input::new()
        .with_prompt("Product")
        .default(defaults.product)
        .interact_text()?;

    Ok(DataContext {
        company_name,
        main_warehouse_location,
        product,
    })
}

/// Prompt for one candidate site.
pub fn prompt_site() -> Result<Site> {
    let name: String = Input::new().with_prompt("Site name").interact_text()?;

    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(LocatorError::InvalidInput(
            "Site name is required".to_string(),
        ));
    }

    let capacity = prompt_positive(&format!("Capacity of {}", name))?;
    let shipping_cost = prompt_positive(&format!("Per-unit shipping cost to {}", name))?;
    let fixed_cost = prompt_positive(&format!("Fixed monthly cost of {}", name))?;

    Ok(Site::new(name, capacity, shipping_cost, fixed_cost))
}

/// Collect candidate sites until the user stops.
pub fn collect_sites() -> Result<Vec<Site>> {
    let mut sites = Vec::new();

    loop {
        let site = prompt_site()?;
        println!("Added site: {}", site.name);
        sites.push(site);

        let more = prompt_yes_no("Add another site?", true)?;
        if !more {
            break;
        }
    }

    Ok(sites)
}

/// Prompt for one customer: name, demand, and a base unit cost toward every
/// known site.
pub fn prompt_customer(sites: &[Site]) -> Result<Customer> {
    let name: String = Input::new().with_prompt("Customer name").interact_text()?;

    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(LocatorError::InvalidInput(
            "Customer name is required".to_string(),
        ));
    }

    let demand = prompt_positive(&format!("Monthly demand of {}", name))?;

    let mut customer = Customer::new(name, demand);
    for site in sites {
        let cost = prompt_non_negative(
            &format!("Base unit cost {} -> {}", site.name, customer.name),
            0.0,
        )?;
        customer.unit_costs.insert(site.name.clone(), cost);
    }

    Ok(customer)
}

/// Collect customers until the user stops.
pub fn collect_customers(sites: &[Site]) -> Result<Vec<Customer>> {
    let mut customers = Vec::new();

    loop {
        let customer = prompt_customer(sites)?;
        println!("Added customer: {}", customer.name);
        customers.push(customer);

        let more = prompt_yes_no("Add another customer?", true)?;
        if !more {
            break;
        }
    }

    Ok(customers)
}

/// Prompt for a site name with fuzzy matching against the known sites.
///
/// Exact (case-insensitive) matches win; otherwise close names are offered
/// for confirmation or selection. Empty input cancels.
pub fn prompt_site_name(sites: &[Site]) -> Result<Option<String>> {
    loop {
        let input: String = Input::new()
            .with_prompt("Which site? (or press Enter to cancel)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        // Try exact match first (case-insensitive)
        let exact = sites
            .iter()
            .find(|s| s.name.to_lowercase() == input.to_lowercase());

        if let Some(site) = exact {
            return Ok(Some(site.name.clone()));
        }

        // Try fuzzy matching
        let mut candidates: Vec<(&Site, f64)> = sites
            .iter()
            .map(|s| (s, jaro_winkler(&s.name.to_lowercase(), &input.to_lowercase())))
            .filter(|(_, score)| *score > 0.7)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            println!("No matching site found for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let site = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", site.name))
                .default(true)
                .interact()?;

            if confirm {
                return Ok(Some(site.name.clone()));
            }
            continue;
        }

        // Multiple matches - let user select
        let options: Vec<String> = candidates
            .iter()
            .take(5)
            .map(|(s, _)| s.name.clone())
            .collect();

        let mut selection_options = options.clone();
        selection_options.push("None of these".to_string());

        let selection = Select::new()
            .with_prompt("Which did you mean?")
            .items(&selection_options)
            .default(0)
            .interact()?;

        if selection < options.len() {
            return Ok(Some(options[selection].clone()));
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
