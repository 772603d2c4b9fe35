use crate::error::{LocatorError, Result};
use crate::models::{Combination, Site};
use crate::planner::constants::{ALL_SITES_DESCRIPTION, MAX_ENUMERATION_SITES};

/// Enumerate every non-empty subset of sites whose combined capacity meets
/// `demand`, using the default enumeration limit.
pub fn generate_combinations(sites: &[Site], demand: f64) -> Result<Vec<Combination>> {
    generate_combinations_with_limit(sites, demand, MAX_ENUMERATION_SITES)
}

/// Enumerate feasible subsets with an explicit site-count limit.
///
/// Subsets come out in bitmask order: mask runs from 1 to 2^n - 1 and bit j
/// selects `sites[j]`. That order is part of the contract; downstream tables
/// and the per-combination solver calls iterate it as-is.
///
/// A demand of 0 (or less) keeps every non-empty subset. An empty result for
/// a non-empty site list means even the full set falls short of demand;
/// callers report that as "infeasible" rather than showing an empty table.
pub fn generate_combinations_with_limit(
    sites: &[Site],
    demand: f64,
    limit: usize,
) -> Result<Vec<Combination>> {
    let n = sites.len();
    if n == 0 {
        return Ok(Vec::new());
    }
    if n > limit {
        return Err(LocatorError::TooManySites { count: n, limit });
    }

    let mut combinations = Vec::new();
    let subset_count = 1u64 << n;

    for mask in 1..subset_count {
        let mut members = Vec::new();
        let mut total_capacity = 0.0;
        let mut total_fixed_cost = 0.0;

        for (j, site) in sites.iter().enumerate() {
            if mask & (1u64 << j) != 0 {
                members.push(site.name.clone());
                total_capacity += site.capacity;
                total_fixed_cost += site.fixed_cost;
            }
        }

        if total_capacity >= demand {
            let description = describe_subset(sites, &members);
            combinations.push(Combination {
                members,
                description,
                total_capacity,
                total_fixed_cost,
            });
        }
    }

    Ok(combinations)
}

/// "all sites" for the full list, otherwise the excluded sites in their
/// original list order.
fn describe_subset(sites: &[Site], members: &[String]) -> String {
    if members.len() == sites.len() {
        return ALL_SITES_DESCRIPTION.to_string();
    }

    let excluded: Vec<&str> = sites
        .iter()
        .filter(|site| !members.contains(&site.name))
        .map(|site| site.name.as_str())
        .collect();

    format!("all except {}", excluded.join(", "))
}
