use warehouse_locator_rs::models::Site;
use warehouse_locator_rs::planner::{generate_combinations, generate_combinations_with_limit};
use warehouse_locator_rs::LocatorError;

fn make_site(name: &str, capacity: f64, shipping: f64, fixed: f64) -> Site {
    Site::new(name, capacity, shipping, fixed)
}

fn good_tire_sites() -> Vec<Site> {
    vec![
        make_site("Cleveland", 80.0, 0.25, 40000.0),
        make_site("Harrisburg", 60.0, 0.5, 20000.0),
        make_site("Chicago", 60.0, 0.75, 30000.0),
        make_site("Trenton", 60.0, 0.75, 25000.0),
        make_site("Louisville", 60.0, 0.75, 20000.0),
    ]
}

#[test]
fn test_subset_count_bound() {
    let sites = good_tire_sites();

    // At most 2^n - 1 non-empty subsets...
    let feasible = generate_combinations(&sites, 240.0).unwrap();
    assert!(feasible.len() <= 31);

    // ...with equality when demand is zero or negative.
    assert_eq!(generate_combinations(&sites, 0.0).unwrap().len(), 31);
    assert_eq!(generate_combinations(&sites, -5.0).unwrap().len(), 31);
}

#[test]
fn test_feasibility_never_violated() {
    let sites = good_tire_sites();
    let demand = 240.0;

    for combo in generate_combinations(&sites, demand).unwrap() {
        assert!(
            combo.total_capacity >= demand,
            "{} has capacity {} below demand",
            combo.label(),
            combo.total_capacity
        );
    }
}

#[test]
fn test_enumeration_order_is_reproducible() {
    let sites = good_tire_sites();

    let first = generate_combinations(&sites, 240.0).unwrap();
    let second = generate_combinations(&sites, 240.0).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_totals_are_member_sums() {
    let sites = good_tire_sites();

    for combo in generate_combinations(&sites, 0.0).unwrap() {
        let capacity: f64 = sites
            .iter()
            .filter(|s| combo.contains(&s.name))
            .map(|s| s.capacity)
            .sum();
        let fixed: f64 = sites
            .iter()
            .filter(|s| combo.contains(&s.name))
            .map(|s| s.fixed_cost)
            .sum();

        assert_eq!(combo.total_capacity, capacity);
        assert_eq!(combo.total_fixed_cost, fixed);
    }
}

#[test]
fn test_scenario_two_sites_demand_100() {
    let sites = vec![
        make_site("Cleveland", 80.0, 0.25, 40000.0),
        make_site("Harrisburg", 60.0, 0.5, 20000.0),
    ];

    let combos = generate_combinations(&sites, 100.0).unwrap();

    // Neither single site is feasible (80 < 100, 60 < 100); the pair is.
    assert!(combos.iter().all(|c| c.members != vec!["Cleveland"]));
    assert!(combos.iter().all(|c| c.members != vec!["Harrisburg"]));

    let pair = combos
        .iter()
        .find(|c| c.members == vec!["Cleveland", "Harrisburg"])
        .expect("the full pair must be feasible");
    assert_eq!(pair.total_capacity, 140.0);
    assert_eq!(pair.total_fixed_cost, 60000.0);
}

#[test]
fn test_scenario_no_sites() {
    let combos = generate_combinations(&[], 100.0).unwrap();
    assert!(combos.is_empty());
}

#[test]
fn test_scenario_single_site_exact_demand() {
    let sites = vec![make_site("Cleveland", 80.0, 0.25, 40000.0)];

    let combos = generate_combinations(&sites, 80.0).unwrap();
    assert_eq!(combos.len(), 1);
    assert_eq!(combos[0].description, "all sites");
    assert_eq!(combos[0].members, vec!["Cleveland"]);
}

#[test]
fn test_overflow_guard() {
    let sites: Vec<Site> = (0..30)
        .map(|i| make_site(&format!("Site{i}"), 10.0, 0.5, 1000.0))
        .collect();

    assert!(matches!(
        generate_combinations(&sites, 10.0),
        Err(LocatorError::TooManySites { count: 30, .. })
    ));

    // A raised limit accepts the same input.
    assert!(generate_combinations_with_limit(&sites[..8], 10.0, 8).is_ok());
}
