use serde::{Deserialize, Serialize};

use crate::models::{Customer, DataContext, Site};

/// A complete planning scenario: company context, candidate sites, and
/// customer demands. The working set for every computation; the transforms
/// themselves never mutate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub context: DataContext,

    #[serde(default)]
    pub sites: Vec<Site>,

    #[serde(default)]
    pub customers: Vec<Customer>,
}

impl Scenario {
    pub fn new(context: DataContext) -> Self {
        Self {
            context,
            sites: Vec::new(),
            customers: Vec::new(),
        }
    }

    /// The textbook Good Tire dataset: 5 candidate sites, 10 wholesale
    /// customers.
    pub fn example() -> Self {
        let sites = vec![
            Site::new("Cleveland", 80.0, 0.25, 40000.0),
            Site::new("Harrisburg", 60.0, 0.5, 20000.0),
            Site::new("Chicago", 60.0, 0.75, 30000.0),
            Site::new("Trenton", 60.0, 0.75, 25000.0),
            Site::new("Louisville", 60.0, 0.75, 20000.0),
        ];

        let rows: [(&str, [f64; 5], f64); 10] = [
            ("Cleveland", [0.25, 0.63, 1.75, 2.13, 1.75], 30.0),
            ("Cincinnati", [1.25, 1.5, 1.5, 2.75, 0.5], 20.0),
            ("Dayton", [0.75, 1.38, 1.38, 2.38, 1.0], 18.0),
            ("Indianapolis", [1.63, 1.75, 1.0, 3.5, 0.5], 16.0),
            ("Chicago", [1.75, 2.38, 0.25, 3.88, 1.5], 38.0),
            ("Buffalo", [1.0, 1.13, 2.75, 1.88, 2.75], 22.0),
            ("Pittsburgh", [0.63, 0.88, 2.38, 1.75, 2.0], 27.0),
            ("Philadelphia", [2.13, 0.63, 3.88, 0.5, 3.5], 32.0),
            ("Nashville", [2.63, 2.88, 2.38, 4.25, 0.88], 19.0),
            ("Boston", [3.25, 2.75, 5.0, 1.25, 4.88], 26.0),
        ];

        let customers = rows
            .into_iter()
            .map(|(name, costs, demand)| {
                let mut customer = Customer::new(name, demand);
                for (site, cost) in sites.iter().zip(costs) {
                    customer.unit_costs.insert(site.name.clone(), cost);
                }
                customer
            })
            .collect();

        Self {
            context: DataContext::default(),
            sites,
            customers,
        }
    }

    /// Sum of customer demand.
    pub fn total_demand(&self) -> f64 {
        self.customers.iter().map(|c| c.demand).sum()
    }

    /// Sum of site capacity.
    pub fn total_capacity(&self) -> f64 {
        self.sites.iter().map(|s| s.capacity).sum()
    }

    /// At least one fully-valid site entered.
    pub fn has_valid_sites(&self) -> bool {
        self.sites.iter().any(Site::is_valid)
    }

    /// At least one fully-valid customer entered.
    pub fn has_valid_customers(&self) -> bool {
        self.customers.iter().any(Customer::is_valid)
    }

    /// Look up a site by name (case-insensitive).
    pub fn site(&self, name: &str) -> Option<&Site> {
        let key = name.to_lowercase();
        self.sites.iter().find(|s| s.key() == key)
    }

    /// Mutable site lookup (case-insensitive).
    pub fn site_mut(&mut self, name: &str) -> Option<&mut Site> {
        let key = name.to_lowercase();
        self.sites.iter_mut().find(|s| s.key() == key)
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new(DataContext::default())
    }
}
