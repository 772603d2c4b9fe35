mod persistence;
mod scenario;

pub use persistence::{load_scenario, save_scenario, write_combinations_csv, write_costs_csv};
pub use scenario::Scenario;
