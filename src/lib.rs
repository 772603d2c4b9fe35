pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod solver;
pub mod state;

pub use error::{LocatorError, Result};
pub use models::{BalancedCustomer, Combination, Customer, Site};
