pub mod balance;
pub mod combinations;
pub mod constants;

pub use balance::{balance_demand, BalancedTable};
pub use combinations::{generate_combinations, generate_combinations_with_limit};
pub use constants::*;
