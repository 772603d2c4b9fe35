mod combination;
mod context;
mod customer;
mod site;

pub use combination::Combination;
pub use context::DataContext;
pub use customer::{BalancedCustomer, Customer};
pub use site::Site;
