use serde::{Deserialize, Serialize};

/// Company context used only for display text around the tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataContext {
    pub company_name: String,
    pub main_warehouse_location: String,
    pub product: String,
}

impl Default for DataContext {
    fn default() -> Self {
        Self {
            company_name: "Good Tire, Inc.".to_string(),
            main_warehouse_location: "Akron, Ohio".to_string(),
            product: "tires".to_string(),
        }
    }
}
