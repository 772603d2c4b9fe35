pub mod prompts;
pub mod render;

pub use prompts::{
    collect_customers, collect_sites, prompt_context, prompt_customer, prompt_site,
    prompt_site_name, prompt_yes_no,
};
pub use render::{
    display_combinations, display_cost_matrix, display_cost_summary, display_deficit_warning,
    display_infeasible, display_shipment_plan,
};
