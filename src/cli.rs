use clap::{Parser, Subcommand};

/// WarehouseLocator — enumerates viable warehouse combinations and prepares
/// balanced transportation-cost tables for an external solver.
#[derive(Parser, Debug)]
#[command(name = "warehouse_locator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the scenario JSON file.
    #[arg(short, long, default_value = "scenario.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Enumerate feasible combinations and show the balanced cost table.
    Analyze,

    /// Analyze, then call the remote solver once per combination.
    Solve {
        /// Transportation solver endpoint.
        #[arg(long, default_value = "http://localhost:8000/solve-transportation/")]
        url: String,
    },

    /// Create a scenario interactively, or from the built-in example.
    Init {
        /// Use the built-in Good Tire example dataset.
        #[arg(long)]
        example: bool,
    },

    /// Edit one site's numbers (fuzzy name lookup).
    EditSite,

    /// Export tables to CSV.
    Export {
        /// Write the feasible-combinations table to this path.
        #[arg(long)]
        combinations: Option<String>,

        /// Write the balanced cost table to this path.
        #[arg(long)]
        costs: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Analyze
    }
}
