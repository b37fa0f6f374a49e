use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use warehouse_core::VERSION;

/// Warehouse - track incoming stock and outgoing shipments
#[derive(Parser)]
#[command(name = "warehouse")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the warehouse save file
    #[arg(short, long, global = true, env = "WAREHOUSE_FILE")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add an incoming item to the inventory stack
    Add(ItemArgs),

    /// Move units from inventory into the shipping queue
    Process(ItemArgs),

    /// Ship units out of the shipping queue
    Ship(ItemArgs),

    /// Show the most recent incoming item
    Last(OutputArgs),

    /// Show the next item to ship
    Next(OutputArgs),

    /// Show inventory and shipping queue
    View(ViewArgs),

    /// Remove one unit of an item (inventory first, then shipping)
    Remove(NameArgs),

    /// Search for an item (inventory first, then shipping)
    Search(NameArgs),

    /// Count all units in the system
    Count(OutputArgs),

    /// Rename and requantify an item
    Update(UpdateArgs),

    /// Run the interactive menu (default)
    Menu,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

/// Arguments for commands that take an item name and a quantity
#[derive(Args)]
pub struct ItemArgs {
    /// Item name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Quantity (positive integer)
    #[arg(value_name = "QTY", allow_hyphen_values = true)]
    pub quantity: String,
}

/// Arguments for commands that take only an item name
#[derive(Args)]
pub struct NameArgs {
    /// Item name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `update` command
#[derive(Args)]
pub struct UpdateArgs {
    /// Current item name
    #[arg(value_name = "OLD_NAME")]
    pub old_name: String,

    /// New item name
    #[arg(value_name = "NEW_NAME")]
    pub new_name: String,

    /// New quantity (positive integer)
    #[arg(value_name = "QTY", allow_hyphen_values = true)]
    pub quantity: String,
}

/// Arguments for read-only commands
#[derive(Args)]
pub struct OutputArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `view` command
#[derive(Args)]
pub struct ViewArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}
