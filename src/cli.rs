use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_FILE;
use crate::models::Weekday;

/// Meal planner: assign diet-plan days to the week and build a priced shopping list.
#[derive(Parser, Debug)]
#[command(name = "meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the configuration JSON file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Directory for persisted state (overrides the config file).
    #[arg(long)]
    pub state_dir: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Upload a diet plan JSON file.
    Load {
        file: PathBuf,
    },

    /// Load the bundled two-day sample plan.
    Sample,

    /// List the day templates of the current diet plan.
    Days,

    /// Show the week plan.
    Week,

    /// Assign a day template (id or name) to a weekday.
    Assign {
        weekday: Weekday,
        day: String,
    },

    /// Remove all meals from a weekday, or the whole week.
    Clear {
        weekday: Option<Weekday>,

        #[arg(long, conflicts_with = "weekday")]
        all: bool,
    },

    /// Add an ingredient to a meal (meals are numbered from 1).
    Add {
        weekday: Weekday,
        meal: usize,
        name: String,
        quantity: String,
    },

    /// Replace an ingredient of a meal (meals and ingredients are numbered from 1).
    Substitute {
        weekday: Weekday,
        meal: usize,
        ingredient: usize,
        name: String,
        quantity: String,
    },

    /// Show the shopping list.
    List {
        /// Print the grouped list as JSON.
        #[arg(long)]
        json: bool,

        /// Show estimated prices.
        #[arg(long)]
        prices: bool,

        /// Show the days and meals each item comes from.
        #[arg(long)]
        sources: bool,
    },

    /// Mark a shopping list item as bought ("<category>:<name>").
    Check {
        key: String,
    },

    /// Unmark a shopping list item.
    Uncheck {
        key: String,
    },

    /// Mark every item as bought.
    CheckAll,

    /// Clear every checkmark.
    UncheckAll,

    /// Pick bought items interactively.
    Tick,

    /// Write the shopping list to a CSV file.
    Export {
        file: PathBuf,
    },

    /// Save the current diet plan under a name.
    Pin {
        name: String,
    },

    /// Remove a saved plan.
    Unpin {
        id: String,
    },

    /// List saved plans.
    Pinned,

    /// Switch to a saved plan.
    Use {
        id: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::List {
            json: false,
            prices: true,
            sources: false,
        }
    }
}
