use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::engine::constants::ALL_CATEGORIES;

/// Macrave: pick the best fast-food menu items for your fitness goal.
#[derive(Parser, Debug)]
#[command(name = "macrave")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the menu catalog (JSON or CSV rows).
    #[arg(short, long, env = "MACRAVE_CATALOG", default_value = "fastfood_items.json")]
    pub catalog: PathBuf,

    /// Path to the session/account JSON file.
    #[arg(short, long, env = "MACRAVE_SESSION", default_value = "macrave_session.json")]
    pub session: PathBuf,

    /// Optional JSON file overriding the scoring weights.
    #[arg(short, long, env = "MACRAVE_WEIGHTS")]
    pub weights: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every restaurant in the catalog.
    Restaurants,

    /// Show a restaurant's menu.
    Menu {
        restaurant: String,

        /// Only show items in this category.
        #[arg(long, default_value = ALL_CATEGORIES)]
        category: String,

        /// Print `{ "items": [...] }` JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// List a restaurant's menu categories.
    Categories { restaurant: String },

    /// Show the nutrition facts of one item.
    Item { restaurant: String, name: String },

    /// Rank a restaurant's menu for a fitness goal.
    Suggest {
        restaurant: String,

        /// cutting, bulking or keto. Defaults to the logged-in user's goal.
        #[arg(short, long)]
        goal: Option<String>,

        /// Only rank items in this category.
        #[arg(long, default_value = ALL_CATEGORIES)]
        category: String,

        /// Print `{ "suggestions": [...], "runner_ups": [...] }` JSON.
        #[arg(long)]
        json: bool,

        /// Also write the ranking to a CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Top picks across all restaurants.
    Highlights {
        /// cutting, bulking or keto. Defaults to the logged-in user's goal.
        #[arg(short, long)]
        goal: Option<String>,
    },

    /// Describe the available fitness goals.
    Goals,

    /// Create an account and log in.
    Register,

    /// Log in to an existing account.
    Login,

    /// Log out.
    Logout,

    /// Show the logged-in user.
    Whoami,

    /// Change the logged-in user's fitness goal.
    SetGoal { goal: String },
}
