use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "atlas")]
#[command(about = "Browse, filter and report on a country catalog from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the countries dataset (overrides the configured one)
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List countries matching the given filters
    #[command(alias = "ls")]
    List {
        /// Substring match on the country name
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by region (Africa, Asia, Europe, Oceania, Americas)
        #[arg(short, long)]
        region: Option<String>,

        /// Filter by language display name
        #[arg(short, long)]
        language: Option<String>,

        /// Show favorites only
        #[arg(short, long)]
        favorites: bool,
    },

    /// Show the full detail block for one country
    Show {
        /// Country common name
        name: String,
    },

    /// Toggle a country in the favorites set (requires login)
    #[command(alias = "fav")]
    Favorite {
        /// Country common name
        name: String,
    },

    /// List the favorites set
    Favorites,

    /// Toggle a country in the document list
    #[command(alias = "doc")]
    Document {
        /// Country common name
        name: String,
    },

    /// List the document list, numbered
    #[command(alias = "docs")]
    Documents {
        /// Remove the entry at this position instead of listing
        #[arg(long)]
        remove: Option<usize>,
    },

    /// Export the document list as a PDF report
    Export {
        /// Output path (defaults to document_list.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Toggle the login state
    Login,

    /// Toggle dark mode
    Theme,

    /// List the languages present in the catalog
    Languages,

    /// List the regions the filter accepts
    Regions,

    /// Show catalog, filter and storage status
    Status,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., dataset)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Interactive browse loop (the default when no command is given)
    Browse,
}
