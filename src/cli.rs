use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::AdvisoryProfile;

/// Crisp formulator: per-serving nutrition and recipe advice for castella crisps.
#[derive(Parser, Debug)]
#[command(name = "crisp_formulator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the saved versions JSON file.
    #[arg(short, long, default_value = "formula_versions.json")]
    pub store: PathBuf,

    /// Advisory profile (overrides the settings file).
    #[arg(short, long, value_enum)]
    pub profile: Option<AdvisoryProfile>,

    /// Settings JSON file with profile and threshold overrides.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Ingredient catalog JSON file replacing the built-in one.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Log calculation details to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute nutrition and advice for a formula.
    Simulate {
        /// Formula JSON file (`{"ingredient": percent}`); prompts when omitted.
        #[arg(short, long)]
        formula: Option<PathBuf>,

        /// Save the result under this version name without asking.
        #[arg(long)]
        save: Option<String>,
    },

    /// Compare two or more saved versions side by side.
    Compare {
        /// Version names; prompts for a selection when omitted.
        names: Vec<String>,

        /// Also write the comparison table to a CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// List saved versions.
    List,

    /// Show the ingredient catalog.
    Catalog,
}

impl Default for Command {
    fn default() -> Self {
        Command::Simulate {
            formula: None,
            save: None,
        }
    }
}
