use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crisp_formulator::catalog::IngredientCatalog;
use crisp_formulator::cli::{Cli, Command};
use crisp_formulator::config::Settings;
use crisp_formulator::error::{FormulaError, Result};
use crisp_formulator::interface::{
    display_catalog, display_comparison, display_simulation, display_versions, prompt_formula,
    prompt_select_versions, prompt_version_name, prompt_yes_no,
};
use crisp_formulator::models::FormulaSnapshot;
use crisp_formulator::simulator::Simulator;
use crisp_formulator::store::{compare_versions, load_formula, load_ingredients, JsonFileStore, VersionStore};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "crisp_formulator=debug"
    } else {
        "crisp_formulator=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref(), cli.profile)?;
    let catalog = match &cli.catalog {
        Some(path) => IngredientCatalog::from_ingredients(load_ingredients(path)?)?,
        None => IngredientCatalog::builtin(),
    };
    let simulator = Simulator::new(catalog, settings);

    match cli.command.unwrap_or_default() {
        Command::Simulate { formula, save } => cmd_simulate(&simulator, &cli.store, formula, save),
        Command::Compare { names, csv } => cmd_compare(&cli.store, names, csv.as_deref()),
        Command::List => cmd_list(&cli.store),
        Command::Catalog => {
            display_catalog(simulator.catalog(), simulator.moisture());
            Ok(())
        }
    }
}

/// Run one formula and optionally save the result as a version.
fn cmd_simulate(
    simulator: &Simulator,
    store_path: &Path,
    formula_path: Option<PathBuf>,
    save_as: Option<String>,
) -> Result<()> {
    let formula = match formula_path {
        Some(path) => match load_formula(&path, simulator.catalog()) {
            Ok(f) => f,
            Err(FormulaError::UnknownIngredient(name)) => {
                if let Some(hint) = simulator.catalog().closest_match(&name) {
                    eprintln!("Did you mean '{}'?", hint);
                }
                return Err(FormulaError::UnknownIngredient(name));
            }
            Err(e) => return Err(e),
        },
        None => prompt_formula(simulator.catalog())?,
    };

    let result = simulator.run(&formula)?;
    println!("Advisory profile: {:?}", simulator.settings().profile);
    display_simulation(&result);

    let name = match save_as {
        Some(name) => Some(name),
        None if interactive_save_wanted()? => Some(prompt_version_name()?),
        None => None,
    };

    if let Some(name) = name {
        let mut store = JsonFileStore::open(store_path)?;
        store.put(FormulaSnapshot::new(&name, result))?;
        println!(
            "Saved version '{}' to {} ({} total).",
            name,
            store.path().display(),
            store.len()
        );
    }

    Ok(())
}

fn interactive_save_wanted() -> Result<bool> {
    prompt_yes_no("Save this version?", false)
}

/// Compare saved versions; needs at least two.
fn cmd_compare(store_path: &Path, names: Vec<String>, csv: Option<&Path>) -> Result<()> {
    let store = JsonFileStore::open(store_path)?;
    if store.len() < 2 {
        println!("At least two saved versions are needed to compare ({} saved).", store.len());
        return Ok(());
    }

    let names = if names.is_empty() {
        prompt_select_versions(&store.names())?
    } else {
        names
    };

    let comparison = compare_versions(&store, &names)?;
    if comparison.versions.len() < 2 {
        println!("Select at least two different versions to compare.");
        return Ok(());
    }

    display_comparison(&comparison);

    if let Some(path) = csv {
        comparison.write_csv(path)?;
        println!("Wrote comparison to {}", path.display());
    }

    Ok(())
}

fn cmd_list(store_path: &Path) -> Result<()> {
    let store = JsonFileStore::open(store_path)?;
    display_versions(&store);
    Ok(())
}
