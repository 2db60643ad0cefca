//! MediScan - Main CLI Entry Point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use mediscan::cli::{Args, Commands, Verbosity};
use mediscan::config::Config;
use mediscan::screens::{App, Display};
use mediscan::{catalog, resolver};

fn main() -> Result<()> {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match &args.command {
        Some(Commands::Check { symptoms, json }) => run_check(symptoms, *json, args.verbosity()),
        Some(Commands::Catalog { region }) => run_catalog(region.as_deref()),
        Some(Commands::Config) => show_config(&config, args.config.is_some()),
        Some(Commands::Start) | None => run_interactive(config, args.verbosity()),
    }
}

/// Start the interactive screen loop. Ctrl-C at any prompt is a quiet exit,
/// not a failure.
fn run_interactive(config: Config, verbosity: Verbosity) -> Result<()> {
    let mut app = App::new(config, verbosity)?;

    match app.run() {
        Ok(()) => Ok(()),
        Err(err) if err.is_interrupt() => {
            println!("{}", "Goodbye!".green());
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// One-shot diagnosis resolution for scripting.
fn run_check(symptoms: &[String], json: bool, verbosity: Verbosity) -> Result<()> {
    let diagnoses = resolver::resolve(symptoms);

    if json {
        println!("{}", serde_json::to_string_pretty(&diagnoses)?);
        return Ok(());
    }

    let display = Display::new(verbosity);
    if !symptoms.is_empty() {
        display.show_hint("Based on your selected symptoms:");
        for symptom in symptoms {
            display.show_bullet(symptom);
        }
    }

    for diagnosis in &diagnoses {
        display.show_diagnosis(diagnosis);
    }
    println!();
    Ok(())
}

/// List body regions, or the symptoms of one region.
fn run_catalog(region: Option<&str>) -> Result<()> {
    match region {
        None => {
            for region in catalog::BODY_REGIONS {
                println!("{}", region);
            }
            Ok(())
        }
        Some(region) => {
            let symptoms = catalog::symptoms_for(region);
            if symptoms.is_empty() {
                anyhow::bail!("unknown body region: {}", region);
            }
            for symptom in symptoms {
                println!("{}", symptom);
            }
            Ok(())
        }
    }
}

/// Print the resolved configuration and where it came from.
fn show_config(config: &Config, from_override: bool) -> Result<()> {
    if !from_override {
        println!("# {}", Config::config_path()?.display());
    }
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
