mod commands;
mod logging;
mod progress;

use std::io::{self, IsTerminal, Write};

use anyhow::Context;
use clap::Parser;
use colored::*;
use commands::{Cli, Commands};
use dotenv::dotenv;
use progress::CliReporter;
use tracing::{info, warn};
use userlib_cleaner_core::{AppConfig, CleanerEngine, RunResult};

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let args = Cli::parse();
    let config = userlib_cleaner_core::config::load_configuration(&args.run.overrides());

    let verbose = config
        .as_ref()
        .map(|c| c.verbose)
        .unwrap_or(args.run.verbose);
    let _guard = logging::init_logger(verbose);

    let mut config = config.context("Error loading configuration")?;

    match args.command {
        Some(Commands::Process) | None => {
            if config.clean && !args.run.yes && io::stdin().is_terminal() {
                let question = format!("Remove duplicate JARs from '{}'?", config.target);
                if !prompt_confirm(&question, Some(true))? {
                    warn!("Not confirmed, running without --clean");
                    config.clean = false;
                }
            }
            run_process(config)?;
        }
        Some(Commands::List) => run_list(config)?,
        Some(Commands::PrintConfig) => {
            let rendered =
                toml::to_string_pretty(&config).context("Unable to render configuration")?;
            println!("{}", rendered);
        }
    }

    Ok(())
}

fn run_process(config: AppConfig) -> anyhow::Result<()> {
    let engine = CleanerEngine::new(config);
    let reporter = CliReporter::new();
    let result = engine.run(&reporter)?;
    print_summary(&result);
    Ok(())
}

fn print_summary(result: &RunResult) {
    info!(
        "Parse: {:.2}s, Resolve: {:.2}s, Clean: {:.2}s",
        result.inspect_duration.as_secs_f64(),
        result.resolve_duration.as_secs_f64(),
        result.cleanup_duration.as_secs_f64(),
    );
    info!(
        "{} JARs, {} packages, {} unresolved",
        result.archives_scanned, result.packages, result.unresolved,
    );

    let count = result.cleanup.duplicates;
    if result.destructive {
        info!("Total files removed: {}", count);
        if result.cleanup.failed > 0 {
            warn!("{} file(s) could not be removed", result.cleanup.failed);
        }
    } else {
        info!("Would have removed: {} files", count);
        info!("Use --clean to actually remove above file(s)");
    }
}

fn run_list(config: AppConfig) -> anyhow::Result<()> {
    let engine = CleanerEngine::new(config);
    let reporter = CliReporter::new();
    let inspection = engine.inspect(&reporter)?;

    for record in &inspection.records {
        println!(
            "{}  {}  {} {}",
            record.file_name.bold(),
            record.package_identity.cyan(),
            record.version,
            format!("({})", record.version_number).dimmed(),
        );
        if let Some(name) = &record.display_name {
            println!("    name:    {}", name);
        }
        if let Some(vendor) = &record.vendor {
            println!("    vendor:  {}", vendor);
        }
        if let Some(license) = &record.license {
            println!("    license: {}", license);
        }
    }
    if inspection.unresolved > 0 {
        warn!("{} JAR(s) could not be resolved", inspection.unresolved);
    }

    Ok(())
}

fn prompt_confirm(prompt: &str, default: Option<bool>) -> io::Result<bool> {
    let mut input = String::new();

    loop {
        input.clear();

        match default {
            Some(true) => print!("{} (Y/n): ", prompt),
            Some(false) | None => print!("{} (y/N): ", prompt),
        }
        io::stdout().flush()?;

        io::stdin().read_line(&mut input)?;

        match input.trim().to_uppercase().as_str() {
            "Y" => return Ok(true),
            "N" => return Ok(false),
            "" => match default {
                Some(default) => return Ok(default),
                None => continue,
            },
            _ => continue,
        }
    }
}
