use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

mod cli;
mod config;

use cli::Cli;
use cli::commands::Commands;
use config::Config;

use tbxmeta::meta::Generator;
use tbxmeta::portal::PortalProfile;

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tbxmeta")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("tbxmeta.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn generator_from(config: &Config) -> Generator {
    Generator {
        esri: config.esri.clone(),
        dates: config.dates.clone(),
        contact: config.contact.clone(),
        profile: config
            .portal
            .clone()
            .map(|p| Box::new(p) as Box<dyn PortalProfile>),
    }
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        Commands::Generate { source, overwrite } => {
            handle_generate(source, *overwrite, config)
        }
        Commands::Inspect { source } => handle_inspect(source, config),
    }
}

fn handle_generate(source: &Path, overwrite: bool, config: &Config) -> Result<()> {
    info!(
        "Generating metadata for {} (overwrite: {})",
        source.display(),
        overwrite
    );
    let report = generator_from(config)
        .generate(source, overwrite)
        .wrap_err_with(|| format!("Failed to generate metadata for {}", source.display()))?;

    for path in &report.written {
        println!("{} {}", "Wrote:".green(), path.display());
    }
    for path in &report.skipped {
        println!("{} {}", "Skipped:".yellow(), path.display());
    }
    println!(
        "{} {} written, {} skipped",
        "Done:".green(),
        report.written.len(),
        report.skipped.len()
    );
    Ok(())
}

fn handle_inspect(source: &Path, config: &Config) -> Result<()> {
    info!("Inspecting metadata for {}", source.display());
    let documents = generator_from(config)
        .render(source)
        .wrap_err_with(|| format!("Failed to resolve metadata for {}", source.display()))?;

    for (path, xml) in documents {
        println!("{} {}", "Document:".cyan(), path.display());
        println!("{}", xml);
        println!();
    }
    Ok(())
}

fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
