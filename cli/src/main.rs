//! CLI entrypoint for oathwright
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::Result;
use clap::Parser;
use oath_application::{GenerateCopyInput, GenerateCopyUseCase};
use oath_infrastructure::{BackendSettings, ConfigLoader, build_generator};
use oath_presentation::{Cli, ConsoleFormatter, FormPrompter, FormSeeds, GenerationSpinner, OutputFormat};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };
    config.validate()?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    // Resolve credentials and build the backend adapter
    let settings = BackendSettings::from_config(&config)?;
    info!(
        "Using {} backend with model {}",
        settings.kind, settings.model
    );

    // Collect the brief (CLI flags first, then interactive prompts)
    let seeds = FormSeeds {
        brand_name: cli.brand,
        description: cli.describe,
        oblivious: cli.oblivious,
        apathetic: cli.apathetic,
        thinking: cli.thinking,
        hurting: cli.hurting,
    };
    let brief = FormPrompter::collect(seeds)?;

    // === Dependency Injection ===
    let generator = build_generator(&settings);
    let use_case = GenerateCopyUseCase::new(generator).with_policy(config.retry.to_policy());

    let spinner = GenerationSpinner::start(cli.quiet);
    let result = use_case.execute(GenerateCopyInput::new(brief)).await;
    spinner.finish();

    let copy = match result {
        Ok(copy) => copy,
        Err(e) => {
            // Cause goes to the log; the user sees a generic message
            error!("copy generation failed: {:#}", anyhow::Error::new(e));
            eprintln!("{}", ConsoleFormatter::format_error());
            std::process::exit(1);
        }
    };

    let format = cli.output.unwrap_or(match config.output.format {
        Some(oath_domain::OutputFormat::Json) => OutputFormat::Json,
        _ => OutputFormat::Text,
    });

    let output = match format {
        OutputFormat::Text => ConsoleFormatter::format(&copy),
        OutputFormat::Json => ConsoleFormatter::format_json(&copy),
    };

    println!("{}", output);

    Ok(())
}
