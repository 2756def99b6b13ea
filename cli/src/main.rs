//! CLI entrypoint for blindset
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod args;

use anyhow::{Result, bail};
use args::Cli;
use blindset_application::AssembleDatasetUseCase;
use blindset_domain::{EVALUATOR_COUNT, EvaluatorId};
use blindset_infrastructure::{ConfigLoader, JsonAssignmentSink, JsonItemSource};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
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

    // Load configuration, then layer CLI flags on top
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    let mut params = config.curation_params()?;
    if let Some(seed) = cli.seed {
        params.seed = Some(seed);
    }
    if !cli.evaluator.is_empty() {
        if cli.evaluator.len() != EVALUATOR_COUNT {
            bail!(
                "expected exactly {EVALUATOR_COUNT} evaluators, got {}",
                cli.evaluator.len()
            );
        }
        params.evaluators = cli
            .evaluator
            .iter()
            .map(|name| {
                EvaluatorId::try_new(name.clone())
                    .ok_or_else(|| anyhow::anyhow!("evaluator name must not be empty"))
            })
            .collect::<Result<Vec<_>, _>>()?;
    }

    info!(input = %cli.input.display(), out = %cli.out.display(), "starting curation run");

    // === Dependency Injection ===
    let source = JsonItemSource::new(&cli.input);
    let sink = JsonAssignmentSink::new(&cli.out, config.output.pretty);
    let use_case = AssembleDatasetUseCase::new(source, sink);

    let summary = use_case.execute(&params)?;

    if !cli.quiet {
        println!();
        println!("+============================================================+");
        println!("|           Blindset - Evaluation Run Assembly               |");
        println!("+============================================================+");
        println!();
        println!("Document:   {}", summary.source_id);
        println!("Seed:       {}", summary.seed);
        println!("Rows:       {}", summary.row_count);
        println!(
            "Evaluators: {}",
            params
                .evaluators
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!("Output:     {}", cli.out.display());
        println!();

        if summary.warnings.is_empty() {
            println!("No residual same-question adjacencies.");
        } else {
            println!(
                "{} residual same-question adjacencies (see manifest.json):",
                summary.warnings.len()
            );
            for warning in &summary.warnings {
                println!(
                    "  {} position {} ({})",
                    warning.evaluator, warning.position, warning.question
                );
            }
        }
    }

    Ok(())
}
