use clap::{CommandFactory, Parser};
use linkscan::config::{CliConfig, Config};
use linkscan::core::constants::output_formats;
use linkscan::fetch::HttpFetcher;
use linkscan::reporting::logging;
use linkscan::reporting::{
    JsonRenderer, MarkdownRenderer, RenderReport, ReportWriter, WriteReport,
};
use linkscan::ui::output;
use linkscan::ui::{Cli, Commands, ProgressReporter, cli_to_config, print_completions};
use linkscan::validation::Aggregator;

use std::path::Path;
use std::time::Instant;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Handle completion commands first
    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    // Run the main link validation logic
    match run_linkscan_logic(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle completion commands and return exit code if one was processed
fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Some(Commands::CompletionGenerate { shell }) => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(0)
        }
        None => None,
    }
}

/// Main link validation logic extracted from main() for testing
async fn run_linkscan_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    // Parse CLI arguments into CliConfig using the derive-based CLI
    let cli_config = cli_to_config(cli);

    // Load and merge configuration
    let config = load_and_merge_config(&cli_config)?;

    // Setup logging
    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);

    // Seeds come from the command line, falling back to the config file
    let seeds: Vec<String> = if cli.seeds.is_empty() {
        config.seeds.clone().unwrap_or_default()
    } else {
        cli.seeds.clone()
    };

    if seeds.is_empty() {
        eprintln!("Error: No seed URLs provided");
        eprintln!("\nFor more information, try '--help'.");
        return Ok(1);
    }

    let concurrency = config.max_concurrency();
    logging::log_config_info(&config, concurrency);
    logging::log_seed_info(&seeds);

    let verbose = config.verbose.unwrap_or(false);
    if verbose && !cli_config.quiet {
        output::display_config_info(&config, concurrency, &seeds);
    }

    // Run the pipeline
    let fetcher = HttpFetcher::from_config(&config)?;
    let aggregator = Aggregator::new(fetcher);

    let progress_enabled = !cli_config.quiet && !cli_config.no_progress;
    let mut progress = ProgressReporter::new(progress_enabled);

    let start = Instant::now();
    let report = aggregator
        .run_with_config(&seeds, &config, Some(&mut progress))
        .await;
    progress.finish_and_clear();

    logging::log_scan_complete(&report, start.elapsed().as_millis());
    if verbose {
        for page in &report.pages {
            for link_result in &page.links {
                logging::log_link_result(link_result.link.href(), &link_result.outcome);
            }
        }
    }

    // Render and write the artifact
    let format = config
        .output_format
        .as_deref()
        .unwrap_or(output_formats::DEFAULT);
    let rendered = match format {
        output_formats::JSON => JsonRenderer.render(&report)?,
        _ => MarkdownRenderer.render(&report)?,
    };

    let output_path = config.output_path().to_string();
    ReportWriter.write_to_file(Path::new(&output_path), rendered)?;

    if !cli_config.quiet {
        output::display_summary(&report, &output_path);
    }

    Ok(0)
}

/// Load config from file (or defaults) and apply CLI overrides
fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file)?
    } else {
        Config::load_from_standard_locations()
    };

    config.merge_with_cli(cli_config);
    config.validate()?;

    Ok(config)
}
