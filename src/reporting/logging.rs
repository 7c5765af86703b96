use crate::config::Config;
use crate::core::types::{CheckOutcome, Report};
use log::{debug, error, info, warn};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config, actual_concurrency: usize) {
    let timeout = config.timeout.unwrap_or(10);
    let retry_attempts = config.retry_attempts.unwrap_or(0);
    let retry_delay = config.retry_delay.unwrap_or(1000);
    let skip_ssl_verification = config.skip_ssl_verification.unwrap_or(false);

    info!("Configuration: concurrency={actual_concurrency}, timeout={timeout}s");
    info!("Retry: attempts={retry_attempts}, delay={retry_delay}ms");
    info!("HTTP: skip_ssl={skip_ssl_verification}");
}

/// Log the seed pages about to be scanned
pub fn log_seed_info(seeds: &[String]) {
    info!("Scanning {} seed page(s)", seeds.len());
    for (i, seed) in seeds.iter().enumerate() {
        debug!("  {}. {seed}", i + 1);
    }
}

/// Log scan completion
pub fn log_scan_complete(report: &Report, duration_ms: u128) {
    let pages = report.pages.len();
    let links = report.total_links();
    let broken = report.broken_links().len();

    if broken == 0 {
        info!("✅ Scan complete: {pages} page(s), {links} link(s) checked ({duration_ms}ms)");
    } else {
        warn!(
            "❌ Scan complete: {pages} page(s), {links} link(s) checked, {broken} broken ({duration_ms}ms)"
        );
    }
}

/// Log individual link results for debugging
pub fn log_link_result(url: &str, outcome: &CheckOutcome) {
    match outcome {
        CheckOutcome::Status { code } => debug!("✓ {url} -> {code}"),
        CheckOutcome::Failed { failure } => debug!("✗ {url} -> {failure}"),
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
