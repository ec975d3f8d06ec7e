use clap::Parser;
use eyre::{Context, Result};
use log::{debug, info, warn};
use tokio::io::BufReader;

use reviewgate::ReviewGate;
use reviewgate::cli::Cli;
use reviewgate::config::Config;

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > RUST_LOG > WARN
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log::LevelFilter::Warn).parse_default_env();

    if let Some(s) = cli_log_level.or(config_log_level) {
        match s.parse::<log::LevelFilter>() {
            Ok(level) => {
                builder.filter_level(level);
            }
            Err(_) => eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", s),
        }
    }

    // stdout carries the gate protocol, so diagnostics stay on stderr
    builder.target(env_logger::Target::Stderr).try_init()?;
    Ok(())
}

/// Resolves on Ctrl-C; never resolves if the handler cannot be installed
async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C, interrupts will not be handled: {}", e);
        std::future::pending::<()>().await;
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = match Config::load(cli.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            warn!("{:#}; using defaults", e);
            Config::default()
        }
    };

    info!("review-gate starting");
    debug!("completion keywords: {:?}", config.keywords);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    let reason = runtime.block_on(async {
        let reader = BufReader::new(tokio::io::stdin());
        let mut gate = ReviewGate::new(reader, std::io::stdout(), config.keywords());
        gate.run(interrupted()).await
    });

    // The stdin reader may still be parked in a blocking read; don't wait on it
    runtime.shutdown_background();

    info!("review-gate exited: {:?}", reason);
    Ok(())
}
