mod cli;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pngpress_core::{
    create_notifier, load_config, validate_config, BatchConverter, Notifier, WebpCodec,
};

use cli::Args;

/// Environment variable naming the config file
const CONFIG_ENV: &str = "PNGPRESS_CONFIG";

/// Config file picked up from the working directory when present
const DEFAULT_CONFIG_FILE: &str = "pngpress.toml";

/// Exit code when either run log has entries
const ISSUES_EXIT_CODE: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(e) => {
            error!("Fatal error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config_path = resolve_config_path(args.config.clone());
    match &config_path {
        Some(path) => info!("Loading configuration from {:?}", path),
        None => info!("No config file, using defaults and environment"),
    }

    let mut config = load_config(config_path.as_deref())
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;
    args.apply(&mut config);
    validate_config(&config).context("Configuration validation failed")?;

    let notifier: Arc<dyn Notifier> =
        Arc::from(create_notifier(&config.notifier).context("Failed to create notifier")?);
    info!("Using notifier: {}", notifier.method_name());

    let codec = Arc::new(WebpCodec::new());
    let converter = BatchConverter::new(config.batch.clone(), codec).with_notifier(notifier);

    let report = converter.run().await.context("Batch conversion failed")?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    }

    if report.has_issues() && config.notifier.fail_on_issues {
        return Ok(ExitCode::from(ISSUES_EXIT_CODE));
    }
    Ok(ExitCode::SUCCESS)
}

/// `--config`, then `PNGPRESS_CONFIG`, then `pngpress.toml` if it exists.
fn resolve_config_path(flag: Option<PathBuf>) -> Option<PathBuf> {
    flag.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
        .or_else(|| {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            default.is_file().then_some(default)
        })
}
