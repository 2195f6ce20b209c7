use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use payroll_engine::api::{AppState, DEFAULT_CORS_ORIGIN, build_cors_layer, create_router};
use payroll_engine::config::ConfigLoader;

/// Serve the gross-to-net payroll simulator over HTTP.
///
/// Rule sets are read from `--rules-dir` when given, otherwise the
/// embedded Bénin and Togo rules are used.
#[derive(Parser, Debug)]
#[command(name = "payroll-engine")]
#[command(version, about, long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(short, long, env = "PAYROLL_BIND", default_value = "0.0.0.0:5001")]
    bind: SocketAddr,

    /// Directory containing one YAML rule file per country
    #[arg(short, long, env = "PAYROLL_RULES_DIR")]
    rules_dir: Option<PathBuf>,

    /// Allowed CORS origin, repeatable or comma separated ("*" allows any)
    #[arg(
        long = "cors-origin",
        env = "PAYROLL_CORS_ORIGINS",
        value_delimiter = ',',
        default_value = DEFAULT_CORS_ORIGIN
    )]
    cors_origins: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let loader = match &args.rules_dir {
        Some(dir) => ConfigLoader::load(dir)
            .with_context(|| format!("Failed to load rules from: {}", dir.display()))?,
        None => ConfigLoader::builtin().context("Failed to load embedded rules")?,
    };
    let registry = loader.into_registry();

    for rule_set in registry.countries() {
        info!(
            country = rule_set.code(),
            name = rule_set.name(),
            effective_date = %rule_set.effective_date(),
            "Rule set available"
        );
    }

    let app = create_router(AppState::new(registry)).layer(build_cors_layer(&args.cors_origins));

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("Failed to bind: {}", args.bind))?;
    info!(address = %args.bind, "Payroll simulation server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
