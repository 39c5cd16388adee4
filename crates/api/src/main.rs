use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use tutuu_ai_core::config::Settings;
use tutuu_ai_core::insight::fixture::FixtureEngine;

mod app;
mod error;
mod extract;
mod handlers;
mod middleware;
mod telemetry;

#[derive(Debug, Parser)]
#[command(name = "ai-service", version)]
struct Args {
    /// Bind address. Overrides HOST.
    #[arg(long)]
    host: Option<String>,

    /// Listening port. Overrides PORT.
    #[arg(long)]
    port: Option<u16>,

    /// Log file appended alongside stdout. Overrides LOG_FILE.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let settings = Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    telemetry::init(&telemetry::LogConfig {
        file: args.log_file.or_else(|| settings.log_file.as_ref().map(PathBuf::from)),
        ..Default::default()
    })?;

    let state = app::AppState::new(Arc::new(FixtureEngine::new()), settings.deployment_mode);
    let router = app::build_router(state);

    let host = args.host.unwrap_or(settings.host);
    let port = args.port.unwrap_or(settings.port);
    let addr = format!("{host}:{port}");

    tracing::info!(
        %addr,
        mode = %settings.deployment_mode,
        "ai-service listening"
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}

fn init_sentry(settings: &Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
