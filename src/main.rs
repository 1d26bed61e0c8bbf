use anyhow::Context;
use clap::Parser;
use pdf_expert::utils::logger;
use pdf_expert::{build_router, serve, AppState, CliArgs, Metrics, PdfExtractor, StagingArea};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration validation failed: {}", e);
            std::process::exit(2);
        }
    };

    logger::init_logger(config.env);
    tracing::info!("Starting pdf-expert v{}", env!("CARGO_PKG_VERSION"));
    tracing::debug!("Server config: {:?}", config);

    let staging = StagingArea::new(&config.temp_folder);
    staging.ensure_dir().with_context(|| {
        format!(
            "failed to create staging directory {}",
            config.temp_folder.display()
        )
    })?;

    let metrics = Arc::new(Metrics::new().context("failed to register metrics")?);
    let state = AppState::new(PdfExtractor::new(), staging, metrics);
    let router = build_router(state, config.max_upload_bytes());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;

    tracing::info!("✅ Listening on http://{}", addr);
    tracing::info!("📁 Staging uploads in {}", config.temp_folder.display());

    serve(listener, router, shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
