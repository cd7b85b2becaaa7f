use std::sync::Arc;

use campaign_mailer::campaign::Campaign;
use campaign_mailer::config::Config;
use campaign_mailer::delivery::{Mailer, SendGridMailer};
use campaign_mailer::server::mailer_routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = Config::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!("  export SENDGRID_API_KEY=SG....");
        std::process::exit(1);
    });

    eprintln!("📬 Campaign Mailer v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   From: {}", config.from_address);
    eprintln!("   Template: {}", config.template_path.display());
    eprintln!("   Provider: {}", config.api_base);
    eprintln!("   Upload: http://0.0.0.0:{}/send-emails\n", config.port);

    if !config.template_path.exists() {
        tracing::warn!(
            path = %config.template_path.display(),
            "Email template not found; batches with valid addresses will fail"
        );
    }

    let mailer: Arc<dyn Mailer> = Arc::new(SendGridMailer::new(&config)?);
    let campaign = Arc::new(Campaign::from_config(&config, mailer));
    let app = mailer_routes(campaign, config.max_upload_bytes);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = config.port, "Mailer HTTP server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Mailer HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
