use notification_service::config::NotificationConfig;
use notification_service::startup::Application;
use service_core::observability::init_tracing;
use service_core::utils::process_start;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    process_start();

    let config = NotificationConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        "notification-service",
        &config.log_level,
        config.otlp_endpoint.as_deref(),
    );

    let application = Application::build(config).await?;
    application.run_until_stopped().await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
