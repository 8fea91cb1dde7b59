#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up BACKEND_BASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    // Initialize configuration (this loads the config singleton)
    let config = soporte_api::config::config();

    tracing_subscriber::fmt::init();
    tracing::info!("Starting Soporte API in {:?} mode", config.environment);

    soporte_api::routes::serve(None).await
}
