mod config;
mod routes;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env()?;
    let addr = config.leptos.site_addr;
    let app = routes::app(&config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, assets = %config.assets_dir.display(), "cheeky-roots listening");
    axum::serve(listener, app).await?;
    Ok(())
}
