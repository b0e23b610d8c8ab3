/**
 * Socialite Server Entry Point
 *
 * Loads `.env`, initializes tracing, reads `ServerConfig` from the
 * environment and serves the Axum app on `0.0.0.0:PORT`.
 */

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use socialite::backend::server::{create_app, ServerConfig};

    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!(
        "Configuration loaded (database: {}, uploads: {})",
        if config.database_url.is_some() { "postgres" } else { "in-memory" },
        config.upload_dir.display()
    );

    let app = create_app(&config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server Port: {}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("Server requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin socialite-server --features ssr");
    std::process::exit(1);
}
