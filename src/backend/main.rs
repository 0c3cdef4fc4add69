/**
 * Bookshelf Server Entry Point
 *
 * Initializes tracing, loads configuration and serves the Axum app.
 */

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = bookshelf::backend::server::config::load_config();
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));

    let app = bookshelf::backend::server::create_app(config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on port {}", listener.local_addr()?.port());
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("Server requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin bookshelf-server --features ssr");
    std::process::exit(1);
}
