pub mod api;
pub mod dashboards;
pub mod routes;
pub mod shared;
pub mod system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use axum::middleware;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};

    system::tracing::initialize()?;

    // Load config.toml (or the embedded default)
    let config = shared::config::initialize_config()?;

    // Fixtures are read once; every request works on this snapshot
    shared::data::fixtures::initialize_fixtures(&config.fixtures)
        .map_err(|e| anyhow::anyhow!("fixtures init failed: {e}"))?;

    match config.campaign.reference_date {
        Some(date) => tracing::info!("Reference date pinned to {}", date),
        None => tracing::info!("Reference date follows the local clock"),
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = routes::configure_routes()
        .layer(middleware::from_fn(system::middleware::request_logger))
        .layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Backend listening on http://{}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
