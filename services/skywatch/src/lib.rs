//! Skywatch - Host service for the drone monitoring dashboard
//!
//! Serves the single-page application shell and its compiled bundle.

pub mod config;
pub mod document;
pub mod error;
pub mod server;

pub use config::{load_config, Config};
pub use error::{Result, SkywatchError};

use std::net::SocketAddr;

use skywatch_app::RouteTable;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::server::{build_router, HostState};

/// Run the host service with the given configuration until Ctrl-C
pub async fn run(config: Config) -> Result<()> {
    let cancel = CancellationToken::new();

    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
            return;
        }
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        SkywatchError::Server(format!(
            "Failed to bind to port {}: {}",
            config.server.port, e
        ))
    })?;

    serve(listener, config, cancel).await
}

/// Serve on an already bound listener until `cancel` fires
pub async fn serve(listener: TcpListener, config: Config, cancel: CancellationToken) -> Result<()> {
    config.validate()?;

    let routes = RouteTable::drone_dashboard()?;
    tracing::debug!("Route table: {:?}", routes.names().collect::<Vec<_>>());

    let state = HostState::new(&config, routes);
    let router = build_router(state, &config.server.site_root);

    let addr = listener.local_addr()?;
    tracing::info!("Skywatch listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await?;

    tracing::info!("Skywatch stopped");
    Ok(())
}
