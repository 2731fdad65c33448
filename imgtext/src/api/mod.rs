//! Local HTTP front door.
//!
//! Emulates the API Gateway proxy integration in front of the Lambda so the
//! function can be driven with plain HTTP during development.

mod extractors;
mod handlers;
mod routes;
mod state;

pub use extractors::{inbound_from_parts, GatewayEvent};
pub use routes::create_router;
pub use state::AppState;

use tracing::info;

use crate::config::ServerConfig;
use crate::error::Result;
use crate::handler::RequestHandler;

pub async fn serve(config: &ServerConfig, handler: RequestHandler) -> Result<()> {
    let app = create_router(AppState::new(handler));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("imgtext starting on http://{}", addr);
    info!("  Try: curl -H 's3_url: https://<bucket>.s3.amazonaws.com/<key>' http://{}/", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
