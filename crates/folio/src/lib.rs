//! Portfolio chat relay.
//!
//! A single `POST /api/chat` endpoint that takes a visitor's conversation,
//! puts a system prompt rendered from the portfolio profile in front of it,
//! and streams the model's answer back as it is generated. When the model
//! cannot be reached the caller gets a fixed apology instead of a broken
//! response.
//!
//! # Configuration
//!
//! | Variable                   | Default    |
//! |----------------------------|------------|
//! | `FOLIO_BIND_ADDR`          | `0.0.0.0`  |
//! | `FOLIO_PORT`               | `3000`     |
//! | `FOLIO_PROFILE_PATH`       | bundled    |
//! | `OPENAI_API_KEY`           | (required for chat) |
//! | `OPENAI_BASE_URL`          | `https://api.openai.com/v1` |
//! | `OPENAI_IDLE_TIMEOUT_SECS` | `60`       |
//! | `RUST_LOG`                 | off        |

use std::{net::SocketAddr, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};
#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};
use tokio::{net::TcpListener, signal::ctrl_c};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

pub mod config;
pub mod error;
pub mod relay;
pub mod routes;
pub mod state;

use config::Config;
use routes::{chat_handler, profile_handler};
use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/chat", post(chat_handler))
        .route("/api/profile", get(profile_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn start_server(config: Config) -> anyhow::Result<()> {
    info!("Initializing state...");
    let state = AppState::from_config(&config)?;

    info!("Starting server...");
    let app = router(state);

    let address = SocketAddr::new(config.bind_addr, config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(err) => {
                warn!("Failed to install Ctrl+C handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(err) => {
                warn!("Failed to install signal handler: {err}");
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
}
