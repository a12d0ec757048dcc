//! Quick Poll: a one-question poll served over HTTP.
//!
//! Each browser session may vote once among a fixed set of options; after
//! voting, the summary page shows the running tally. Counts live in process
//! memory only and reset on restart.
//!
//! # Routes
//! - `GET /` summary page (also `/Home`, `/Home/Index`)
//! - `POST /vote` form field `selectedOption`, always `302` back to `/` (also `/Home/Vote`)
//! - `GET /error` error page with a request correlation id (also `/Home/Error`)
//!
//! # Setup
//!
//! ```sh
//! RUST_LOG=info PORT=8080 cargo run
//! ```

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use log::info;
use tokio::net::TcpListener;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};

pub mod config;
pub mod correlation;
pub mod error;
pub mod handlers;
pub mod models;
pub mod session;
pub mod state;
pub mod store;
pub mod views;
pub mod voting;

use config::Config;
use correlation::MakeRequestUuid;
use handlers::{error_page, index, not_found, submit_vote};
use session::session_layer;
use state::AppState;
use store::TallyStore;

/// Build the full application router around an existing state.
pub fn app(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/Home", get(index))
        .route("/Home/Index", get(index))
        .route("/vote", post(submit_vote))
        .route("/Home/Vote", post(submit_vote))
        .route("/error", get(error_page))
        .route("/Home/Error", get(error_page))
        .fallback(not_found)
        .layer(session_layer(config))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}

/// Bind and serve until Ctrl-C or SIGTERM.
pub async fn serve(config: Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let tally = Arc::new(TallyStore::default());
    info!("Poll options: {:?}", tally.options());

    let state = AppState::new(tally, &config);
    let app = app(state, &config);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                log::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
