pub mod error;
pub mod handlers;
pub mod state;

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::routing::{get, MethodRouter};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::helper::paths::resolve_covers_dir;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

fn endpoint() -> MethodRouter<AppState> {
    get(handlers::now_playing)
        .post(handlers::now_playing)
        .head(handlers::head_ok)
}

pub fn build_router(state: AppState) -> Router {
    let covers = resolve_covers_dir(&state.config, &state.env);

    Router::new()
        .route("/", endpoint())
        .route("/now_playing", endpoint())
        .route("/now_playing.php", endpoint())
        .route("/health", get(handlers::health))
        .nest_service("/covers", ServeDir::new(covers))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Now-playing bridge listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let term = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let term = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = term => {},
    }

    warn!("Shutdown signal received.");
}
