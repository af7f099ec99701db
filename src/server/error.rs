use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::format::SCRIPT_ERROR;
use crate::helper::HelperError;
use crate::player::{Action, Source};
use crate::runner::RunError;

/// Everything a request can fail with.
///
/// The bridge never differentiates by status code: every variant is a 200
/// with a body that clients recognise.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Automation script or helper exited unsuccessfully or could not start.
    #[error(transparent)]
    Script(#[from] RunError),

    /// Helper exited cleanly but printed nothing.
    #[error("helper printed no output")]
    EmptyOutput,

    /// The blocking task running the child process died.
    #[error("script task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// Request does not map to anything that can run.
    #[error("unsupported action {command:?} for {app:?}")]
    Unsupported {
        app: Option<Source>,
        command: Option<Action>,
    },

    /// Helper paths or the cover directory could not be set up.
    #[error(transparent)]
    HelperUnavailable(#[from] HelperError),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Script(_) | ApiError::EmptyOutput | ApiError::Task(_) => {
                tracing::warn!(error = %self, "Script failed");
                (
                    [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
                    SCRIPT_ERROR,
                )
                    .into_response()
            }
            ApiError::Unsupported { app, command } => {
                tracing::debug!(?app, ?command, "Nothing to run");
                axum::Json(json!({
                    "error": "unsupported action",
                    "source": app.map(|s| s.app_name()),
                    "action": command.map(|a| a.name()),
                }))
                .into_response()
            }
            ApiError::HelperUnavailable(err) => {
                tracing::error!(error = %err, "Helper unavailable");
                axum::Json(json!({
                    "error": "helper unavailable",
                    "detail": err.to_string(),
                }))
                .into_response()
            }
        }
    }
}
