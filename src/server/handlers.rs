use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{debug, info, warn};

use super::error::{ApiError, ApiResult};
use super::state::AppState;
use crate::format::{repair_quotes, wrap_list};
use crate::helper;
use crate::player::{dispatch, Action, Dispatch, PlayerRequest, Source};
use crate::runner::Invocation;

/// The single bridge endpoint. Form fields come from the body on POST and
/// from the query string on GET; unreadable input counts as empty.
pub async fn now_playing(
    State(state): State<AppState>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> ApiResult<Response> {
    let request = match form {
        Ok(Form(fields)) => PlayerRequest::from_fields(fields),
        Err(rejection) => {
            debug!(%rejection, "Unreadable request fields, treating as empty");
            PlayerRequest::default()
        }
    };

    match dispatch(&request) {
        Dispatch::Control {
            source,
            action,
            script,
        } => {
            info!(source = source.app_name(), action = action.name(), "Running player command");
            run(&state, script.invocation()).await?;
            Ok(ack(source, action))
        }
        Dispatch::Play {
            source,
            action,
            script,
        } => {
            info!(
                source = source.app_name(),
                action = action.name(),
                search = %request.search,
                "Starting playback"
            );
            // The play scripts echo the command name back.
            let echo = run(&state, script.invocation()).await?;
            Ok(json_text(echo))
        }
        Dispatch::Query {
            source,
            action,
            script,
        } => {
            info!(
                source = source.app_name(),
                action = action.name(),
                search = %request.search,
                "Running library query"
            );
            let output = run(&state, script.invocation()).await?;
            Ok(json_text(wrap_list(&output)))
        }
        Dispatch::Helper => now_playing_from_helper(&state).await,
        Dispatch::Unsupported { source, action } => Err(ApiError::Unsupported {
            app: source,
            command: action,
        }),
    }
}

/// Liveness probe for clients that check reachability before polling.
pub async fn head_ok() -> impl IntoResponse {
    axum::http::StatusCode::OK
}

pub async fn health() -> &'static str {
    "OK"
}

async fn now_playing_from_helper(state: &AppState) -> ApiResult<Response> {
    let invocation = helper::prepare(&state.config, &state.env)?;
    debug!(program = %invocation.program.display(), "Running metadata helper");

    let output = run(state, invocation).await?;
    if output.is_empty() {
        return Err(ApiError::EmptyOutput);
    }

    let repaired = repair_quotes(&output);
    if let Err(err) = serde_json::from_str::<serde_json::Value>(&repaired) {
        warn!(error = %err, "Helper output is still not valid JSON after repair");
    }
    Ok(json_text(repaired))
}

/// Run one child process on the blocking pool and return its trimmed stdout.
async fn run(state: &AppState, invocation: Invocation) -> ApiResult<String> {
    let runner = state.runner.clone();
    let output = tokio::task::spawn_blocking(move || runner.run(&invocation)).await??;
    Ok(output)
}

fn ack(source: Source, action: Action) -> Response {
    Json(json!({
        "status": "ok",
        "source": source.app_name(),
        "action": action.name(),
    }))
    .into_response()
}

fn json_text(body: String) -> Response {
    (
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        body,
    )
        .into_response()
}
