use std::time::Instant;

use axum::extract::State;
use tracing::Instrument;

use crate::app_state::AppState;
use crate::transport::ApiError;

/// `GET /`: bump this host's counter and return every counter as
/// `key > value` lines.
pub async fn count(State(state): State<AppState>) -> Result<String, ApiError> {
    let started = Instant::now();
    let counter = state.counter();
    let span = tracing::info_span!("count", host = %counter.host());

    let res = counter.handle().instrument(span).await;

    let metrics = state.metrics();
    metrics.request_duration.observe(&[("route", "/")], started.elapsed());

    match res {
        Ok(snap) => {
            metrics.requests.inc(&[("outcome", "ok"), ("code", "none")]);
            Ok(snap.render())
        }
        Err(e) => {
            let code = e.client_code().as_str();
            metrics.requests.inc(&[("outcome", "error"), ("code", code)]);
            tracing::error!(host = %counter.host(), error = %e, "count request failed");
            Err(ApiError(e))
        }
    }
}
