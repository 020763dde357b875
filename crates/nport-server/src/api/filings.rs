use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    Json,
    extract::{Path, State},
};
use nport_data::FilingSummary;

/// Most recent N-PORT filing for a CIK.
pub(crate) async fn get_recent_filing(
    Path(cik): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<FilingSummary>> {
    let summary = state
        .lookup
        .get_recent_filing(&cik)
        .await
        .inspect_err(|err| tracing::error!(%cik, error = %err, "filing lookup failed"))?;
    Ok(Json(summary))
}
