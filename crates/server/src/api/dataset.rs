use crate::{dto::SummaryDto, state::AppState};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::{fs, path::Path, sync::Arc};
use tracing::{error, info};

pub async fn summary(State(state): State<Arc<AppState>>) -> Json<SummaryDto> {
    let snapshot = state.snapshot().await;
    Json(SummaryDto::from(&snapshot.repository, snapshot.loaded_at))
}

pub async fn age(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    if state.data_path.exists() {
        let last_modifed = seconds_since_modified(&state.data_path)?;
        Ok(last_modifed.to_string().into_response())
    } else {
        error!("Dataset {} is gone", state.data_path.display());
        Err(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

fn seconds_since_modified<P: AsRef<Path>>(path: P) -> Result<u64, StatusCode> {
    let meta_data = fs::metadata(path).map_err(|err| {
        error!("Failed to get metadata: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    let modified = meta_data.modified().map_err(|err| {
        error!("Failed to get modified: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    let duration = modified.elapsed().map_err(|err| {
        error!("Failed to get elapsed time since modified: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(duration.as_secs())
}

pub async fn reload(State(state): State<Arc<AppState>>) -> Result<Json<SummaryDto>, StatusCode> {
    let snapshot = state.reload().await.map_err(|err| {
        error!("Failed to reload dataset: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    info!("Reloaded {}", state.data_path.display());
    Ok(Json(SummaryDto::from(&snapshot.repository, snapshot.loaded_at)))
}
