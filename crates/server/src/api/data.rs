use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use layover::view::RAW_SAMPLE_SIZE;
use std::{collections::HashMap, sync::Arc};
use tracing::error;

pub async fn airports(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let count: usize = match params.get("count") {
        Some(value) => match value.parse() {
            Ok(value) => value,
            Err(_) => return Err(StatusCode::BAD_REQUEST),
        },
        None => RAW_SAMPLE_SIZE,
    };
    let snapshot = state.snapshot().await;
    Ok(Json(snapshot.repository.sample(count)).into_response())
}

pub async fn rows(State(state): State<Arc<AppState>>) -> Response {
    let snapshot = state.snapshot().await;
    Json(&*snapshot.repository.rows).into_response()
}

pub async fn rows_csv(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let snapshot = state.snapshot().await;
    let mut buffer: Vec<u8> = Vec::new();
    snapshot
        .repository
        .write_rows_csv(&mut buffer)
        .map_err(|err| {
            error!("Failed to write rows as csv: {err}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"transit_options.csv\"",
            ),
        ],
        buffer,
    )
        .into_response())
}
