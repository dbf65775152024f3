use crate::{
    dto::{AxesDto, MapDto, ScatterDto, ScatterParams},
    state::AppState,
};
use axum::{
    Json,
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
};
use layover::view::{self, Axis};
use std::sync::Arc;

pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

pub async fn axes() -> Json<AxesDto> {
    Json(AxesDto::default())
}

pub async fn scatter(
    Query(params): Query<ScatterParams>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let x = params.x.unwrap_or(Axis::DEFAULT_X);
    let y = params.y.unwrap_or(Axis::DEFAULT_Y);
    let snapshot = state.snapshot().await;
    let rows = &snapshot.repository.rows;
    let scatter = view::scatter(rows, x, y);
    Json(ScatterDto::from(&scatter, rows)).into_response()
}

pub async fn map(State(state): State<Arc<AppState>>) -> Json<MapDto> {
    let snapshot = state.snapshot().await;
    Json(MapDto::from(&snapshot.repository.airports))
}
