use crate::{
    dto::{FareSpreadDto, TaxiPriceRowDto},
    state::AppState,
};
use axum::{Json, extract::State};
use std::sync::Arc;

pub async fn fare_spread(State(state): State<Arc<AppState>>) -> Json<FareSpreadDto> {
    let snapshot = state.snapshot().await;
    Json(FareSpreadDto::from(&snapshot.repository.fare_spread))
}

pub async fn taxi_price(State(state): State<Arc<AppState>>) -> Json<Vec<TaxiPriceRowDto>> {
    let snapshot = state.snapshot().await;
    Json(
        snapshot
            .repository
            .taxi_price
            .iter()
            .map(TaxiPriceRowDto::from)
            .collect(),
    )
}
