mod api;
mod config;
mod dto;
mod state;

use crate::{config::Config, state::AppState};
use axum::routing::{get, post};
use std::{sync::Arc, time::Instant};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    let start_logo = include_str!("../start_logo.txt");
    println!("{}", start_logo);

    info!("Starting server...");
    let config = Config::from_env();
    let path = match config.data_path.canonicalize() {
        Ok(path) => path,
        Err(err) => {
            error!("Missing airport dataset {}: {err}", config.data_path.display());
            std::process::exit(1);
        }
    };

    info!("Loading data...");
    let now = Instant::now();
    let state = match AppState::load(path) {
        Ok(state) => Arc::new(state),
        Err(err) => {
            error!("Failed to load airport dataset: {err}");
            std::process::exit(1);
        }
    };
    info!("Loading data took {:?}", now.elapsed());

    let app = axum::Router::new()
        .route("/", get(api::index))
        .route("/axes", get(api::axes))
        .route("/scatter", get(api::scatter))
        .route("/map", get(api::map))
        .route("/analysis/fare-spread", get(api::fare_spread))
        .route("/analysis/taxi-price", get(api::taxi_price))
        .route("/airports", get(api::airports))
        .route("/rows", get(api::rows))
        .route("/rows.csv", get(api::rows_csv))
        .route("/summary", get(api::summary))
        .route("/age", get(api::age))
        .route("/reload", post(api::reload))
        .with_state(state);
    let listener = match tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {}: {err}", config.port);
            std::process::exit(1);
        }
    };
    info!("Listening to port {}", config.port);
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
        std::process::exit(1);
    }
}
