use crate::{
    api::{error::ApiError, response::ApiResponse},
    models::NftMetadata,
    state::AppState,
    validation::{validate_mint_address, validate_price},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

// POST /nfts/{mint}/price request body
#[derive(Deserialize)]
pub struct PriceUpdate {
    pub floor_price: f64,
    pub last_sale_price: f64,
}

// Create router with all routes
pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/nfts", post(cache_nft))
        .route("/nfts/{mint}", get(get_nft))
        .route("/nfts/{mint}/price", get(get_price).post(update_price))
        .route("/cache/stats", get(get_stats))
        .route("/cache/clear", post(clear_cache))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

// GET /nfts/{mint} handler
pub async fn get_nft(
    State(state): State<Arc<AppState>>,
    Path(mint): Path<String>,
) -> Result<Response, ApiError> {
    validate_mint_address(&mint)?;

    match state.cache.get_record(&mint) {
        Some(record) => Ok(ApiResponse { data: record }.into_response()),
        None => Err(ApiError::NotFound(format!("NFT {} is not cached", mint))),
    }
}

// POST /nfts handler
pub async fn cache_nft(
    State(state): State<Arc<AppState>>,
    Json(record): Json<NftMetadata>,
) -> Result<Response, ApiError> {
    validate_mint_address(&record.mint)?;

    let mint = record.mint.clone();
    state.cache.cache_record(record);
    info!("Cached NFT record for mint: {}", mint);

    Ok((StatusCode::CREATED, "NFT record cached").into_response())
}

// GET /nfts/{mint}/price handler
pub async fn get_price(
    State(state): State<Arc<AppState>>,
    Path(mint): Path<String>,
) -> Result<Response, ApiError> {
    validate_mint_address(&mint)?;

    match state.cache.get_price(&mint) {
        Some(snapshot) => Ok(ApiResponse { data: snapshot }.into_response()),
        None => Err(ApiError::NotFound(format!(
            "No current price snapshot for {}",
            mint
        ))),
    }
}

// POST /nfts/{mint}/price handler
pub async fn update_price(
    State(state): State<Arc<AppState>>,
    Path(mint): Path<String>,
    Json(update): Json<PriceUpdate>,
) -> Result<Response, ApiError> {
    validate_mint_address(&mint)?;
    let floor_price = validate_price(update.floor_price)?;
    let last_sale_price = validate_price(update.last_sale_price)?;

    state.cache.update_price(&mint, floor_price, last_sale_price);
    info!("Updated price snapshot for mint: {}", mint);

    Ok((StatusCode::OK, "Price snapshot updated").into_response())
}

// GET /cache/stats handler
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let stats = state.cache.get_cache_stats();
    Ok(ApiResponse { data: stats }.into_response())
}

// POST /cache/clear handler
pub async fn clear_cache(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    state.cache.clear_cache();
    Ok((StatusCode::OK, "Cache cleared").into_response())
}
