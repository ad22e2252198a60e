use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::ApiResult;
use crate::handlers::not_found;
use crate::models::{ApiResponse, Deleted};
use crate::rarity::{Rarity, RarityInput, RarityService};
use crate::store::Database;

pub async fn create_rarity<D: Database>(
    State(service): State<Arc<RarityService<D>>>,
    Json(input): Json<RarityInput>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Rarity>>)> {
    let rarity = service.add(input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(rarity))))
}

pub async fn list_rarities<D: Database>(
    State(service): State<Arc<RarityService<D>>>,
) -> ApiResult<Json<ApiResponse<Vec<Rarity>>>> {
    let rarities = service.get_all().await?;
    Ok(Json(ApiResponse::ok(rarities)))
}

pub async fn get_rarity<D: Database>(
    State(service): State<Arc<RarityService<D>>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ApiResponse<Rarity>>> {
    let rarity = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found("Rarity", id))?;
    Ok(Json(ApiResponse::ok(rarity)))
}

pub async fn update_rarity<D: Database>(
    State(service): State<Arc<RarityService<D>>>,
    Path(id): Path<i64>,
    Json(input): Json<RarityInput>,
) -> ApiResult<Json<ApiResponse<Rarity>>> {
    let rarity = service
        .update(id, input)
        .await?
        .ok_or_else(|| not_found("Rarity", id))?;
    Ok(Json(ApiResponse::ok(rarity)))
}

pub async fn delete_rarity<D: Database>(
    State(service): State<Arc<RarityService<D>>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ApiResponse<Deleted>>> {
    if !service.delete(id).await? {
        return Err(not_found("Rarity", id));
    }
    Ok(Json(ApiResponse::ok(Deleted { id })))
}
