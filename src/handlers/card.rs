use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::card::{Card, CardInput, CardQuery, CardService};
use crate::error::ApiResult;
use crate::handlers::not_found;
use crate::models::{ApiResponse, Deleted};
use crate::store::Database;

pub async fn create_card<D: Database>(
    State(service): State<Arc<CardService<D>>>,
    Json(input): Json<CardInput>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Card>>)> {
    let card = service.add(input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(card))))
}

pub async fn list_cards<D: Database>(
    State(service): State<Arc<CardService<D>>>,
    Query(query): Query<CardQuery>,
) -> ApiResult<Json<ApiResponse<Vec<Card>>>> {
    let cards = match query.rarity_id {
        Some(rarity_id) => service.get_all_by_rarity(rarity_id).await?,
        None => service.get_all().await?,
    };
    Ok(Json(ApiResponse::ok(cards)))
}

pub async fn random_card<D: Database>(
    State(service): State<Arc<CardService<D>>>,
    Query(query): Query<CardQuery>,
) -> ApiResult<Json<ApiResponse<Card>>> {
    let card = service.get_random(query.rarity_id).await?;
    Ok(Json(ApiResponse::ok(card)))
}

pub async fn get_card<D: Database>(
    State(service): State<Arc<CardService<D>>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ApiResponse<Card>>> {
    let card = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found("Card", id))?;
    Ok(Json(ApiResponse::ok(card)))
}

pub async fn update_card<D: Database>(
    State(service): State<Arc<CardService<D>>>,
    Path(id): Path<i64>,
    Json(input): Json<CardInput>,
) -> ApiResult<Json<ApiResponse<Card>>> {
    let card = service
        .update(id, input)
        .await?
        .ok_or_else(|| not_found("Card", id))?;
    Ok(Json(ApiResponse::ok(card)))
}

pub async fn delete_card<D: Database>(
    State(service): State<Arc<CardService<D>>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ApiResponse<Deleted>>> {
    if !service.delete(id).await? {
        return Err(not_found("Card", id));
    }
    Ok(Json(ApiResponse::ok(Deleted { id })))
}
