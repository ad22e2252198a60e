use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::collection::{Acquisition, CollectionQuery, CollectionService, GrantRequest, OwnershipRecord};
use crate::error::ApiResult;
use crate::handlers::not_found;
use crate::models::{ApiResponse, Deleted};
use crate::store::Database;

/// Grant one copy of a card to a profile
pub async fn grant_card<D: Database>(
    State(service): State<Arc<CollectionService<D>>>,
    Json(request): Json<GrantRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Acquisition>>)> {
    let acquisition = service.grant(request).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(acquisition))))
}

pub async fn list_collection<D: Database>(
    State(service): State<Arc<CollectionService<D>>>,
    Query(query): Query<CollectionQuery>,
) -> ApiResult<Json<ApiResponse<Vec<OwnershipRecord>>>> {
    let records = match query.card_id {
        Some(card_id) => service.list_by_card(card_id).await?,
        None => service.list_all().await?,
    };
    Ok(Json(ApiResponse::ok(records)))
}

pub async fn get_ownership<D: Database>(
    State(service): State<Arc<CollectionService<D>>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ApiResponse<OwnershipRecord>>> {
    let record = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found("Ownership record", id))?;
    Ok(Json(ApiResponse::ok(record)))
}

/// Remove one owned copy; offers it backed are withdrawn with the last copy
pub async fn remove_ownership<D: Database>(
    State(service): State<Arc<CollectionService<D>>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ApiResponse<Deleted>>> {
    if !service.remove_ownership(id).await? {
        return Err(not_found("Ownership record", id));
    }
    Ok(Json(ApiResponse::ok(Deleted { id })))
}
