use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::collection::{CardHoldings, CollectionService, OwnershipRecord};
use crate::error::ApiResult;
use crate::handlers::not_found;
use crate::models::{ApiResponse, Deleted};
use crate::profile::{Profile, ProfileInput, ProfileService};
use crate::store::Database;

pub async fn create_profile<D: Database>(
    State(service): State<Arc<ProfileService<D>>>,
    Json(input): Json<ProfileInput>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Profile>>)> {
    let profile = service.add(input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(profile))))
}

pub async fn list_profiles<D: Database>(
    State(service): State<Arc<ProfileService<D>>>,
) -> ApiResult<Json<ApiResponse<Vec<Profile>>>> {
    let profiles = service.get_all().await?;
    Ok(Json(ApiResponse::ok(profiles)))
}

pub async fn get_profile<D: Database>(
    State(service): State<Arc<ProfileService<D>>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ApiResponse<Profile>>> {
    let profile = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found("Profile", id))?;
    Ok(Json(ApiResponse::ok(profile)))
}

pub async fn update_profile<D: Database>(
    State(service): State<Arc<ProfileService<D>>>,
    Path(id): Path<i64>,
    Json(input): Json<ProfileInput>,
) -> ApiResult<Json<ApiResponse<Profile>>> {
    let profile = service
        .update(id, input)
        .await?
        .ok_or_else(|| not_found("Profile", id))?;
    Ok(Json(ApiResponse::ok(profile)))
}

/// Delete a profile together with its collection, quests and offers
pub async fn delete_profile<D: Database>(
    State(service): State<Arc<ProfileService<D>>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ApiResponse<Deleted>>> {
    if !service.delete(id).await? {
        return Err(not_found("Profile", id));
    }
    Ok(Json(ApiResponse::ok(Deleted { id })))
}

pub async fn get_profile_collection<D: Database>(
    State(profiles): State<Arc<ProfileService<D>>>,
    State(collection): State<Arc<CollectionService<D>>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ApiResponse<Vec<OwnershipRecord>>>> {
    if profiles.get_by_id(id).await?.is_none() {
        return Err(not_found("Profile", id));
    }
    let records = collection.list_by_profile(id).await?;
    Ok(Json(ApiResponse::ok(records)))
}

pub async fn get_profile_card_holdings<D: Database>(
    State(collection): State<Arc<CollectionService<D>>>,
    Path((id, card_id)): Path<(i64, i64)>,
) -> ApiResult<Json<ApiResponse<CardHoldings>>> {
    let holdings = collection.holdings(id, card_id).await?;
    Ok(Json(ApiResponse::ok(holdings)))
}
