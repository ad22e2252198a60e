use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::error::ApiResult;
use crate::handlers::not_found;
use crate::models::{ApiResponse, Deleted};
use crate::quest::{Quest, QuestInput, QuestQuery, QuestService};
use crate::store::Database;

pub async fn create_quest<D: Database>(
    State(service): State<Arc<QuestService<D>>>,
    Json(input): Json<QuestInput>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Quest>>)> {
    let quest = service.add_quest(input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(quest))))
}

pub async fn list_quests<D: Database>(
    State(service): State<Arc<QuestService<D>>>,
    Query(query): Query<QuestQuery>,
) -> ApiResult<Json<ApiResponse<Vec<Quest>>>> {
    let quests = service.list(&query).await?;
    Ok(Json(ApiResponse::ok(quests)))
}

pub async fn get_quest<D: Database>(
    State(service): State<Arc<QuestService<D>>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ApiResponse<Quest>>> {
    let quest = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found("Quest", id))?;
    Ok(Json(ApiResponse::ok(quest)))
}

pub async fn update_quest<D: Database>(
    State(service): State<Arc<QuestService<D>>>,
    Path(id): Path<i64>,
    Json(input): Json<QuestInput>,
) -> ApiResult<Json<ApiResponse<Quest>>> {
    let quest = service.update_quest(id, input).await?;
    Ok(Json(ApiResponse::ok(quest)))
}

pub async fn delete_quest<D: Database>(
    State(service): State<Arc<QuestService<D>>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ApiResponse<Deleted>>> {
    if !service.delete_quest(id).await? {
        return Err(not_found("Quest", id));
    }
    Ok(Json(ApiResponse::ok(Deleted { id })))
}
