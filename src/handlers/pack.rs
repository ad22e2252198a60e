use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::ApiResult;
use crate::models::ApiResponse;
use crate::pack::{OpenedPack, PackRequest, PackService};
use crate::store::Database;

/// Open a pack for a profile
pub async fn open_pack<D: Database>(
    State(service): State<Arc<PackService<D>>>,
    Path(profile_id): Path<i64>,
    Json(request): Json<PackRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<OpenedPack>>)> {
    let pack = service.open_pack(profile_id, request).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(pack))))
}
