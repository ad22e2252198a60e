use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::error::ApiResult;
use crate::handlers::not_found;
use crate::models::{ApiResponse, Deleted};
use crate::store::Database;
use crate::trade::{ProposalOutcome, TradeOffer, TradeOfferInput, TradeOfferQuery, TradeService};

/// Propose a trade.
///
/// 201 when the proposal is posted as a new offer, 200 when it settled
/// against an existing mirror offer.
pub async fn propose_trade<D: Database>(
    State(service): State<Arc<TradeService<D>>>,
    Json(proposal): Json<TradeOfferInput>,
) -> ApiResult<(StatusCode, Json<ApiResponse<ProposalOutcome>>)> {
    let outcome = service.propose(proposal).await?;
    let status = if outcome.is_settled() {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };
    Ok((status, Json(ApiResponse::ok(outcome))))
}

pub async fn list_trade_offers<D: Database>(
    State(service): State<Arc<TradeService<D>>>,
    Query(query): Query<TradeOfferQuery>,
) -> ApiResult<Json<ApiResponse<Vec<TradeOffer>>>> {
    let offers = service.list(&query).await?;
    Ok(Json(ApiResponse::ok(offers)))
}

pub async fn get_trade_offer<D: Database>(
    State(service): State<Arc<TradeService<D>>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ApiResponse<TradeOffer>>> {
    let offer = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found("Trade offer", id))?;
    Ok(Json(ApiResponse::ok(offer)))
}

pub async fn cancel_trade_offer<D: Database>(
    State(service): State<Arc<TradeService<D>>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ApiResponse<Deleted>>> {
    if !service.cancel(id).await? {
        return Err(not_found("Trade offer", id));
    }
    Ok(Json(ApiResponse::ok(Deleted { id })))
}
