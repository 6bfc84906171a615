//! Receipt handlers

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::Uri,
    Json,
};

use super::dto::{PointsResponse, ProcessResponse};
use super::error::{ApiError, ApiResult};
use super::state::AppState;
use crate::receipt::{Receipt, ReceiptId};
use crate::scoring::calculate_points;

/// Score a receipt and remember its points
///
/// The body is taken as raw bytes: the id hashes exactly what the client sent.
pub async fn process_receipt(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<ProcessResponse>> {
    let receipt = Receipt::from_slice(&body).map_err(|e| {
        tracing::warn!("Rejected receipt: {}", e);
        ApiError::BadRequest(format!("invalid receipt: {}", e))
    })?;

    let id = ReceiptId::from_bytes(&body);
    let result = calculate_points(&receipt);

    for contribution in &result.breakdown.contributions {
        tracing::debug!(
            receipt_id = %id,
            "{}: {} ({})",
            contribution.rule.label(),
            contribution.points,
            contribution.description
        );
    }

    if state.store.insert(id.clone(), result.points).is_some() {
        tracing::debug!(receipt_id = %id, "Receipt resubmitted");
    }
    tracing::info!(receipt_id = %id, points = result.points, "Processed receipt");

    Ok(Json(ProcessResponse { id: id.to_string() }))
}

/// Look up the points stored for a receipt id
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    match state.store.get(&id) {
        Some(points) => Ok(Json(PointsResponse { points })),
        None => {
            tracing::debug!(receipt_id = %id, "Unknown receipt id");
            Err(ApiError::NotFound(format!("no receipt found for id {}", id)))
        }
    }
}

/// Fallback for unrouted paths
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}
