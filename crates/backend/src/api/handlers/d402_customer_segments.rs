use axum::{extract::Query, http::StatusCode, Json};
use contracts::dashboards::d402_customer_segments::{
    CustomerSegmentsRequest, CustomerSegmentsResponse,
};

use crate::dashboards::d402_customer_segments::service;

/// GET /api/d402/customer_segments?year=2026&tag=VIP
pub async fn get_customer_segments(
    Query(request): Query<CustomerSegmentsRequest>,
) -> Result<Json<CustomerSegmentsResponse>, StatusCode> {
    match service::get_customer_segments(request) {
        Ok(response) => {
            tracing::info!(
                "D402 Segments: {} lapsed customers, {} orders awaiting session in {}",
                response.lapsed.len(),
                response.awaiting_session.len(),
                response.year
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("D402 Segments: Failed to get customer segments: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
