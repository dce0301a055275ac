use axum::{
    extract::Query,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use contracts::dashboards::d401_pricing_adjustments::{
    PricingAdjustmentsRequest, PricingAdjustmentsResponse,
};

use crate::dashboards::d401_pricing_adjustments::service;
use crate::shared::pricing::export::EXPORT_FILE_NAME;

/// GET /api/d401/pricing_adjustments?interval=last3
pub async fn get_pricing_adjustments(
    Query(request): Query<PricingAdjustmentsRequest>,
) -> Result<Json<PricingAdjustmentsResponse>, StatusCode> {
    match service::get_pricing_adjustments(request) {
        Ok(report) => {
            tracing::info!(
                "D401 Pricing: Returning {} packages over {} years ({:?}), {} flagged rows",
                report.packages.len(),
                report.years.len(),
                report.interval,
                report.flagged_rows
            );
            Ok(Json(report))
        }
        Err(e) => {
            tracing::error!("D401 Pricing: Failed to build adjustments report: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/d401/pricing_adjustments/export?interval=last3
pub async fn export_pricing_adjustments(
    Query(request): Query<PricingAdjustmentsRequest>,
) -> Result<impl IntoResponse, StatusCode> {
    match service::export_pricing_adjustments(request) {
        Ok(csv) => {
            tracing::info!("D401 Pricing: Exported {} bytes of CSV", csv.len());
            Ok((
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
                    ),
                ],
                csv,
            ))
        }
        Err(e) => {
            tracing::error!("D401 Pricing: Failed to export adjustments: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
