use axum::{routing::get, Router};

use crate::api::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // DASHBOARDS
        // ========================================
        // D400 Campaign snapshot
        .route(
            "/api/d400/campaign_snapshot",
            get(handlers::d400_campaign_snapshot::get_campaign_snapshot),
        )
        // D401 Pricing adjustments
        .route(
            "/api/d401/pricing_adjustments",
            get(handlers::d401_pricing_adjustments::get_pricing_adjustments),
        )
        .route(
            "/api/d401/pricing_adjustments/export",
            get(handlers::d401_pricing_adjustments::export_pricing_adjustments),
        )
        // D402 Customer segments
        .route(
            "/api/d402/customer_segments",
            get(handlers::d402_customer_segments::get_customer_segments),
        )
}
