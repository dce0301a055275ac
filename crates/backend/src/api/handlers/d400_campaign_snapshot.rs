use axum::{extract::Query, http::StatusCode, Json};
use contracts::dashboards::d400_campaign_snapshot::{CampaignSnapshot, CampaignSnapshotRequest};

use crate::dashboards::d400_campaign_snapshot::service;

/// GET /api/d400/campaign_snapshot?today=2026-02-23&metric=revenue&view=accumulated
pub async fn get_campaign_snapshot(
    Query(request): Query<CampaignSnapshotRequest>,
) -> Result<Json<CampaignSnapshot>, StatusCode> {
    tracing::info!(
        "D400 Dashboard: Getting campaign snapshot for {} ({:?}, {:?})",
        request
            .today
            .map(|d| d.to_string())
            .unwrap_or_else(|| "reference date".to_string()),
        request.metric,
        request.view
    );

    match service::get_campaign_snapshot(request) {
        Ok(snapshot) => {
            tracing::info!(
                "D400 Dashboard: Returning snapshot of {} ({} days left, {} chart days)",
                snapshot.campaign.name,
                snapshot.campaign.days_left,
                snapshot.charts.day_series.len()
            );
            Ok(Json(snapshot))
        }
        Err(e) => {
            tracing::error!("D400 Dashboard: Failed to get campaign snapshot: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
