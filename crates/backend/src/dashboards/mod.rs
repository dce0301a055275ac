pub mod d400_campaign_snapshot;
pub mod d401_pricing_adjustments;
pub mod d402_customer_segments;

use chrono::NaiveDate;

use crate::shared::config::CampaignConfig;

/// Reference date of a request
///
/// Explicit request date, else the configured one, else the local clock. This
/// is the only place the clock is read; everything below takes the date as a
/// parameter.
pub fn resolve_today(requested: Option<NaiveDate>, campaign: &CampaignConfig) -> NaiveDate {
    requested
        .or(campaign.reference_date)
        .unwrap_or_else(|| chrono::Local::now().date_naive())
}
