use anyhow::Result;
use contracts::dashboards::d401_pricing_adjustments::{
    PackageAdjustmentReport, PricingAdjustmentsRequest, PricingAdjustmentsResponse,
    PricingInterval,
};
use contracts::domain::a003_package_pricing::PricingTable;

use crate::shared::data::fixtures::get_store;
use crate::shared::pricing::cagr::series_cagr;
use crate::shared::pricing::deltas::{
    build_aligned_years, compute_extra_photo_deltas, compute_yearly_deltas,
};
use crate::shared::pricing::export::export_adjustments_csv;
use crate::shared::pricing::summary::{interval_bounds, summarize};

/// Get pricing adjustments report from the loaded price table
pub fn get_pricing_adjustments(
    request: PricingAdjustmentsRequest,
) -> Result<PricingAdjustmentsResponse> {
    let store = get_store()?;
    Ok(build_pricing_adjustments(&store.pricing, request.interval))
}

/// Same report rendered as CSV, limited to the same interval
pub fn export_pricing_adjustments(request: PricingAdjustmentsRequest) -> Result<String> {
    export_adjustments_csv(&get_pricing_adjustments(request)?)
}

/// Year-over-year deltas, CAGR and headline numbers for every package and the extra photo
///
/// Deltas come from the full history; the interval only decides which rows
/// are shown, and CAGR, aligned years and the summary use the rows shown.
pub fn build_pricing_adjustments(
    pricing: &PricingTable,
    interval: PricingInterval,
) -> PricingAdjustmentsResponse {
    let all_years: Vec<i32> = pricing
        .packages
        .iter()
        .flat_map(|s| s.years.iter().map(|p| p.year))
        .chain(pricing.extra_photo.iter().map(|p| p.year))
        .collect();
    let in_interval = |year: i32| match interval_bounds(&all_years, interval) {
        Some((from, to)) => year >= from && year <= to,
        None => false,
    };

    let packages: Vec<PackageAdjustmentReport> = pricing
        .packages
        .iter()
        .map(|series| {
            let rows: Vec<_> = compute_yearly_deltas(&series.years)
                .into_iter()
                .filter(|row| in_interval(row.year))
                .collect();
            let totals: Vec<f64> = rows.iter().map(|row| row.total).collect();
            PackageAdjustmentReport {
                package: series.package,
                total_cagr: series_cagr(&totals),
                rows,
            }
        })
        .collect();

    let extra_photo: Vec<_> = compute_extra_photo_deltas(&pricing.extra_photo)
        .into_iter()
        .filter(|row| in_interval(row.year))
        .collect();
    let unit_prices: Vec<f64> = extra_photo.iter().map(|row| row.unit_price).collect();

    let years = build_aligned_years(
        packages
            .iter()
            .flat_map(|p| p.rows.iter().map(|row| row.year))
            .chain(extra_photo.iter().map(|row| row.year)),
    );

    let flagged_rows = packages
        .iter()
        .flat_map(|p| &p.rows)
        .filter(|row| row.needs_adjustment_badge)
        .count();

    PricingAdjustmentsResponse {
        interval,
        years,
        summary: summarize(&packages, &extra_photo),
        extra_photo_cagr: series_cagr(&unit_prices),
        packages,
        extra_photo,
        flagged_rows,
    }
}
