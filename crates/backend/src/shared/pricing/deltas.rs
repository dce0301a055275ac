use contracts::dashboards::d401_pricing_adjustments::{ExtraPhotoYearDelta, PackageYearDelta};
use contracts::domain::a003_package_pricing::{ExtraPhotoYearPrice, PackageYearPrice};
use std::collections::BTreeSet;

/// Percent change against `previous`; 0 when there is nothing to compare to
fn pct_change(delta: f64, previous: f64) -> f64 {
    if previous > 0.0 {
        delta / previous * 100.0
    } else {
        0.0
    }
}

/// Year-over-year deltas of one package series
///
/// The series is sorted by year first. The first year has `None` deltas.
/// `needs_adjustment_badge` flags years whose installment plan does not add
/// up to the total.
pub fn compute_yearly_deltas(series: &[PackageYearPrice]) -> Vec<PackageYearDelta> {
    let mut sorted = series.to_vec();
    sorted.sort_by_key(|p| p.year);

    sorted
        .iter()
        .enumerate()
        .map(|(i, current)| {
            let previous = i.checked_sub(1).map(|p| &sorted[p]);

            let delta_total = previous.map(|prev| current.total - prev.total);
            let delta_entry = previous.map(|prev| current.entry - prev.entry);

            PackageYearDelta {
                year: current.year,
                total: current.total,
                entry: current.entry,
                installments_count: current.installments_count,
                installment_value: current.installment_value,
                balance: current.balance(),
                calculated_total: current.calculated_total(),
                needs_adjustment_badge: current.needs_adjustment(),
                delta_total_rs: delta_total,
                delta_total_pct: previous
                    .zip(delta_total)
                    .map(|(prev, delta)| pct_change(delta, prev.total)),
                delta_entry_rs: delta_entry,
                delta_entry_pct: previous
                    .zip(delta_entry)
                    .map(|(prev, delta)| pct_change(delta, prev.entry)),
            }
        })
        .collect()
}

/// Year-over-year deltas of the extra photo unit price
pub fn compute_extra_photo_deltas(series: &[ExtraPhotoYearPrice]) -> Vec<ExtraPhotoYearDelta> {
    let mut sorted = series.to_vec();
    sorted.sort_by_key(|p| p.year);

    sorted
        .iter()
        .enumerate()
        .map(|(i, current)| {
            let previous = i.checked_sub(1).map(|p| &sorted[p]);
            let delta = previous.map(|prev| current.unit_price - prev.unit_price);

            ExtraPhotoYearDelta {
                year: current.year,
                unit_price: current.unit_price,
                delta_unit_rs: delta,
                delta_unit_pct: previous
                    .zip(delta)
                    .map(|(prev, delta)| pct_change(delta, prev.unit_price)),
            }
        })
        .collect()
}

/// Sorted union of years, so every series can be drawn on one axis
pub fn build_aligned_years(years: impl IntoIterator<Item = i32>) -> Vec<i32> {
    years.into_iter().collect::<BTreeSet<_>>().into_iter().collect()
}
