use contracts::dashboards::d401_pricing_adjustments::{
    ExtraPhotoVariation, ExtraPhotoYearDelta, PackageAdjustmentReport, PackageYear, PriceIncrease,
    PricingInterval, PricingSummary,
};
use contracts::enums::PackageName;

/// Inclusive year range of an interval, counted back from the latest year
///
/// `None` when there is no year at all.
pub fn interval_bounds(years: &[i32], interval: PricingInterval) -> Option<(i32, i32)> {
    let min = *years.iter().min()?;
    let max = *years.iter().max()?;
    let from = match interval {
        PricingInterval::All => min,
        PricingInterval::Last2 => max - 1,
        PricingInterval::Last3 => max - 2,
    };
    Some((from, max))
}

/// Headline numbers of the rows shown
///
/// Largest increases only consider positive changes; on a tie the first
/// package (then the earliest year) wins.
pub fn summarize(
    packages: &[PackageAdjustmentReport],
    extra_photo: &[ExtraPhotoYearDelta],
) -> PricingSummary {
    let mut summary = PricingSummary::default();

    for report in packages {
        for row in &report.rows {
            if let Some(pct) = row.delta_total_pct {
                keep_largest(&mut summary.largest_increase_pct, report.package, row.year, pct);
            }
            if let Some(rs) = row.delta_total_rs {
                keep_largest(&mut summary.largest_increase_rs, report.package, row.year, rs);
            }
            if row.delta_total_rs == Some(0.0) {
                summary.no_adjustment.push(PackageYear {
                    package: report.package,
                    year: row.year,
                });
            }
        }
    }

    summary.extra_photo_variation = match extra_photo {
        [_, .., last] => last
            .delta_unit_rs
            .zip(last.delta_unit_pct)
            .map(|(delta_rs, delta_pct)| ExtraPhotoVariation {
                year: last.year,
                delta_rs,
                delta_pct,
            }),
        _ => None,
    };

    summary
}

fn keep_largest(best: &mut Option<PriceIncrease>, package: PackageName, year: i32, value: f64) {
    if value > best.map_or(0.0, |b| b.value) {
        *best = Some(PriceIncrease {
            package,
            year,
            value,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::pricing::deltas::{compute_extra_photo_deltas, compute_yearly_deltas};
    use contracts::domain::a003_package_pricing::{ExtraPhotoYearPrice, PackageYearPrice};

    fn price(year: i32, total: f64) -> PackageYearPrice {
        PackageYearPrice {
            year,
            total,
            entry: total,
            installments_count: 0,
            installment_value: 0.0,
        }
    }

    fn report(package: PackageName, prices: &[PackageYearPrice]) -> PackageAdjustmentReport {
        PackageAdjustmentReport {
            package,
            rows: compute_yearly_deltas(prices),
            total_cagr: None,
        }
    }

    #[test]
    fn test_interval_bounds() {
        let years = [2024, 2022, 2026, 2025];
        assert_eq!(interval_bounds(&years, PricingInterval::All), Some((2022, 2026)));
        assert_eq!(interval_bounds(&years, PricingInterval::Last2), Some((2025, 2026)));
        assert_eq!(interval_bounds(&years, PricingInterval::Last3), Some((2024, 2026)));
        assert_eq!(interval_bounds(&[], PricingInterval::Last2), None);
    }

    #[test]
    fn test_largest_increases() {
        let packages = [
            report(
                PackageName::MamaeCoruja,
                &[price(2024, 100.0), price(2025, 150.0), price(2026, 150.0)],
            ),
            report(PackageName::SuperMae, &[price(2025, 400.0), price(2026, 480.0)]),
        ];
        let summary = summarize(&packages, &[]);

        assert_eq!(
            summary.largest_increase_pct,
            Some(PriceIncrease {
                package: PackageName::MamaeCoruja,
                year: 2025,
                value: 50.0,
            })
        );
        assert_eq!(
            summary.largest_increase_rs,
            Some(PriceIncrease {
                package: PackageName::SuperMae,
                year: 2026,
                value: 80.0,
            })
        );
    }

    #[test]
    fn test_no_increase_at_all() {
        let packages = [report(
            PackageName::SuperMae,
            &[price(2025, 400.0), price(2026, 380.0)],
        )];
        let summary = summarize(&packages, &[]);
        assert_eq!(summary.largest_increase_pct, None);
        assert_eq!(summary.largest_increase_rs, None);
        assert!(summary.no_adjustment.is_empty());
    }

    #[test]
    fn test_years_without_adjustment() {
        let packages = [report(
            PackageName::SuperMae,
            &[price(2023, 348.0), price(2024, 348.0), price(2025, 419.0)],
        )];
        let summary = summarize(&packages, &[]);
        assert_eq!(
            summary.no_adjustment,
            vec![PackageYear {
                package: PackageName::SuperMae,
                year: 2024,
            }]
        );
    }

    #[test]
    fn test_extra_photo_variation_uses_last_row() {
        let rows = compute_extra_photo_deltas(&[
            ExtraPhotoYearPrice { year: 2025, unit_price: 16.0 },
            ExtraPhotoYearPrice { year: 2026, unit_price: 20.0 },
        ]);
        let variation = summarize(&[], &rows).extra_photo_variation;
        assert_eq!(
            variation,
            Some(ExtraPhotoVariation {
                year: 2026,
                delta_rs: 4.0,
                delta_pct: 25.0,
            })
        );

        assert_eq!(summarize(&[], &rows[..1]).extra_photo_variation, None);
    }
}
