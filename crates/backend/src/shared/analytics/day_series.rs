use chrono::{Datelike, NaiveDate};
use contracts::dashboards::d400_campaign_snapshot::{PeakDay, SalesMetric};
use contracts::domain::a001_order::Order;
use contracts::shared::analytics::DayCount;
use contracts::shared::series::{AmountPoint, SeriesPoint};
use std::collections::BTreeMap;

use super::calendar::{day_label, days_inclusive};
use super::filters::filter_by_year;

/// Orders per creation day; only days that have orders
pub fn count_by_day(orders: &[&Order]) -> BTreeMap<NaiveDate, u32> {
    let mut counts = BTreeMap::new();
    for o in orders {
        *counts.entry(o.created_date()).or_insert(0) += 1;
    }
    counts
}

/// Orders of `year` for each day of `[from, to]`, zero-filled
pub fn daily_counts(orders: &[Order], year: i32, from: NaiveDate, to: NaiveDate) -> Vec<DayCount> {
    let counts = count_by_day(&filter_by_year(orders, year));
    days_inclusive(from, to)
        .map(|date| DayCount {
            date,
            count: counts.get(&date).copied().unwrap_or(0),
        })
        .collect()
}

/// Year-over-year daily series aligned by month/day
///
/// One row per day of `[from, to]`, labeled "dd/MM". Each row holds, for every
/// year in `years` (same order), the orders of that year created on the same
/// month/day of that year. 29/02 counts 0 for years that do not have it.
pub fn build_day_series(orders: &[Order], from: NaiveDate, to: NaiveDate, years: &[i32]) -> Vec<SeriesPoint> {
    let per_year: Vec<(i32, BTreeMap<NaiveDate, u32>)> = years
        .iter()
        .map(|&year| (year, count_by_day(&filter_by_year(orders, year))))
        .collect();

    days_inclusive(from, to)
        .map(|day| {
            let mut point = SeriesPoint::new(day_label(day));
            for (year, counts) in &per_year {
                let count = NaiveDate::from_ymd_opt(*year, day.month(), day.day())
                    .and_then(|aligned| counts.get(&aligned).copied())
                    .unwrap_or(0);
                point.push(*year, count);
            }
            point
        })
        .collect()
}

/// Same alignment as `build_day_series`, measured by order count or by revenue
pub fn build_day_series_by(
    orders: &[Order],
    from: NaiveDate,
    to: NaiveDate,
    years: &[i32],
    metric: SalesMetric,
) -> Vec<AmountPoint> {
    let per_year: Vec<(i32, BTreeMap<NaiveDate, f64>)> = years
        .iter()
        .map(|&year| {
            let mut amounts = BTreeMap::new();
            for o in filter_by_year(orders, year) {
                let amount = match metric {
                    SalesMetric::Orders => 1.0,
                    SalesMetric::Revenue => o.total_amount,
                };
                *amounts.entry(o.created_date()).or_insert(0.0) += amount;
            }
            (year, amounts)
        })
        .collect();

    days_inclusive(from, to)
        .map(|day| {
            let mut point = AmountPoint::new(day_label(day));
            for (year, amounts) in &per_year {
                let value = NaiveDate::from_ymd_opt(*year, day.month(), day.day())
                    .and_then(|aligned| amounts.get(&aligned).copied())
                    .unwrap_or(0.0);
                point.push(*year, value);
            }
            point
        })
        .collect()
}

/// Running sum per year, row by row
pub fn accumulate(points: &mut [AmountPoint]) {
    let mut totals: BTreeMap<i32, f64> = BTreeMap::new();
    for point in points.iter_mut() {
        for entry in point.values.iter_mut() {
            let total = totals.entry(entry.year).or_insert(0.0);
            *total += entry.value;
            entry.value = *total;
        }
    }
}

/// Busiest "dd/MM" days, count descending; ties keep first-seen order
pub fn peak_days(orders: &[&Order], limit: usize) -> Vec<PeakDay> {
    busy_days(orders, 1, limit)
}

/// Like `peak_days`, dropping days with fewer than `min_count` orders
pub fn busy_days(orders: &[&Order], min_count: u32, limit: usize) -> Vec<PeakDay> {
    let mut days: Vec<PeakDay> = Vec::new();
    for o in orders {
        let label = day_label(o.created_date());
        match days.iter_mut().find(|d| d.date == label) {
            Some(day) => day.count += 1,
            None => days.push(PeakDay { date: label, count: 1 }),
        }
    }
    days.retain(|d| d.count >= min_count);
    days.sort_by(|a, b| b.count.cmp(&a.count));
    days.truncate(limit);
    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::analytics::filters::filter_by_date_range;
    use crate::shared::analytics::test_support::{date, order, refs};
    use contracts::enums::PackageName;

    #[test]
    fn test_same_day_in_two_years_lands_on_one_row() {
        let orders = vec![
            order("1", 2026, 2, 10, PackageName::MamaeCoruja),
            order("2", 2025, 2, 10, PackageName::MamaeCoruja),
        ];

        let series = build_day_series(&orders, date(2026, 2, 1), date(2026, 2, 28), &[2025, 2026]);

        assert_eq!(series.len(), 28);
        for point in &series {
            let expected = if point.label == "10/02" { 1 } else { 0 };
            assert_eq!(point.value_for(2025), Some(expected), "row {}", point.label);
            assert_eq!(point.value_for(2026), Some(expected), "row {}", point.label);
        }
        assert_eq!(series[9].label, "10/02");
        assert_eq!(series[9].values[0].year, 2025);
        assert_eq!(series[9].values[1].year, 2026);
    }

    #[test]
    fn test_column_sum_matches_orders_in_range() {
        let orders = vec![
            order("1", 2025, 1, 31, PackageName::SuperMae),
            order("2", 2025, 2, 1, PackageName::SuperMae),
            order("3", 2025, 2, 1, PackageName::MamaeCoruja),
            order("4", 2025, 2, 14, PackageName::SuperMae),
            order("5", 2025, 3, 2, PackageName::SuperMae),
            order("6", 2026, 2, 3, PackageName::SuperMae),
        ];
        let from = date(2025, 2, 1);
        let to = date(2025, 2, 28);

        let series = build_day_series(&orders, from, to, &[2025]);
        let total: u32 = series.iter().filter_map(|p| p.value_for(2025)).sum();

        let year = filter_by_year(&orders, 2025);
        assert_eq!(total as usize, filter_by_date_range(&year, from, to).len());
        assert_eq!(total, 3);
    }

    #[test]
    fn test_leap_day_row_is_zero_in_non_leap_year() {
        let orders = vec![
            order("1", 2024, 2, 29, PackageName::SuperMae),
            order("2", 2025, 2, 28, PackageName::SuperMae),
        ];
        let series = build_day_series(&orders, date(2024, 2, 28), date(2024, 3, 1), &[2024, 2025]);

        let labels: Vec<_> = series.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["28/02", "29/02", "01/03"]);
        assert_eq!(series[0].value_for(2025), Some(1));
        assert_eq!(series[1].value_for(2024), Some(1));
        assert_eq!(series[1].value_for(2025), Some(0));
    }

    #[test]
    fn test_daily_counts_zero_fill() {
        let orders = vec![
            order("1", 2026, 2, 2, PackageName::SuperMae),
            order("2", 2026, 2, 2, PackageName::SuperMae),
            order("3", 2025, 2, 3, PackageName::SuperMae),
        ];
        let counts = daily_counts(&orders, 2026, date(2026, 2, 1), date(2026, 2, 3));
        let values: Vec<_> = counts.iter().map(|c| c.count).collect();
        assert_eq!(values, vec![0, 2, 0]);
    }

    #[test]
    fn test_count_by_day_skips_empty_days() {
        let orders = vec![
            order("1", 2026, 2, 2, PackageName::SuperMae),
            order("2", 2026, 2, 5, PackageName::SuperMae),
        ];
        let counts = count_by_day(&refs(&orders));
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.get(&date(2026, 2, 5)), Some(&1));
    }

    #[test]
    fn test_peak_days_order() {
        let orders = vec![
            order("1", 2025, 4, 3, PackageName::SuperMae),
            order("2", 2025, 4, 1, PackageName::SuperMae),
            order("3", 2025, 4, 1, PackageName::SuperMae),
            order("4", 2025, 4, 2, PackageName::SuperMae),
            order("5", 2025, 4, 2, PackageName::SuperMae),
            order("6", 2025, 4, 9, PackageName::SuperMae),
        ];
        let peaks = peak_days(&refs(&orders), 3);
        let got: Vec<_> = peaks.iter().map(|p| (p.date.as_str(), p.count)).collect();
        assert_eq!(got, vec![("01/04", 2), ("02/04", 2), ("03/04", 1)]);
    }

    #[test]
    fn test_busy_days_need_two_orders() {
        let orders = vec![
            order("1", 2025, 4, 1, PackageName::SuperMae),
            order("2", 2025, 4, 1, PackageName::SuperMae),
            order("3", 2025, 4, 2, PackageName::SuperMae),
            order("4", 2025, 4, 3, PackageName::SuperMae),
            order("5", 2025, 4, 3, PackageName::SuperMae),
            order("6", 2025, 4, 3, PackageName::SuperMae),
        ];
        let busy = busy_days(&refs(&orders), 2, 10);
        let got: Vec<_> = busy.iter().map(|p| (p.date.as_str(), p.count)).collect();
        assert_eq!(got, vec![("03/04", 3), ("01/04", 2)]);
    }

    #[test]
    fn test_revenue_series_sums_totals() {
        let mut big = order("2", 2026, 2, 2, PackageName::SuperMae);
        big.total_amount = 450.0;
        let orders = vec![
            order("1", 2026, 2, 2, PackageName::MamaeCoruja),
            big,
            order("3", 2025, 2, 3, PackageName::SuperMae),
        ];

        let series = build_day_series_by(
            &orders,
            date(2026, 2, 1),
            date(2026, 2, 3),
            &[2025, 2026],
            SalesMetric::Revenue,
        );
        assert_eq!(series[1].value_for(2026), Some(650.0));
        assert_eq!(series[2].value_for(2025), Some(200.0));
        assert_eq!(series[0].value_for(2026), Some(0.0));

        let counts = build_day_series_by(
            &orders,
            date(2026, 2, 1),
            date(2026, 2, 3),
            &[2025, 2026],
            SalesMetric::Orders,
        );
        assert_eq!(counts[1].value_for(2026), Some(2.0));
    }

    #[test]
    fn test_accumulate_is_running_sum_per_year() {
        let orders = vec![
            order("1", 2026, 2, 1, PackageName::SuperMae),
            order("2", 2026, 2, 3, PackageName::SuperMae),
            order("3", 2026, 2, 3, PackageName::SuperMae),
            order("4", 2025, 2, 2, PackageName::SuperMae),
        ];
        let mut series = build_day_series_by(
            &orders,
            date(2026, 2, 1),
            date(2026, 2, 4),
            &[2025, 2026],
            SalesMetric::Orders,
        );
        accumulate(&mut series);

        let y2026: Vec<_> = series.iter().filter_map(|p| p.value_for(2026)).collect();
        let y2025: Vec<_> = series.iter().filter_map(|p| p.value_for(2025)).collect();
        assert_eq!(y2026, vec![1.0, 1.0, 3.0, 3.0]);
        assert_eq!(y2025, vec![0.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_utc_timestamp_lands_on_written_day() {
        let mut late = order("1", 2026, 2, 10, PackageName::SuperMae);
        late.created_at = date(2026, 2, 10).and_hms_opt(1, 0, 0).unwrap();
        let series = build_day_series(&[late], date(2026, 2, 9), date(2026, 2, 10), &[2026]);
        assert_eq!(series[0].value_for(2026), Some(0));
        assert_eq!(series[1].label, "10/02");
        assert_eq!(series[1].value_for(2026), Some(1));
    }
}
