use chrono::{Datelike, Duration, NaiveDate};
use contracts::dashboards::d400_campaign_snapshot::{RulerMetrics, RulerRow, RulerYear};
use contracts::domain::a001_order::Order;
use std::collections::BTreeMap;

use super::calendar::{day_label, equivalent_date, MonthDay};
use super::distribution::sum_revenue;
use super::filters::{filter_by_date_range, filter_by_year};

/// Days shown around today
pub const DEFAULT_OFFSETS: [i64; 7] = [-3, -2, -1, 0, 1, 2, 3];

/// "Today" ruler: each day around `today` compared across `years`
///
/// For every offset and year: orders created that same month/day, their
/// packages, and the campaign accumulation from `campaign_start` through that
/// day. Days after `today` have no metrics in `today`'s own year.
pub fn today_ruler(
    orders: &[Order],
    today: NaiveDate,
    campaign_start: MonthDay,
    years: &[i32],
    offsets: &[i64],
) -> Vec<RulerRow> {
    let by_year: Vec<(i32, Vec<&Order>)> = years
        .iter()
        .map(|&year| (year, filter_by_year(orders, year)))
        .collect();

    offsets
        .iter()
        .map(|&offset| {
            let day = today + Duration::days(offset);
            let columns = by_year
                .iter()
                .map(|(year, year_orders)| RulerYear {
                    year: *year,
                    metrics: if *year == today.year() && offset > 0 {
                        None
                    } else {
                        Some(day_metrics(year_orders, equivalent_date(day, *year), campaign_start))
                    },
                })
                .collect();

            RulerRow {
                offset,
                label: offset_label(offset),
                date: day_label(day),
                years: columns,
            }
        })
        .collect()
}

fn day_metrics(year_orders: &[&Order], target: NaiveDate, campaign_start: MonthDay) -> RulerMetrics {
    let daily = filter_by_date_range(year_orders, target, target);

    let mut packages = BTreeMap::new();
    for o in &daily {
        *packages.entry(o.package_name).or_insert(0) += 1;
    }

    let accumulated = filter_by_date_range(year_orders, campaign_start.in_year(target.year()), target);

    RulerMetrics {
        daily: daily.len() as u32,
        accum_total: accumulated.len() as u32,
        accum_revenue: sum_revenue(&accumulated),
        packages,
    }
}

fn offset_label(offset: i64) -> String {
    match offset {
        0 => "Hoje".to_string(),
        o if o > 0 => format!("+{}", o),
        o => o.to_string(),
    }
}
