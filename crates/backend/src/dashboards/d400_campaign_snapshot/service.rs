use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate};
use contracts::dashboards::d400_campaign_snapshot::{
    CampaignCharts, CampaignGoals, CampaignInsights, CampaignKpis, CampaignProjection,
    CampaignSnapshot, CampaignSnapshotRequest, CampaignWindow, GoalProgress, LeadTimeChart,
    LeadTimeSummary, PackageGoal, PackageRollup, SalesMetric, SalesSeries, SalesView,
    YearPeakDays,
};
use contracts::domain::a001_order::Order;
use contracts::domain::a003_package_pricing::PricingTable;
use contracts::enums::PackageName;
use contracts::shared::analytics::LeadTimeStats;
use contracts::shared::series::{SeriesPoint, YearValue};

use crate::dashboards::resolve_today;
use crate::shared::analytics::calendar::{equivalent_date, equivalent_range, MonthDay};
use crate::shared::analytics::day_series::{
    accumulate, build_day_series, build_day_series_by, busy_days, daily_counts, peak_days,
};
use crate::shared::analytics::distribution::{
    avg_ticket, package_distribution, payment_distribution, sum_revenue,
};
use crate::shared::analytics::filters::{filter_by_date_range, filter_by_year};
use crate::shared::analytics::lead_time::{bucket_count, bucket_labels, lead_time_stats};
use crate::shared::analytics::math::{pace_per_day, progress_pct, remaining, round_half_up};
use crate::shared::analytics::ruler::{today_ruler, DEFAULT_OFFSETS};
use crate::shared::config::{get_config, CampaignConfig, GoalsConfig};
use crate::shared::data::fixtures::get_store;

const PEAK_DAYS_LIMIT: usize = 5;
const FORECAST_DAYS: i64 = 7;
const BUSY_DAY_MIN_ORDERS: u32 = 2;
const BUSY_DAYS_LIMIT: usize = 10;
/// Feb to May, roughly
const PROJECTION_DAYS: f64 = 120.0;

/// Get campaign snapshot for the requested (or configured) day
pub fn get_campaign_snapshot(request: CampaignSnapshotRequest) -> Result<CampaignSnapshot> {
    let config = get_config()?;
    let store = get_store()?;
    let today = resolve_today(request.today, &config.campaign);

    Ok(build_campaign_snapshot(
        &store.orders,
        &store.pricing,
        &config.campaign,
        &config.goals,
        today,
        request.metric,
        request.view,
    ))
}

/// Assemble the whole dashboard from orders, prices and a reference day
///
/// Compares the current campaign with the two previous ones on the same
/// month/day. Deterministic: no clock reads, no randomness, stable ordering.
pub fn build_campaign_snapshot(
    orders: &[Order],
    pricing: &PricingTable,
    campaign: &CampaignConfig,
    goals: &GoalsConfig,
    today: NaiveDate,
    metric: SalesMetric,
    view: SalesView,
) -> CampaignSnapshot {
    let current_year = today.year();
    let previous_year = current_year - 1;
    let years = [current_year - 2, previous_year, current_year];

    let start_date = campaign.start.in_year(current_year);
    let target_date = campaign.target.in_year(current_year);
    let days_left = (target_date - today).num_days().max(0);
    let active_days = ((today - start_date).num_days() + 1).max(0);

    // === Campaign-to-date orders per year ===
    let campaign_orders: Vec<(i32, Vec<&Order>)> = years
        .iter()
        .map(|&year| (year, campaign_to_date(orders, campaign.start, today, year)))
        .collect();
    let current: &[&Order] = campaign_orders
        .iter()
        .find(|(year, _)| *year == current_year)
        .map(|(_, o)| o.as_slice())
        .unwrap_or_default();

    let revenue = sum_revenue(current);
    let lead_time_current = lead_time_stats(current);

    let order_counts: Vec<YearValue> = campaign_orders
        .iter()
        .map(|(year, o)| YearValue::new(*year, o.len() as u32))
        .collect();

    let kpis = CampaignKpis {
        orders: order_counts.clone(),
        revenue,
        avg_ticket: avg_ticket(current),
        lead_time_median: lead_time_current.median,
    };

    // === Packages on sale this year ===
    let packages = pricing
        .packages
        .iter()
        .filter_map(|series| {
            let price = pricing.price_for(series.package, current_year)?;
            Some(PackageRollup {
                name: series.package,
                price: price.total,
                entry: price.entry,
                installments_count: price.installments_count,
                installment_value: price.installment_value,
                sold: campaign_orders
                    .iter()
                    .map(|(year, o)| YearValue::new(*year, count_package(o, series.package)))
                    .collect(),
                revenue: current
                    .iter()
                    .filter(|o| o.package_name == series.package)
                    .map(|o| o.total_amount)
                    .sum(),
            })
        })
        .collect();

    // === Goals ===
    let orders_goal = goal(current.len() as f64, goals.orders);
    let campaign_goals = CampaignGoals {
        orders: orders_goal,
        orders_pace_per_day: pace_per_day(orders_goal.remaining, days_left),
        by_package: goals
            .packages
            .iter()
            .map(|g| PackageGoal {
                name: g.name,
                progress: goal(f64::from(count_package(current, g.name)), g.target),
            })
            .collect(),
        revenue: goal(revenue, goals.revenue),
        sessions: goal(
            current.iter().filter(|o| o.has_session()).count() as f64,
            goals.sessions,
        ),
        previous_campaigns: order_counts
            .iter()
            .copied()
            .filter(|v| v.year != current_year)
            .collect(),
    };

    // === Insights from the previous full campaigns ===
    let insight_years = [previous_year, current_year - 2];
    let insights = CampaignInsights {
        peak_days: insight_years
            .iter()
            .map(|&year| YearPeakDays {
                year,
                days: peak_days(&filter_by_year(orders, year), PEAK_DAYS_LIMIT),
            })
            .collect(),
        next_7_days: insight_years
            .iter()
            .map(|&year| {
                let from = equivalent_date(today, year);
                let to = from + Duration::days(FORECAST_DAYS - 1);
                let count = daily_counts(orders, year, from, to).iter().map(|d| d.count).sum();
                YearValue::new(year, count)
            })
            .collect(),
        projection: project_campaign(
            filter_by_year(orders, current_year).len(),
            active_days,
            filter_by_year(orders, previous_year).len(),
        ),
        busy_days: busy_days(
            &filter_by_year(orders, previous_year),
            BUSY_DAY_MIN_ORDERS,
            BUSY_DAYS_LIMIT,
        ),
    };

    // === Charts ===
    let compared = [previous_year, current_year];
    let lead_time_previous = lead_time_stats(&filter_by_year(orders, previous_year));

    let mut sales_points = build_day_series_by(orders, start_date, today, &years, metric);
    if view == SalesView::Accumulated {
        accumulate(&mut sales_points);
    }

    let charts = CampaignCharts {
        day_series: build_day_series(orders, start_date, today, &years),
        sales_series: SalesSeries {
            metric,
            view,
            points: sales_points,
        },
        package_comparison: package_comparison(orders, &compared),
        lead_time: LeadTimeChart {
            stats: vec![
                lead_time_summary(previous_year, &lead_time_previous),
                lead_time_summary(current_year, &lead_time_current),
            ],
            buckets: bucket_labels()
                .map(|range| {
                    let mut point = SeriesPoint::new(range);
                    point.push(previous_year, bucket_count(&lead_time_previous, range));
                    point.push(current_year, bucket_count(&lead_time_current, range));
                    point
                })
                .collect(),
        },
        payment_distribution: payment_comparison(orders, &compared),
    };

    CampaignSnapshot {
        today,
        campaign: CampaignWindow {
            name: format!("{} {}", campaign.name, current_year),
            start_date,
            target_date,
            days_left,
            active_days,
        },
        kpis,
        packages,
        goals: campaign_goals,
        insights,
        charts,
        ruler: today_ruler(orders, today, campaign.start, &years, &DEFAULT_OFFSETS),
    }
}

/// Orders of `year` from the campaign start up to today's month/day
fn campaign_to_date(orders: &[Order], start: MonthDay, today: NaiveDate, year: i32) -> Vec<&Order> {
    let (from, to) = equivalent_range(start.in_year(today.year()), today, year);
    filter_by_date_range(&filter_by_year(orders, year), from, to)
}

/// Current-year daily average carried over the whole campaign
fn project_campaign(
    current_total: usize,
    active_days: i64,
    previous_total: usize,
) -> CampaignProjection {
    let avg_daily = current_total as f64 / active_days.max(1) as f64;
    let projected = round_half_up(avg_daily * PROJECTION_DAYS) as u32;
    let previous_total = previous_total as u32;
    let change_pct = (previous_total > 0).then(|| {
        let previous = f64::from(previous_total);
        round_half_up((f64::from(projected) - previous) / previous * 100.0) as i64
    });

    CampaignProjection {
        avg_daily,
        projected,
        previous_total,
        change_pct,
    }
}

fn count_package(orders: &[&Order], package: PackageName) -> u32 {
    orders.iter().filter(|o| o.package_name == package).count() as u32
}

fn goal(current: f64, target: f64) -> GoalProgress {
    GoalProgress {
        target,
        current,
        remaining: remaining(current, target),
        progress_pct: progress_pct(current, target),
    }
}

fn lead_time_summary(year: i32, stats: &LeadTimeStats) -> LeadTimeSummary {
    LeadTimeSummary {
        year,
        avg: stats.avg,
        median: stats.median,
    }
}

/// Package counts per year over full years; packages in first-seen order
fn package_comparison(orders: &[Order], years: &[i32]) -> Vec<SeriesPoint> {
    let per_year: Vec<_> = years
        .iter()
        .map(|&year| (year, package_distribution(&filter_by_year(orders, year))))
        .collect();

    let mut names: Vec<PackageName> = Vec::new();
    for share in per_year.iter().flat_map(|(_, shares)| shares) {
        if !names.contains(&share.name) {
            names.push(share.name);
        }
    }

    names
        .into_iter()
        .map(|name| {
            let mut point = SeriesPoint::new(name.display_name());
            for (year, shares) in &per_year {
                let count = shares.iter().find(|s| s.name == name).map_or(0, |s| s.count);
                point.push(*year, count);
            }
            point
        })
        .collect()
}

/// Payment method counts per year over full years
fn payment_comparison(orders: &[Order], years: &[i32]) -> Vec<SeriesPoint> {
    let per_year: Vec<_> = years
        .iter()
        .map(|&year| (year, payment_distribution(&filter_by_year(orders, year))))
        .collect();

    let mut methods = Vec::new();
    for share in per_year.iter().flat_map(|(_, shares)| shares) {
        if !methods.contains(&share.method) {
            methods.push(share.method);
        }
    }

    methods
        .into_iter()
        .map(|method| {
            let mut point = SeriesPoint::new(method.code());
            for (year, shares) in &per_year {
                let count = shares.iter().find(|s| s.method == method).map_or(0, |s| s.count);
                point.push(*year, count);
            }
            point
        })
        .collect()
}
