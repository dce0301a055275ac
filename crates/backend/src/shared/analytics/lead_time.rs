use contracts::domain::a001_order::Order;
use contracts::shared::analytics::{LeadTimeBucket, LeadTimeStats};

use super::math::round_half_up;

/// Inclusive day ranges, the last one open-ended
static BUCKETS: [(&str, i64, Option<i64>); 5] = [
    ("0–3", 0, Some(3)),
    ("4–7", 4, Some(7)),
    ("8–14", 8, Some(14)),
    ("15–30", 15, Some(30)),
    ("31+", 31, None),
];

pub fn bucket_labels() -> impl Iterator<Item = &'static str> {
    BUCKETS.iter().map(|(label, _, _)| *label)
}

/// Lead time statistics over orders with a booked session
///
/// Orders without `session_at` are skipped, not counted as zero. The median
/// is `sorted[n / 2]`. Without any qualifying order the result is all zeros
/// with no buckets at all.
pub fn lead_time_stats(orders: &[&Order]) -> LeadTimeStats {
    let mut diffs: Vec<i64> = orders.iter().filter_map(|o| o.lead_time_days()).collect();
    if diffs.is_empty() {
        return LeadTimeStats::default();
    }
    diffs.sort_unstable();

    let avg = round_half_up(diffs.iter().sum::<i64>() as f64 / diffs.len() as f64) as i64;
    let median = diffs[diffs.len() / 2];

    let buckets = BUCKETS
        .iter()
        .map(|(label, min, max)| LeadTimeBucket {
            range: label.to_string(),
            count: diffs
                .iter()
                .filter(|&&d| d >= *min && max.map_or(true, |max| d <= max))
                .count() as u32,
        })
        .collect();

    LeadTimeStats { avg, median, buckets }
}

/// Count of one range, 0 when the stats have no buckets
pub fn bucket_count(stats: &LeadTimeStats, range: &str) -> u32 {
    stats
        .buckets
        .iter()
        .find(|b| b.range == range)
        .map(|b| b.count)
        .unwrap_or(0)
}
