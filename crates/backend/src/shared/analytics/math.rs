/// Round to the nearest integer, halves toward +∞ (2.5 → 3, -2.5 → -2)
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// `min(100, round(current / target * 100))`, 0 when there is no target
pub fn progress_pct(current: f64, target: f64) -> u32 {
    if target <= 0.0 {
        return 0;
    }
    let pct = round_half_up(current / target * 100.0);
    pct.clamp(0.0, 100.0) as u32
}

/// `max(0, target - current)`
pub fn remaining(current: f64, target: f64) -> f64 {
    (target - current).max(0.0)
}

/// `ceil(remaining / days_left)`, 0 when the deadline has passed
pub fn pace_per_day(remaining: f64, days_left: i64) -> u32 {
    if days_left <= 0 || remaining <= 0.0 {
        return 0;
    }
    (remaining / days_left as f64).ceil() as u32
}
