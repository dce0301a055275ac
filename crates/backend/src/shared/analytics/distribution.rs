use contracts::domain::a001_order::Order;
use contracts::shared::analytics::{PackageShare, PaymentShare};

use super::math::round_half_up;

/// Orders and revenue per package, in first-seen order
pub fn package_distribution(orders: &[&Order]) -> Vec<PackageShare> {
    let mut shares: Vec<PackageShare> = Vec::new();
    for o in orders {
        match shares.iter_mut().find(|s| s.name == o.package_name) {
            Some(share) => {
                share.count += 1;
                share.revenue += o.total_amount;
            }
            None => shares.push(PackageShare {
                name: o.package_name,
                count: 1,
                revenue: o.total_amount,
            }),
        }
    }
    shares
}

/// Orders per entry payment method, in first-seen order
pub fn payment_distribution(orders: &[&Order]) -> Vec<PaymentShare> {
    let mut shares: Vec<PaymentShare> = Vec::new();
    for o in orders {
        match shares.iter_mut().find(|s| s.method == o.entry_payment_method) {
            Some(share) => share.count += 1,
            None => shares.push(PaymentShare {
                method: o.entry_payment_method,
                count: 1,
            }),
        }
    }
    shares
}

pub fn sum_revenue(orders: &[&Order]) -> f64 {
    orders.iter().map(|o| o.total_amount).sum()
}

/// Average order total, rounded; 0 without orders
pub fn avg_ticket(orders: &[&Order]) -> f64 {
    if orders.is_empty() {
        return 0.0;
    }
    round_half_up(sum_revenue(orders) / orders.len() as f64)
}
