//! Pure aggregations over in-memory orders
//!
//! Nothing here reads the clock or global state: the reference date is always
//! a parameter, and the same input gives the same output.

pub mod calendar;
pub mod day_series;
pub mod distribution;
pub mod filters;
pub mod lead_time;
pub mod math;
pub mod ruler;
pub mod segments;

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{NaiveDate, NaiveDateTime};
    use contracts::domain::a001_order::Order;
    use contracts::enums::{OrderStatus, PackageName, PaymentMethod};

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, 0, 0).unwrap()
    }

    /// Order created at 10:00 on the given day, no session
    pub fn order(id: &str, year: i32, m: u32, d: u32, package: PackageName) -> Order {
        Order {
            id: id.to_string(),
            year,
            customer_id: format!("c-{}", id),
            created_at: at(year, m, d, 10),
            session_at: None,
            package_name: package,
            entry_amount: 100.0,
            total_amount: 200.0,
            entry_payment_method: PaymentMethod::Pix,
            status: OrderStatus::Reserved,
        }
    }

    pub fn with_session_after(mut o: Order, days: i64) -> Order {
        o.session_at = Some(o.created_at + chrono::Duration::days(days));
        o.status = OrderStatus::Photographed;
        o
    }

    pub fn refs(orders: &[Order]) -> Vec<&Order> {
        orders.iter().collect()
    }
}
