use serde::{Deserialize, Serialize};

/// Статус заказа в воронке кампании
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "reservou")]
    Reserved,
    #[serde(rename = "agendou")]
    Scheduled,
    #[serde(rename = "fotografou")]
    Photographed,
    #[serde(rename = "pos-venda")]
    PostSale,
}
