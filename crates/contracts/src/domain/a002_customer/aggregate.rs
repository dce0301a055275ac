use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Клиент студии
///
/// Orders point to customers through `customer_id`; there is no reverse list,
/// it is always re-derived by scanning orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    /// WhatsApp number or other messenger handle
    #[serde(alias = "whatsapp")]
    pub contact_handle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl Customer {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}
