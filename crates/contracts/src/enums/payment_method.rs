use serde::{Deserialize, Serialize};
use std::fmt;

/// Способ оплаты первого взноса (entry)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Pix,
    Cartao,
    Dinheiro,
    Transferencia,
}

impl PaymentMethod {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Pix => "pix",
            PaymentMethod::Cartao => "cartao",
            PaymentMethod::Dinheiro => "dinheiro",
            PaymentMethod::Transferencia => "transferencia",
        }
    }

    /// Order used by the synthetic data generator when drawing a method.
    pub fn all() -> Vec<PaymentMethod> {
        vec![
            PaymentMethod::Pix,
            PaymentMethod::Cartao,
            PaymentMethod::Dinheiro,
            PaymentMethod::Transferencia,
        ]
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
