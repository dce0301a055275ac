use serde::{Deserialize, Serialize};
use std::fmt;

/// Пакеты фотосессии, продаваемые в кампании
///
/// Serialized with the display name, which is also the key used by the
/// pricing fixtures and the CSV export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PackageName {
    #[serde(rename = "Mamãe Coruja")]
    MamaeCoruja,
    #[serde(rename = "Super Mãe")]
    SuperMae,
    #[serde(rename = "A melhor mãe do mundo")]
    MelhorMaeDoMundo,
}

impl PackageName {
    /// Человекочитаемое название пакета
    pub fn display_name(&self) -> &'static str {
        match self {
            PackageName::MamaeCoruja => "Mamãe Coruja",
            PackageName::SuperMae => "Super Mãe",
            PackageName::MelhorMaeDoMundo => "A melhor mãe do mundo",
        }
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_display_name() {
        let json = serde_json::to_string(&PackageName::SuperMae).unwrap();
        assert_eq!(json, "\"Super Mãe\"");

        let parsed: PackageName = serde_json::from_str("\"A melhor mãe do mundo\"").unwrap();
        assert_eq!(parsed, PackageName::MelhorMaeDoMundo);
    }
}
