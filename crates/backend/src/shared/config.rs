use chrono::NaiveDate;
use contracts::enums::PackageName;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::shared::analytics::calendar::MonthDay;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub fixtures: FixturesConfig,
    pub campaign: CampaignConfig,
    pub goals: GoalsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Optional JSON fixture paths; a missing entry means synthetic data
#[derive(Debug, Deserialize, Clone, Default)]
pub struct FixturesConfig {
    pub orders: Option<String>,
    pub customers: Option<String>,
    pub pricing: Option<String>,
}

/// Campaign calendar, identical every year
#[derive(Debug, Deserialize, Clone)]
pub struct CampaignConfig {
    /// Year is appended: "Dia das Mães" → "Dia das Mães 2026"
    pub name: String,
    pub start: MonthDay,
    pub target: MonthDay,
    /// Pins "today" for every request without an explicit date
    pub reference_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GoalsConfig {
    pub orders: f64,
    pub revenue: f64,
    pub sessions: f64,
    #[serde(default)]
    pub packages: Vec<PackageGoalConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PackageGoalConfig {
    pub name: PackageName,
    pub target: f64,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[fixtures]

[campaign]
name = "Dia das Mães"
start = { month = 2, day = 1 }
target = { month = 5, day = 8 }

[goals]
orders = 120
revenue = 35935
sessions = 100

[[goals.packages]]
name = "Super Mãe"
target = 35

[[goals.packages]]
name = "Mamãe Coruja"
target = 60

[[goals.packages]]
name = "A melhor mãe do mundo"
target = 5
"#;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> anyhow::Result<()> {
    for (field, md) in [("start", config.campaign.start), ("target", config.campaign.target)] {
        if !md.is_valid() {
            anyhow::bail!(
                "campaign.{} is not a calendar day: {:02}/{:02}",
                field,
                md.day,
                md.month
            );
        }
    }
    if config.goals.orders < 0.0 || config.goals.revenue < 0.0 || config.goals.sessions < 0.0 {
        anyhow::bail!("goals must not be negative");
    }
    Ok(())
}

/// Load once and keep for the lifetime of the process
pub fn initialize_config() -> anyhow::Result<&'static Config> {
    let config = load_config()?;
    CONFIG
        .set(config)
        .map_err(|_| anyhow::anyhow!("Configuration is already initialized"))?;
    get_config()
}

pub fn get_config() -> anyhow::Result<&'static Config> {
    CONFIG
        .get()
        .ok_or_else(|| anyhow::anyhow!("Configuration has not been initialized"))
}

/// Resolve a configured path
/// Relative paths are taken relative to the executable directory
pub fn resolve_path(path_str: &str) -> PathBuf {
    let path = Path::new(path_str);

    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(path);
        }
    }

    PathBuf::from(path_str)
}
