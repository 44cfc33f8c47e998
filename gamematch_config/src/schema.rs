use gamematch_core::PatternTable;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

const CONFIG_DIR: &str = "gamematch";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub matcher: MatcherConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct MatcherConfig {
    /// JSON pattern table to use instead of the built-in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_file: Option<PathBuf>,
    #[serde(default = "MatcherConfig::default_suggestion_limit")]
    pub suggestion_limit: usize,
    /// Route `match` through the advisor instead of calling the keyword matcher directly.
    #[serde(default)]
    pub use_advisor: bool,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            pattern_file: None,
            suggestion_limit: Self::default_suggestion_limit(),
            use_advisor: false,
        }
    }
}

impl MatcherConfig {
    const fn default_suggestion_limit() -> usize {
        3
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `tracing` level directive; `RUST_LOG` takes precedence when set.
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

impl LoggingConfig {
    fn default_level() -> String {
        "info".to_string()
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'gamematch init' to create config.",
                config_path.display()
            );
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    /// Pattern table named by `matcher.pattern_file`, if any.
    pub fn pattern_table(&self) -> anyhow::Result<Option<PatternTable>> {
        let Some(path) = &self.matcher.pattern_file else {
            return Ok(None);
        };
        let table = PatternTable::from_file(path)
            .map_err(|e| anyhow::anyhow!("Invalid pattern file {}: {e}", path.display()))?;
        Ok(Some(table))
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = Self::write_default(&config_dir)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("🔧 Configuration options:");
        println!("   - matcher.pattern_file: JSON pattern table replacing the built-in games");
        println!("   - matcher.suggestion_limit: Default number of suggestions");
        println!("   - matcher.use_advisor: Resolve matches through the advisor");
        println!("   - logging.level: trace, debug, info, warn or error");
        println!();
        Ok(())
    }

    fn write_default(config_dir: &Path) -> anyhow::Result<PathBuf> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let content = serde_json::to_string_pretty(&Self::default())?;
        std::fs::write(&config_path, content)?;
        info!("Wrote default config to {}", config_path.display());
        Ok(config_path)
    }
}
