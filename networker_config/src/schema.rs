use chrono::FixedOffset;
use networker_parser::ParserOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub user: UserConfig,
    #[serde(default)]
    pub contacts: ContactsConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    #[serde(default = "ParserConfig::default_dedupe_tags")]
    pub dedupe_tags: bool,
    /// Offset used to decide what "today" is for relative dates.
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            dedupe_tags: Self::default_dedupe_tags(),
            utc_offset_minutes: 0,
        }
    }
}

impl ParserConfig {
    const fn default_dedupe_tags() -> bool {
        true
    }

    #[must_use]
    pub const fn options(&self) -> ParserOptions {
        ParserOptions {
            dedupe_tags: self.dedupe_tags,
        }
    }

    pub fn offset(&self) -> anyhow::Result<FixedOffset> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "utc_offset_minutes out of range: {}",
                    self.utc_offset_minutes
                )
            })
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct UserConfig {
    #[serde(default = "UserConfig::default_user_id")]
    pub default_user_id: String,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            default_user_id: Self::default_user_id(),
        }
    }
}

impl UserConfig {
    fn default_user_id() -> String {
        "local".to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ContactsConfig {
    #[serde(default = "ContactsConfig::default_list_limit")]
    pub list_limit: usize,
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            list_limit: Self::default_list_limit(),
        }
    }
}

impl ContactsConfig {
    const fn default_list_limit() -> usize {
        50
    }
}

const CONFIG_TEMPLATE: &str = r#"{
  "parser": {
    "dedupe_tags": true,
    "utc_offset_minutes": 0
  },
  "user": {
    "default_user_id": "local"
  },
  "contacts": {
    "list_limit": 50
  }
}"#;

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("networker"))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'networker init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)?;
        Self::from_json(&content)
    }

    /// Load the config file, or fall back to defaults when there is none.
    pub fn load_or_default() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            Self::load()
        } else {
            debug!(
                "No config at {}, using defaults",
                config_path.display()
            );
            Ok(Self::default())
        }
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.parser.offset()?;
        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        std::fs::write(&config_path, CONFIG_TEMPLATE)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("🔧 Configuration options:");
        println!("   - parser.dedupe_tags: drop repeated tags from parsed notes");
        println!("   - parser.utc_offset_minutes: your timezone, used for 'next Tuesday'");
        println!("   - user.default_user_id: owner of contacts created from the CLI");
        println!("   - contacts.list_limit: page size when listing contacts");
        println!();
        Ok(())
    }
}
