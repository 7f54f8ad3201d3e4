use crate::presentation::config::keybindings;
use crate::presentation::config::styles;

use std::path::PathBuf;

use color_eyre::eyre::Result;
use config::ConfigError;
use secrecy::SecretString;
use serde::{Deserialize, Deserializer};

use crate::{domain::forum::DEFAULT_REWARD_AMOUNT, utils};

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub wallet: WalletConfig,
    #[serde(default)]
    pub forum: ForumConfig,
}

/// Settings of the bundled local wallet
#[derive(Clone, Debug, Deserialize)]
pub struct WalletConfig {
    /// nsec or hex secret key; a key pair is generated when empty
    #[serde(default = "empty_secret", deserialize_with = "deserialize_secret")]
    pub privatekey: SecretString,
    #[serde(default)]
    pub username: String,
    #[serde(default = "default_initial_balance")]
    pub initial_balance: u64,
    /// Approve connection requests without asking
    #[serde(default = "default_true")]
    pub auto_approve: bool,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            privatekey: empty_secret(),
            username: String::new(),
            initial_balance: default_initial_balance(),
            auto_approve: true,
        }
    }
}

/// Tunables of the forum actions
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ForumConfig {
    pub reward_amount: u64,
    pub create_delay_ms: u64,
    pub reward_delay_ms: u64,
    pub toast_duration_ms: u64,
    pub seed_mock_posts: bool,
}

impl Default for ForumConfig {
    fn default() -> Self {
        Self {
            reward_amount: DEFAULT_REWARD_AMOUNT,
            create_delay_ms: 3000,
            reward_delay_ms: 2000,
            toast_duration_ms: 3000,
            seed_mock_posts: true,
        }
    }
}

fn empty_secret() -> SecretString {
    SecretString::from(String::new())
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}

fn default_initial_balance() -> u64 {
    1000
}

fn default_true() -> bool {
    true
}

/// Built-in configuration. Keybindings and styles come from the embedded defaults.
impl Default for Config {
    fn default() -> Self {
        Self::embedded().unwrap_or_else(|e| {
            log::error!("Failed to load embedded config: {e}");
            Self::bare()
        })
    }
}

impl Config {
    fn bare() -> Self {
        Self {
            config: AppConfig::default(),
            keybindings: keybindings::KeyBindings::default(),
            styles: styles::Styles::default(),
            wallet: WalletConfig::default(),
            forum: ForumConfig::default(),
        }
    }

    /// Parse the defaults compiled into the binary
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("_config_dir", config_dir.to_string_lossy().as_ref())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}; using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.merge_defaults(&default_config);
        Ok(cfg)
    }

    /// Fill keybindings and styles missing from the user config
    fn merge_defaults(&mut self, defaults: &Config) {
        for (keyseq, action) in defaults.keybindings.iter() {
            self.keybindings
                .entry(keyseq.clone())
                .or_insert_with(|| action.clone());
        }
        for (style_key, style) in defaults.styles.iter() {
            self.styles
                .entry(style_key.clone())
                .or_insert_with(|| *style);
        }
    }

    pub fn storage_path(&self) -> PathBuf {
        let dir = if self.config._data_dir.as_os_str().is_empty() {
            utils::get_data_dir()
        } else {
            self.config._data_dir.clone()
        };
        dir.join("storage.json")
    }
}
