//! User configuration stored as `config.json` in the application data
//! directory.
//!
//! Both modules are optional. A missing file, or a missing module, falls
//! back to defaults, so the client works without running `daytask init`.
//!
//! ## Server URL resolution
//!
//! 1. `DAYTASK_API_URL` environment variable (a `.env` file is honored)
//! 2. `server.api_url` from the config file
//! 3. the default compiled into the binary
//!
//! ```rust,no_run
//! use daytask::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("{}", config.api_url());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::calendar::{DEFAULT_STATS_DAYS, MAX_STATS_DAYS};
use super::data_storage::{DataStorage, APP_METADATA_API_URL};
use super::statistics::ViewMode;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Overrides the configured server URL when set.
pub const API_URL_ENV: &str = "DAYTASK_API_URL";

const FALLBACK_API_URL: &str = "http://localhost:8000";

/// A module offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the task server, without the `/api/v1` prefix.
    pub api_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            api_url: default_api_url(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayConfig {
    /// Whether `list` shows completed tasks unless told otherwise.
    pub show_completed: bool,
    /// Length of the default `stats` range.
    pub stats_days: i64,
    /// Default grouping for `stats`.
    pub view: ViewMode,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            show_completed: true,
            stats_days: DEFAULT_STATS_DAYS,
            view: ViewMode::Day,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayConfig>,
}

impl Config {
    /// Loads the config file, or defaults when there is none.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Server URL after applying the environment override.
    pub fn api_url(&self) -> String {
        if let Ok(url) = env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                return url.trim().to_string();
            }
        }

        match &self.server {
            Some(server) if !server.api_url.trim().is_empty() => server.api_url.trim().to_string(),
            _ => default_api_url(),
        }
    }

    /// Display settings, defaults filled in.
    pub fn display(&self) -> DisplayConfig {
        self.display.clone().unwrap_or_default()
    }

    /// Interactive setup wizard. Current values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "server".to_string(),
                name: Message::ConfigModuleServer.to_string(),
            },
            ConfigModule {
                key: "display".to_string(),
                name: Message::ConfigModuleDisplay.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "server" => {
                    let default = config.server.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleServer);
                    config.server = Some(ServerConfig {
                        api_url: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptServerApiUrl.to_string())
                            .default(default.api_url)
                            .interact_text()?,
                    });
                }
                "display" => {
                    let default = config.display();
                    msg_print!(Message::ConfigModuleDisplay);

                    let views = [ViewMode::Day, ViewMode::Week, ViewMode::Month];
                    let show_completed = Confirm::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptShowCompleted.to_string())
                        .default(default.show_completed)
                        .interact()?;
                    let stats_days: i64 = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptStatsDays.to_string())
                        .default(default.stats_days)
                        .validate_with(|days: &i64| {
                            if (1..=MAX_STATS_DAYS).contains(days) {
                                Ok(())
                            } else {
                                Err(format!("must be between 1 and {}", MAX_STATS_DAYS))
                            }
                        })
                        .interact_text()?;
                    let view = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDefaultView.to_string())
                        .items(&views.iter().map(|v| v.as_str()).collect::<Vec<_>>())
                        .default(views.iter().position(|v| *v == default.view).unwrap_or(0))
                        .interact()?;

                    config.display = Some(DisplayConfig {
                        show_completed,
                        stats_days,
                        view: views[view],
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}

/// Compile-time default, or the local development server.
pub fn default_api_url() -> String {
    if APP_METADATA_API_URL.trim().is_empty() {
        FALLBACK_API_URL.to_string()
    } else {
        APP_METADATA_API_URL.to_string()
    }
}
