//! Configuration management.
//!
//! Settings live in a JSON file under the platform-specific application data
//! directory. Each module is optional: the Clockify connection is required
//! for fetching, the company identity only shapes the rendered report and
//! falls back to built-in defaults. `init` runs the interactive setup wizard.

use super::data_storage::DataStorage;
use crate::api::clockify::ClockifyConfig;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Company name printed in the report header when none is configured.
pub const DEFAULT_COMPANY_NAME: &str = "Inpro Analytics GmbH";

/// A configurable module shown in the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Business identity rendered on reports.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CompanyConfig {
    /// Name shown in the report header.
    pub name: String,
    /// Optional PNG logo for the header; a missing file degrades to a blank
    /// header cell at render time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_path: Option<PathBuf>,
}

impl Default for CompanyConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_COMPANY_NAME.to_string(),
            logo_path: None,
        }
    }
}

impl CompanyConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "company".to_string(),
            name: "Company".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        println!("Company settings");
        let name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptCompanyName.to_string())
            .default(config.name)
            .interact_text()?;
        let logo: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptLogoPath.to_string())
            .default(config.logo_path.map(|p| p.display().to_string()).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;
        Ok(Self {
            name,
            logo_path: if logo.trim().is_empty() { None } else { Some(PathBuf::from(logo.trim())) },
        })
    }
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clockify: Option<ClockifyConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyConfig>,
}

impl Config {
    /// Loads the configuration, falling back to defaults when no file exists.
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

    /// Interactive setup wizard: pick modules, then configure each through
    /// its own prompts, pre-filled with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let module_descriptions = vec![ClockifyConfig::module(), CompanyConfig::module()];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&module_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match module_descriptions[selection].key.as_str() {
                "clockify" => config.clockify = Some(ClockifyConfig::init(&config.clockify)?),
                "company" => config.company = Some(CompanyConfig::init(&config.company)?),
                _ => {}
            }
        }

        Ok(config)
    }

    /// The company identity to render with, defaulted when unconfigured.
    pub fn company_or_default(&self) -> CompanyConfig {
        self.company.clone().unwrap_or_default()
    }
}
