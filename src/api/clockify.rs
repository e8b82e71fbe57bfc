//! Clockify REST API client.
//!
//! Fetches workspace users and their time entries for a period, paging
//! through every endpoint until the first empty batch. Records come back
//! `hydrated`, so project and client names ride along with each entry and no
//! second lookup is needed.

use crate::libs::config::ConfigModule;
use crate::libs::entry::{normalize_user_entries, TimeEntry};
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.clockify.me/api/v1";

const API_KEY_HEADER: &str = "X-Api-Key";
const API_KEY_ENV: &str = "CLOCKIFY_API_KEY";
const PAGE_SIZE: u32 = 1000;
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// A workspace member as returned by `/workspaces/{id}/users`.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceUser {
    pub id: String,
    pub name: String,
}

/// One raw time entry. Optional everywhere: field presence is not stable
/// across records, and normalization supplies the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTimeEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub project: Option<RawProject>,
    #[serde(default)]
    pub task: Option<RawTask>,
    #[serde(default)]
    pub time_interval: Option<RawTimeInterval>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProject {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTask {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTimeInterval {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

pub struct Clockify {
    client: reqwest::Client,
    config: ClockifyConfig,
}

impl Clockify {
    pub fn new(config: &ClockifyConfig) -> Result<Self> {
        let api_key = config.resolve_api_key()?;
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, HeaderValue::from_str(&api_key)?);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Fetches and normalizes all time entries of the workspace between the
    /// two ISO boundaries, grouped per user as the API serves them.
    pub async fn fetch_entries(&self, start_iso: &str, end_iso: &str) -> Result<Vec<TimeEntry>> {
        let users = self.fetch_users().await?;

        let mut entries = Vec::new();
        for user in users {
            let raw = self.fetch_time_entries(&user.id, start_iso, end_iso).await?;
            entries.extend(normalize_user_entries(&user.name, &raw));
        }
        Ok(entries)
    }

    pub async fn fetch_users(&self) -> Result<Vec<WorkspaceUser>> {
        let endpoint = format!("/workspaces/{}/users", self.config.workspace_id);
        self.fetch_all(&endpoint, &[]).await
    }

    pub async fn fetch_time_entries(&self, user_id: &str, start_iso: &str, end_iso: &str) -> Result<Vec<RawTimeEntry>> {
        let endpoint = format!("/workspaces/{}/user/{}/time-entries", self.config.workspace_id, user_id);
        self.fetch_all(&endpoint, &[("start", start_iso), ("end", end_iso)]).await
    }

    /// Pages through an endpoint until the first empty batch.
    async fn fetch_all<T: serde::de::DeserializeOwned>(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Vec<T>> {
        let url = format!("{}{}", self.config.api_url, endpoint);
        let mut items: Vec<T> = Vec::new();
        let mut page: u32 = 1;

        loop {
            let mut query: Vec<(String, String)> = vec![
                ("page-size".to_string(), PAGE_SIZE.to_string()),
                ("hydrated".to_string(), "true".to_string()),
                ("page".to_string(), page.to_string()),
            ];
            query.extend(params.iter().map(|(k, v)| (k.to_string(), v.to_string())));

            let batch: Vec<T> = self.client.get(&url).query(&query).send().await?.error_for_status()?.json().await?;
            if batch.is_empty() {
                break;
            }
            items.extend(batch);
            page += 1;
        }

        Ok(items)
    }
}

/// Clockify connection settings.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ClockifyConfig {
    /// API key; may be left empty and supplied via `CLOCKIFY_API_KEY`.
    #[serde(default)]
    pub api_key: String,
    pub workspace_id: String,
    pub api_url: String,
}

impl ClockifyConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "clockify".to_string(),
            name: "Clockify".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self {
            api_key: "".to_string(),
            workspace_id: "".to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        });
        println!("Clockify settings");
        Ok(Self {
            api_key: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptClockifyApiKey.to_string())
                .default(config.api_key)
                .allow_empty(true)
                .interact_text()?,
            workspace_id: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptClockifyWorkspace.to_string())
                .default(config.workspace_id)
                .interact_text()?,
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptClockifyApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
        })
    }

    /// The configured key, or the `CLOCKIFY_API_KEY` environment variable.
    pub fn resolve_api_key(&self) -> Result<String> {
        if !self.api_key.trim().is_empty() {
            return Ok(self.api_key.trim().to_string());
        }
        env::var(API_KEY_ENV).map_err(|_| msg_error_anyhow!(Message::ClockifyApiKeyMissing))
    }
}
