use anyhow::Context;
use std::collections::HashMap;
use std::path::PathBuf;

/// Runtime configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub slack_token: String,
    /// Channel names, not ids; they are resolved through the gateway.
    pub attendance_channel: String,
    pub tasks_channel: String,
    pub news_channel: String,
    pub cache_file: PathBuf,
    pub bind_addr: String,
    /// Chat display name -> canonical person name, for spelling/script
    /// mismatches between the time clock and the chat directory.
    pub name_aliases: HashMap<String, String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let slack_token = std::env::var("SLACK_BOT_TOKEN").context("SLACK_BOT_TOKEN missing")?;
        let attendance_channel =
            std::env::var("SLACK_ATTENDANCE_CHANNEL").context("SLACK_ATTENDANCE_CHANNEL missing")?;
        let tasks_channel =
            std::env::var("SLACK_TASKS_CHANNEL").context("SLACK_TASKS_CHANNEL missing")?;
        let news_channel =
            std::env::var("SLACK_NEWS_CHANNEL").context("SLACK_NEWS_CHANNEL missing")?;

        let cache_file = std::env::var("CACHE_FILE")
            .unwrap_or_else(|_| "cache.json".to_string())
            .into();

        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| {
            let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
            format!("0.0.0.0:{port}")
        });

        let name_aliases = match std::env::var("NAME_ALIASES") {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!("NAME_ALIASES is not a JSON object, ignoring: {e}");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Ok(Self {
            slack_token,
            attendance_channel,
            tasks_channel,
            news_channel,
            cache_file,
            bind_addr,
            name_aliases,
        })
    }
}
