use super::types::{SlackChannel, SlackMessage, SlackProfile, SlackUser};
use super::{ChatGateway, GatewayError};
use crate::cache::FileCache;
use crate::domain::models::RawMessage;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;

const API_BASE: &str = "https://slack.com/api";

/// Bearer-token Slack Web API client. Directory lookups (user list, profiles,
/// channel ids) go through the on-disk cache; message history is always live.
pub struct SlackClient {
    http: reqwest::Client,
    token: String,
    cache: Arc<FileCache>,
}

#[derive(Deserialize)]
struct UsersListResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    members: Vec<SlackUser>,
}

#[derive(Deserialize)]
struct ProfileResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    profile: Option<SlackProfile>,
}

#[derive(Deserialize)]
struct ChannelsResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    channels: Vec<SlackChannel>,
}

#[derive(Deserialize)]
struct HistoryResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    messages: Vec<SlackMessage>,
}

fn rejected(error: Option<String>) -> GatewayError {
    GatewayError::Api(error.unwrap_or_else(|| "unknown error".to_string()))
}

impl SlackClient {
    pub fn new(token: String, cache: Arc<FileCache>) -> Self {
        Self {
            http: reqwest::Client::new(),
            token,
            cache,
        }
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        query: &[(&str, &str)],
    ) -> Result<T, GatewayError> {
        let response = self
            .http
            .get(format!("{API_BASE}/{method}"))
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await?
            .json::<T>()
            .await?;
        Ok(response)
    }
}

#[async_trait]
impl ChatGateway for SlackClient {
    async fn list_users(&self) -> Result<Vec<SlackUser>, GatewayError> {
        if let Some(users) = self.cache.users::<Vec<SlackUser>>().await {
            return Ok(users);
        }
        let response: UsersListResponse = self.call("users.list", &[]).await?;
        if !response.ok {
            return Err(rejected(response.error));
        }
        self.cache.put_users(&response.members).await;
        Ok(response.members)
    }

    async fn get_profile(&self, user_id: &str) -> Result<SlackProfile, GatewayError> {
        if let Some(profile) = self.cache.profile::<SlackProfile>(user_id).await {
            return Ok(profile);
        }
        let response: ProfileResponse = self.call("users.profile.get", &[("user", user_id)]).await?;
        if !response.ok {
            return Err(rejected(response.error));
        }
        let profile = response.profile.unwrap_or_default();
        self.cache.put_profile(user_id, &profile).await;
        Ok(profile)
    }

    async fn find_channel_by_name(&self, name: &str) -> Result<Option<String>, GatewayError> {
        let cache_key = format!("channel:{name}");
        if let Some(id) = self.cache.blob::<String>(&cache_key).await {
            return Ok(Some(id));
        }
        let response: ChannelsResponse = self.call("conversations.list", &[]).await?;
        if !response.ok {
            return Err(rejected(response.error));
        }
        let id = response
            .channels
            .into_iter()
            .find(|channel| channel.name == name)
            .map(|channel| channel.id);
        if let Some(id) = &id {
            self.cache.put_blob(&cache_key, id).await;
        }
        Ok(id)
    }

    async fn get_recent_messages(
        &self,
        channel_id: &str,
        limit: u32,
    ) -> Result<Vec<RawMessage>, GatewayError> {
        let limit = limit.to_string();
        let response: HistoryResponse = self
            .call(
                "conversations.history",
                &[("channel", channel_id), ("limit", &limit)],
            )
            .await?;
        if !response.ok {
            return Err(rejected(response.error));
        }
        Ok(response
            .messages
            .into_iter()
            .map(SlackMessage::into_raw)
            .collect())
    }
}
