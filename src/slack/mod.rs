pub mod client;
pub mod types;

use crate::domain::models::RawMessage;
use async_trait::async_trait;
use types::{SlackProfile, SlackUser};

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("api rejected the call: {0}")]
    Api(String),
}

/// The chat workspace as the pipeline sees it. The production implementation
/// talks to the Slack Web API; tests substitute an in-memory fake.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    async fn list_users(&self) -> Result<Vec<SlackUser>, GatewayError>;
    async fn get_profile(&self, user_id: &str) -> Result<SlackProfile, GatewayError>;
    async fn find_channel_by_name(&self, name: &str) -> Result<Option<String>, GatewayError>;
    async fn get_recent_messages(
        &self,
        channel_id: &str,
        limit: u32,
    ) -> Result<Vec<RawMessage>, GatewayError>;
}
