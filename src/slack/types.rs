use crate::domain::models::RawMessage;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlackUser {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub real_name: Option<String>,
    #[serde(default)]
    pub is_bot: bool,
    #[serde(default)]
    pub deleted: bool,
}

impl SlackUser {
    pub fn display_name(&self) -> &str {
        self.real_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlackProfile {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image_192: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlackChannel {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// A message as Slack returns it. `ts` is epoch seconds with a fractional
/// suffix, e.g. "1727312345.000200".
#[derive(Debug, Clone, Deserialize)]
pub struct SlackMessage {
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub text: String,
    pub ts: String,
}

impl SlackMessage {
    pub fn into_raw(self) -> RawMessage {
        let posted_at = self
            .ts
            .split('.')
            .next()
            .and_then(|secs| secs.parse().ok())
            .unwrap_or(0);
        RawMessage {
            author_id: self.user,
            text: self.text,
            posted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slack_ts_parses_to_whole_seconds() {
        let msg = SlackMessage {
            user: Some("U1".to_string()),
            text: "hello".to_string(),
            ts: "1727312345.000200".to_string(),
        };
        assert_eq!(msg.into_raw().posted_at, 1_727_312_345);
    }

    #[test]
    fn display_name_falls_back_to_handle() {
        let user = SlackUser {
            id: "U1".to_string(),
            name: "ann".to_string(),
            real_name: None,
            is_bot: false,
            deleted: false,
        };
        assert_eq!(user.display_name(), "ann");
    }
}
