//! On-disk lookup cache for the chat directory.
//!
//! Three resource kinds share one JSON snapshot file: the full user list
//! (single slot), per-user profiles, and free-form blobs such as resolved
//! channel ids. Anything older than 24 hours behaves as a miss. The file is
//! rewritten on every put; deleting it at any time just forces a refetch.

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::RwLock;

const MAX_AGE_MS: i64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct CacheBody {
    users: Option<Value>,
    last_updated: i64,
    profiles: HashMap<String, CacheSlot>,
    blobs: HashMap<String, CacheSlot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CacheSlot {
    data: Value,
    last_updated: i64,
}

pub struct FileCache {
    path: PathBuf,
    body: RwLock<CacheBody>,
}

/// A record written at `last_updated_ms` is served until it turns 24h old.
pub fn is_fresh(last_updated_ms: i64, now_ms: i64) -> bool {
    now_ms - last_updated_ms < MAX_AGE_MS
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

impl FileCache {
    /// Loads the snapshot file. A missing or unreadable file is an empty
    /// cache, never an error for the caller.
    pub async fn load(path: PathBuf) -> Self {
        let body = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!(
                        "cache file {} is unreadable, starting empty: {e}",
                        path.display()
                    );
                    CacheBody::default()
                }
            },
            Err(_) => CacheBody::default(),
        };
        Self {
            path,
            body: RwLock::new(body),
        }
    }

    pub async fn users<T: DeserializeOwned>(&self) -> Option<T> {
        let body = self.body.read().await;
        let users = body.users.as_ref()?;
        if !is_fresh(body.last_updated, now_ms()) {
            return None;
        }
        serde_json::from_value(users.clone()).ok()
    }

    pub async fn put_users<T: Serialize>(&self, users: &T) {
        let Ok(value) = serde_json::to_value(users) else {
            return;
        };
        let mut body = self.body.write().await;
        body.users = Some(value);
        body.last_updated = now_ms();
        self.persist(&body).await;
    }

    pub async fn profile<T: DeserializeOwned>(&self, user_id: &str) -> Option<T> {
        self.slot(|body| &body.profiles, user_id).await
    }

    pub async fn put_profile<T: Serialize>(&self, user_id: &str, profile: &T) {
        self.put_slot(|body| &mut body.profiles, user_id, profile).await;
    }

    pub async fn blob<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.slot(|body| &body.blobs, key).await
    }

    pub async fn put_blob<T: Serialize>(&self, key: &str, value: &T) {
        self.put_slot(|body| &mut body.blobs, key, value).await;
    }

    async fn slot<T, F>(&self, section: F, key: &str) -> Option<T>
    where
        T: DeserializeOwned,
        F: FnOnce(&CacheBody) -> &HashMap<String, CacheSlot>,
    {
        let body = self.body.read().await;
        let slot = section(&body).get(key)?;
        if !is_fresh(slot.last_updated, now_ms()) {
            return None;
        }
        serde_json::from_value(slot.data.clone()).ok()
    }

    async fn put_slot<T, F>(&self, section: F, key: &str, value: &T)
    where
        T: Serialize,
        F: FnOnce(&mut CacheBody) -> &mut HashMap<String, CacheSlot>,
    {
        let Ok(data) = serde_json::to_value(value) else {
            return;
        };
        let mut body = self.body.write().await;
        let stamped = now_ms();
        section(&mut body).insert(
            key.to_string(),
            CacheSlot {
                data,
                last_updated: stamped,
            },
        );
        body.last_updated = stamped;
        self.persist(&body).await;
    }

    /// Writes the whole structure before the put returns. A failed write is
    /// logged and the in-memory copy stays authoritative for this process.
    async fn persist(&self, body: &CacheBody) {
        match serde_json::to_vec_pretty(body) {
            Ok(bytes) => {
                if let Err(e) = tokio::fs::write(&self.path, bytes).await {
                    tracing::warn!("failed to persist cache to {}: {e}", self.path.display());
                }
            }
            Err(e) => tracing::warn!("failed to serialize cache: {e}"),
        }
    }
}
