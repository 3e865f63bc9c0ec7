use crate::config::Config;
use crate::domain::models::TeamSnapshot;
use crate::slack::ChatGateway;
use std::sync::Arc;
use tokio::sync::broadcast;

pub struct AppState {
    pub config: Config,
    /// Owns the on-disk lookup cache.
    pub gateway: Arc<dyn ChatGateway>,
    /// Current-week snapshots, published by the realtime publisher whenever
    /// the snapshot changes; websocket clients subscribe here.
    pub updates: broadcast::Sender<TeamSnapshot>,
}

pub type SharedState = Arc<AppState>;
