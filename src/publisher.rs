//! Realtime publisher: re-aggregates the current week on a fixed interval
//! and pushes the snapshot to subscribers only when it changed.

use crate::domain::aggregate;
use crate::domain::models::TeamSnapshot;
use crate::state::SharedState;
use tokio::time::{interval, Duration, MissedTickBehavior};

pub const CYCLE_SECONDS: u64 = 30;

/// Runs forever. Cycles never overlap: the loop awaits the full pipeline
/// before the next tick, and a slow cycle delays the following tick instead
/// of stacking a second run. Upstream failures degrade inside the pipeline,
/// so one bad cycle never stops future cycles.
pub async fn run(state: SharedState) {
    let mut ticker = interval(Duration::from_secs(CYCLE_SECONDS));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut last: Option<TeamSnapshot> = None;
    loop {
        ticker.tick().await;
        let snapshot = aggregate::team_snapshot(state.gateway.as_ref(), &state.config, 0).await;
        if last.as_ref() == Some(&snapshot) {
            continue;
        }
        match state.updates.send(snapshot.clone()) {
            Ok(receivers) => {
                tracing::info!("snapshot changed, pushed update to {receivers} clients")
            }
            Err(_) => tracing::debug!("snapshot changed, no connected clients"),
        }
        last = Some(snapshot);
    }
}
