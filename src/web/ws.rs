use crate::state::SharedState;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use serde_json::json;
use tokio::sync::broadcast::error::RecvError;

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<SharedState>) -> Response {
    ws.on_upgrade(move |socket| client_loop(socket, state))
}

/// Forwards published snapshots to one client until it disconnects.
/// Delivery is best-effort: a lagging client just skips ahead to the newest
/// snapshot, which is the only one worth rendering anyway.
async fn client_loop(socket: WebSocket, state: SharedState) {
    let (mut sender, mut receiver) = socket.split();
    let mut updates = state.updates.subscribe();
    loop {
        tokio::select! {
            update = updates.recv() => match update {
                Ok(snapshot) => {
                    let payload = json!({ "event": "update", "data": snapshot });
                    if sender.send(Message::Text(payload.to_string())).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!("websocket client lagged, skipped {skipped} updates");
                }
                Err(RecvError::Closed) => break,
            },
            incoming = receiver.next() => match incoming {
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {} // clients only listen; ignore whatever they send
                Some(Err(_)) => break,
            },
        }
    }
}
