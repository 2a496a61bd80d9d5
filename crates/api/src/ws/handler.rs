use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;

use crate::session::Session;
use crate::state::AppState;
use crate::ws::messages::{ClientMessage, ServerMessage};

/// GET /api/v1/ws
///
/// Upgrades to a WebSocket carrying one search session.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Drive a single connection after upgrade.
///
/// 1. Registers the connection with the `WsManager`.
/// 2. Starts a session whose screen snapshots become render frames.
/// 3. Spawns a sender task that merges render frames and control frames.
/// 4. Feeds inbound query frames to the session until the socket closes.
async fn handle_socket(socket: WebSocket, state: AppState) {
    let conn_id = uuid::Uuid::new_v4().to_string();
    tracing::info!(conn_id = %conn_id, "WebSocket connected");

    let mut control_rx = state.ws_manager.add(conn_id.clone()).await;
    let (renders_tx, mut renders_rx) = mpsc::unbounded_channel();
    let session = Session::start(state.session_deps(), renders_tx);

    let (mut sink, mut stream) = socket.split();

    let sender_conn_id = conn_id.clone();
    let send_task = tokio::spawn(async move {
        loop {
            let msg = tokio::select! {
                Some(control) = control_rx.recv() => control,
                Some(screen) = renders_rx.recv() => {
                    match ServerMessage::encode(&screen) {
                        Ok(json) => Message::Text(json.into()),
                        Err(e) => {
                            tracing::error!(conn_id = %sender_conn_id, error = %e, "Failed to build render frame");
                            continue;
                        }
                    }
                }
                else => break,
            };

            let closing = matches!(msg, Message::Close(_));
            if sink.send(msg).await.is_err() {
                tracing::debug!(conn_id = %sender_conn_id, "WebSocket sink closed");
                break;
            }
            if closing {
                break;
            }
        }
    });

    while let Some(result) = stream.next().await {
        match result {
            Ok(Message::Text(text)) => match serde_json::from_str::<ClientMessage>(text.as_str()) {
                Ok(ClientMessage::Query { value }) => session.input(value),
                Err(e) => {
                    tracing::debug!(conn_id = %conn_id, error = %e, "Ignoring malformed client frame");
                }
            },
            Ok(Message::Close(_)) => break,
            Ok(Message::Pong(_)) => {
                tracing::trace!(conn_id = %conn_id, "Pong received");
            }
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(conn_id = %conn_id, error = %e, "WebSocket receive error");
                break;
            }
        }
    }

    session.shutdown().await;
    let connected_for = state
        .ws_manager
        .remove(&conn_id)
        .await
        .map(|conn| (chrono::Utc::now() - conn.connected_at).num_seconds());
    send_task.abort();
    tracing::info!(conn_id = %conn_id, connected_secs = ?connected_for, "WebSocket disconnected");
}
