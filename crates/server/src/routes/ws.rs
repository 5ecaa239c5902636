//! WebSocket push channel for live admin updates.
//!
//! Each connected client gets a subscription to the notification channel;
//! events are forwarded as JSON text frames. Connection and disconnection
//! are logged, nothing else. A newly connected client sees nothing until
//! the next mutation.

use axum::{
    extract::{
        State, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::state::AppState;

/// Upgrade to a WebSocket connection.
///
/// GET /ws
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let client_id = Uuid::new_v4();
    let mut events = state.notifier().subscribe();
    let (mut sender, mut receiver) = socket.split();

    tracing::info!(%client_id, "Admin view connected");

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(event) => {
                    let text = match serde_json::to_string(&event) {
                        Ok(text) => text,
                        Err(e) => {
                            tracing::error!(%client_id, "Failed to serialize event: {e}");
                            continue;
                        }
                    };
                    if sender.send(Message::Text(text.into())).await.is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    // Slow client: missed events are gone (no replay).
                    tracing::warn!(%client_id, missed, "Subscriber lagged");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            },
            msg = receiver.next() => match msg {
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                // Client-to-server messages are not part of the protocol.
                Some(Ok(_)) => {}
            },
        }
    }

    tracing::info!(%client_id, "Admin view disconnected");
}
