use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;

use common::log;
use common::protocol::{ClientEvent, ServerEvent};

use crate::id_generator::generate_client_id;
use crate::web_server::WebServerState;

pub async fn handle_websocket(socket: WebSocket, state: WebServerState) {
    let (mut ws_sender, mut ws_receiver) = socket.split();

    let (tx, mut rx) = mpsc::channel::<ServerEvent>(128);

    let send_task = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            match serde_json::to_string(&event) {
                Ok(text) => {
                    if ws_sender.send(Message::Text(text.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => log!("Failed to encode server event: {}", e),
            }
        }
    });

    let client_id = generate_client_id();
    state.broadcaster.register(client_id.clone(), tx).await;
    log!("Client connected: {}", client_id);

    while let Some(result) = ws_receiver.next().await {
        let msg = match result {
            Ok(msg) => msg,
            Err(e) => {
                log!("Websocket error for {}: {}", client_id, e);
                break;
            }
        };

        let text = match msg {
            Message::Text(text) => text,
            Message::Close(_) => break,
            _ => continue,
        };

        let event = match serde_json::from_str::<ClientEvent>(&text) {
            Ok(event) => event,
            Err(e) => {
                log!("Failed to decode event from {}: {}", client_id, e);
                continue;
            }
        };

        let outbound = state.relay.handle_event(&client_id, event).await;
        state.broadcaster.dispatch(outbound).await;
    }

    let outbound = state.relay.handle_disconnect(&client_id).await;
    state.broadcaster.dispatch(outbound).await;
    state.broadcaster.unregister(&client_id).await;
    log!("Client disconnected: {}", client_id);

    send_task.abort();
}
