use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

use common::{log, ClientId};
use common::protocol::ServerEvent;

use crate::relay::Outbound;

pub type ClientSender = mpsc::Sender<ServerEvent>;

/// Maps connected clients to their outbound channels. Send failures
/// are logged and dropped; a dead channel is cleaned up when the
/// connection handler unregisters.
#[derive(Clone)]
pub struct Broadcaster {
    clients: Arc<Mutex<HashMap<ClientId, ClientSender>>>,
}

impl std::fmt::Debug for Broadcaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Broadcaster").finish()
    }
}

impl Default for Broadcaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Broadcaster {
    pub fn new() -> Self {
        Self {
            clients: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn register(&self, client_id: ClientId, sender: ClientSender) {
        self.clients.lock().await.insert(client_id, sender);
    }

    pub async fn unregister(&self, client_id: &ClientId) {
        self.clients.lock().await.remove(client_id);
    }

    pub async fn send_to_client(&self, client_id: &ClientId, event: ServerEvent) {
        let clients = self.clients.lock().await;
        if let Some(sender) = clients.get(client_id)
            && let Err(e) = sender.send(event).await
        {
            log!("Failed to send to client {}: {}", client_id, e);
        }
    }

    pub async fn dispatch(&self, outbound: Vec<Outbound>) {
        for message in outbound {
            self.send_to_client(&message.recipient, message.event).await;
        }
    }
}
