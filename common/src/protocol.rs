//! Wire protocol between the browser client and the relay server.
//!
//! Events are JSON objects of the form `{"event": ..., "data": ...}`;
//! names and payload fields are camelCase to match what the web client
//! emits over its socket.

use serde::{Deserialize, Serialize};

use crate::engine::Board;
use crate::identifiers::{ClientId, RoomId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ClientEvent {
    CreateRoom,
    #[serde(rename_all = "camelCase")]
    JoinRoom { room_id: RoomId },
    #[serde(rename_all = "camelCase")]
    Move { room_id: RoomId, index: usize },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ServerEvent {
    #[serde(rename_all = "camelCase")]
    RoomCreated { room_id: RoomId },
    #[serde(rename_all = "camelCase")]
    GameStart {
        players: Vec<ClientId>,
        current_turn: ClientId,
        board: Board,
    },
    #[serde(rename_all = "camelCase")]
    GameUpdate { board: Board, current_turn: ClientId },
    RoomError { message: String },
    PlayerLeft,
}
