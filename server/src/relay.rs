use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use common::engine::{Board, Mark, BOARD_CELLS};
use common::protocol::{ClientEvent, ServerEvent};
use common::{log, ClientId, RoomId};

use crate::id_generator::generate_room_id;

/// A message the relay wants delivered to one connected client.
#[derive(Clone, Debug)]
pub struct Outbound {
    pub recipient: ClientId,
    pub event: ServerEvent,
}

impl Outbound {
    fn new(recipient: ClientId, event: ServerEvent) -> Self {
        Self { recipient, event }
    }
}

/// Match state for one pair of clients. Slot 0 of `players` is X and
/// slot 1 is O, fixed for the room's lifetime.
#[derive(Clone, Debug)]
pub struct Room {
    pub id: RoomId,
    pub players: Vec<ClientId>,
    pub current_turn: ClientId,
    pub board: Board,
}

impl Room {
    fn new(id: RoomId, creator: ClientId) -> Self {
        Self {
            id,
            players: vec![creator.clone()],
            current_turn: creator,
            board: Board::empty(),
        }
    }

    fn is_full(&self) -> bool {
        self.players.len() == 2
    }

    fn contains(&self, client: &ClientId) -> bool {
        self.players.contains(client)
    }

    fn mark_for(&self, client: &ClientId) -> Option<Mark> {
        match self.players.iter().position(|player| player == client) {
            Some(0) => Some(Mark::X),
            Some(1) => Some(Mark::O),
            _ => None,
        }
    }

    fn opponent_of(&self, client: &ClientId) -> Option<&ClientId> {
        self.players.iter().find(|player| *player != client)
    }
}

/// The relay's transition function: every inbound event maps to a new
/// state plus a list of outbound messages, with no transport attached.
/// Invalid joins are answered with `roomError`; invalid moves are
/// dropped without a reply, since they are usually late or duplicate
/// network messages rather than hostile input.
pub struct RelayState {
    rooms: HashMap<RoomId, Room>,
    room_id_length: usize,
}

impl RelayState {
    pub fn new(room_id_length: usize) -> Self {
        Self {
            rooms: HashMap::new(),
            room_id_length,
        }
    }

    pub fn handle_event(&mut self, sender: &ClientId, event: ClientEvent) -> Vec<Outbound> {
        match event {
            ClientEvent::CreateRoom => self.create_room(sender),
            ClientEvent::JoinRoom { room_id } => self.join_room(sender, &room_id),
            ClientEvent::Move { room_id, index } => self.apply_move(sender, &room_id, index),
        }
    }

    fn create_room(&mut self, sender: &ClientId) -> Vec<Outbound> {
        // Room codes are low-entropy; regenerate until the code is not
        // already in use.
        let room_id = loop {
            let candidate = generate_room_id(self.room_id_length);
            if !self.rooms.contains_key(&candidate) {
                break candidate;
            }
        };

        let room = Room::new(room_id.clone(), sender.clone());
        self.rooms.insert(room_id.clone(), room);
        log!("Room {} created by {}", room_id, sender);

        vec![Outbound::new(
            sender.clone(),
            ServerEvent::RoomCreated { room_id },
        )]
    }

    fn join_room(&mut self, sender: &ClientId, room_id: &RoomId) -> Vec<Outbound> {
        if let Some(room) = self.rooms.get_mut(room_id)
            && room.players.len() == 1
            && !room.contains(sender)
        {
            room.players.push(sender.clone());
            log!("Client {} joined room {}", sender, room_id);

            let event = ServerEvent::GameStart {
                players: room.players.clone(),
                current_turn: room.players[0].clone(),
                board: room.board,
            };

            return room
                .players
                .iter()
                .map(|player| Outbound::new(player.clone(), event.clone()))
                .collect();
        }

        vec![Outbound::new(
            sender.clone(),
            ServerEvent::RoomError {
                message: "Room is full or does not exist".to_string(),
            },
        )]
    }

    fn apply_move(&mut self, sender: &ClientId, room_id: &RoomId, index: usize) -> Vec<Outbound> {
        let Some(room) = self.rooms.get_mut(room_id) else {
            return Vec::new();
        };

        // Moves before the second player arrives, out of turn, out of
        // range, or into an occupied cell are silently ignored.
        if !room.is_full() || room.current_turn != *sender {
            return Vec::new();
        }
        if index >= BOARD_CELLS || room.board.cell(index).is_some() {
            return Vec::new();
        }

        let Some(mark) = room.mark_for(sender) else {
            return Vec::new();
        };
        let Some(next_turn) = room.opponent_of(sender).cloned() else {
            return Vec::new();
        };

        room.board = room.board.with_mark(index, mark);
        room.current_turn = next_turn;

        let event = ServerEvent::GameUpdate {
            board: room.board,
            current_turn: room.current_turn.clone(),
        };

        room.players
            .iter()
            .map(|player| Outbound::new(player.clone(), event.clone()))
            .collect()
    }

    /// Disconnection is the only cancellation primitive: every room the
    /// client belongs to is torn down and the remaining player is sent
    /// back to the lobby.
    pub fn handle_disconnect(&mut self, client: &ClientId) -> Vec<Outbound> {
        let affected: Vec<RoomId> = self
            .rooms
            .values()
            .filter(|room| room.contains(client))
            .map(|room| room.id.clone())
            .collect();

        let mut outbound = Vec::new();
        for room_id in affected {
            if let Some(room) = self.rooms.remove(&room_id) {
                log!("Room {} closed after {} disconnected", room_id, client);
                for player in &room.players {
                    if player != client {
                        outbound.push(Outbound::new(player.clone(), ServerEvent::PlayerLeft));
                    }
                }
            }
        }
        outbound
    }

    #[cfg(test)]
    fn room(&self, room_id: &RoomId) -> Option<&Room> {
        self.rooms.get(room_id)
    }

    #[cfg(test)]
    fn room_count(&self) -> usize {
        self.rooms.len()
    }
}

/// Shared handle the connection layer holds. Each event locks the
/// state, runs the transition to completion, and only then releases,
/// so no torn room state is ever observable.
#[derive(Clone)]
pub struct RoomRelay {
    state: Arc<Mutex<RelayState>>,
}

impl RoomRelay {
    pub fn new(room_id_length: usize) -> Self {
        Self {
            state: Arc::new(Mutex::new(RelayState::new(room_id_length))),
        }
    }

    pub async fn handle_event(&self, sender: &ClientId, event: ClientEvent) -> Vec<Outbound> {
        self.state.lock().await.handle_event(sender, event)
    }

    pub async fn handle_disconnect(&self, client: &ClientId) -> Vec<Outbound> {
        self.state.lock().await.handle_disconnect(client)
    }
}
