use common::{ClientId, RoomId};
use rand::Rng;

const ID_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

const CLIENT_ID_LENGTH: usize = 12;

fn random_id(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| ID_CHARSET[rng.random_range(0..ID_CHARSET.len())] as char)
        .collect()
}

/// Connection identifiers are assigned server-side when the websocket
/// is accepted; clients never pick their own.
pub fn generate_client_id() -> ClientId {
    ClientId::new(random_id(CLIENT_ID_LENGTH))
}

/// Room codes are short so players can read them out loud. Uniqueness
/// against live rooms is the relay's job.
pub fn generate_room_id(length: usize) -> RoomId {
    RoomId::new(random_id(length))
}
