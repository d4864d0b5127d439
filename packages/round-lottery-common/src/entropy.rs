//! Winner selection entropy.
//!
//! **Not secure.** The seed is derived only from values that are public
//! when the filling entry executes: block height, chain id, block time and
//! the roster. A block proposer, or any player able to time the last entry,
//! can compute the winner in advance and choose whether to enter. Rounds
//! that carry real value need a verifiable randomness source instead.

use sha2::{Digest, Sha256};

use crate::types::EntropyInputs;

/// Compute the round seed.
///
/// `seed = sha256( height_u64_be || chain_id_bytes || time_nanos_u64_be || player_1 || ... || player_n )`
///
/// Players are hashed as their raw address string bytes, in entry order.
pub fn compute_round_seed(inputs: &EntropyInputs) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(inputs.block_height.to_be_bytes());
    hasher.update(inputs.chain_id.as_bytes());
    hasher.update(inputs.block_time_nanos.to_be_bytes());
    for player in &inputs.players {
        hasher.update(player.as_bytes());
    }
    hasher.finalize().into()
}

/// Reduce a seed to a roster index: `uint128(seed[0..16]) % num_players`.
///
/// Returns `None` for an empty roster.
pub fn winner_index(seed: &[u8; 32], num_players: usize) -> Option<usize> {
    if num_players == 0 {
        return None;
    }
    let mut index_bytes = [0u8; 16];
    index_bytes.copy_from_slice(&seed[0..16]);
    let raw = u128::from_be_bytes(index_bytes);
    Some((raw % num_players as u128) as usize)
}

/// Hex rendering of a seed for events and round records.
pub fn seed_hex(seed: &[u8; 32]) -> String {
    hex::encode(seed)
}
