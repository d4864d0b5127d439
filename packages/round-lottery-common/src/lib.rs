pub mod entropy;
pub mod types;

pub use entropy::{compute_round_seed, seed_hex, winner_index};
pub use types::EntropyInputs;
