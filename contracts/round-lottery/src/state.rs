use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONFIG: Item<LotteryConfig> = Item::new("config");
pub const LOTTERY_STATE: Item<LotteryState> = Item::new("lottery_state");
/// Completed rounds, keyed by round number
pub const LOTTERY_ROUNDS: Map<u64, RoundRecord> = Map::new("lottery_rounds");

/// Per-winner tracking: (winner, round_number) -> prize
pub const USER_WINS: Map<(&Addr, u64), Uint128> = Map::new("user_wins");
pub const USER_WIN_COUNT: Map<&Addr, u32> = Map::new("user_win_count");
pub const USER_TOTAL_WON: Map<&Addr, Uint128> = Map::new("user_total_won");

/// Upper bound on `max_players`. The whole roster lives in one item and is
/// hashed on the filling entry, so its size bounds that call's gas.
pub const MAX_PLAYERS_LIMIT: u32 = 1000;

#[cw_serde]
pub struct LotteryConfig {
    /// Set at instantiation, never changes
    pub manager: Addr,
    /// Native denom tickets are paid in
    pub denom: String,
    pub ticket_price: Uint128,
    pub max_players: u32,
}

#[cw_serde]
pub struct LotteryState {
    /// Current round's roster in entry order. An address appears once per ticket.
    pub players: Vec<Addr>,
    pub paused: bool,
    pub current_round: u64,
    /// Ticket payments collected this round: ticket_price * players.len()
    pub pot: Uint128,
    pub total_prizes_paid: Uint128,
}

#[cw_serde]
pub struct RoundRecord {
    pub round_number: u64,
    pub players: Vec<Addr>,
    pub winner: Addr,
    pub winner_index: u32,
    pub prize: Uint128,
    pub ticket_price: Uint128,
    /// Hex-encoded entropy seed the winner was derived from
    pub seed: String,
    pub completed_at: Timestamp,
}
