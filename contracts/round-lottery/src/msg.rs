use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

use crate::state::{LotteryConfig, LotteryState, RoundRecord};

#[cw_serde]
pub struct InstantiateMsg {
    pub denom: String,
    pub ticket_price: Uint128,
    pub max_players: u32,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Buy one ticket for the current round. Must send exactly `ticket_price`
    /// of the lottery denom. The entry that fills the round also draws the
    /// winner and pays out.
    Enter {},
    /// Pause or resume entries. Manager only.
    SetPause { paused: bool },
    /// Change ticket price and capacity. Manager only, roster must be empty.
    StartNewLottery {
        ticket_price: Uint128,
        max_players: u32,
    },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(LotteryConfig)]
    Config {},
    #[returns(LotteryState)]
    State {},
    #[returns(PlayersResponse)]
    Players {},
    #[returns(RoundRecord)]
    Round { round_number: u64 },
    #[returns(RoundHistoryResponse)]
    RoundHistory {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(UserWinsResponse)]
    UserWins {
        address: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct PlayersResponse {
    pub players: Vec<Addr>,
}

#[cw_serde]
pub struct RoundHistoryResponse {
    pub rounds: Vec<RoundRecord>,
}

#[cw_serde]
pub struct UserWinsResponse {
    pub address: String,
    pub total_wins: u32,
    pub total_won_amount: Uint128,
    pub rounds: Vec<u64>,
}
