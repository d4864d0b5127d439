use cosmwasm_std::{to_json_binary, Binary, Deps, Order, StdResult, Uint128};
use cw_storage_plus::Bound;

use crate::msg::{PlayersResponse, RoundHistoryResponse, UserWinsResponse};
use crate::state::{
    CONFIG, LOTTERY_ROUNDS, LOTTERY_STATE, USER_TOTAL_WON, USER_WINS, USER_WIN_COUNT,
};

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_state(deps: Deps) -> StdResult<Binary> {
    let state = LOTTERY_STATE.load(deps.storage)?;
    to_json_binary(&state)
}

pub fn query_players(deps: Deps) -> StdResult<Binary> {
    let state = LOTTERY_STATE.load(deps.storage)?;
    to_json_binary(&PlayersResponse {
        players: state.players,
    })
}

pub fn query_round(deps: Deps, round_number: u64) -> StdResult<Binary> {
    let round = LOTTERY_ROUNDS.load(deps.storage, round_number)?;
    to_json_binary(&round)
}

pub fn query_round_history(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(20).min(100) as usize;
    let start = start_after.map(Bound::exclusive);

    let rounds = LOTTERY_ROUNDS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, round)| round))
        .collect::<StdResult<Vec<_>>>()?;

    to_json_binary(&RoundHistoryResponse { rounds })
}

pub fn query_user_wins(
    deps: Deps,
    address: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let addr = deps.api.addr_validate(&address)?;
    let limit = limit.unwrap_or(100).min(100) as usize;
    let start = start_after.map(Bound::exclusive);

    let rounds = USER_WINS
        .prefix(&addr)
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .collect::<StdResult<Vec<u64>>>()?;

    let total_wins = USER_WIN_COUNT.may_load(deps.storage, &addr)?.unwrap_or(0);
    let total_won = USER_TOTAL_WON
        .may_load(deps.storage, &addr)?
        .unwrap_or(Uint128::zero());

    to_json_binary(&UserWinsResponse {
        address,
        total_wins,
        total_won_amount: total_won,
        rounds,
    })
}
