use cosmwasm_std::{
    entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128,
};
use cw2::{get_contract_version, set_contract_version};

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state::{LotteryConfig, LotteryState, CONFIG, LOTTERY_STATE};

const CONTRACT_NAME: &str = "crates.io:round-lottery";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    execute::validate_denom(&msg.denom)?;
    execute::validate_lottery_params(msg.ticket_price, msg.max_players)?;

    let config = LotteryConfig {
        manager: info.sender.clone(),
        denom: msg.denom,
        ticket_price: msg.ticket_price,
        max_players: msg.max_players,
    };
    CONFIG.save(deps.storage, &config)?;

    let state = LotteryState {
        players: vec![],
        paused: false,
        current_round: 1,
        pot: Uint128::zero(),
        total_prizes_paid: Uint128::zero(),
    };
    LOTTERY_STATE.save(deps.storage, &state)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "round-lottery")
        .add_attribute("manager", info.sender.to_string())
        .add_attribute("ticket_price", config.ticket_price.to_string())
        .add_attribute("max_players", config.max_players.to_string()))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Enter {} => execute::enter(deps, env, info),
        ExecuteMsg::SetPause { paused } => execute::set_pause(deps, env, info, paused),
        ExecuteMsg::StartNewLottery {
            ticket_price,
            max_players,
        } => execute::start_new_lottery(deps, env, info, ticket_price, max_players),
    }
}

#[entry_point]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::State {} => query::query_state(deps),
        QueryMsg::Players {} => query::query_players(deps),
        QueryMsg::Round { round_number } => query::query_round(deps, round_number),
        QueryMsg::RoundHistory { start_after, limit } => {
            query::query_round_history(deps, start_after, limit)
        }
        QueryMsg::UserWins {
            address,
            start_after,
            limit,
        } => query::query_user_wins(deps, address, start_after, limit),
    }
}

#[entry_point]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::Unauthorized {
            reason: "Cannot migrate from different contract type".to_string(),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}
