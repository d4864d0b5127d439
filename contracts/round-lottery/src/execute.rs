use cosmwasm_std::{
    coins, Addr, BankMsg, Coin, DepsMut, Env, Event, MessageInfo, Response, Uint128,
};
use round_lottery_common::{compute_round_seed, seed_hex, winner_index, EntropyInputs};

use crate::error::ContractError;
use crate::state::{
    LotteryConfig, LotteryState, RoundRecord, CONFIG, LOTTERY_ROUNDS, LOTTERY_STATE,
    MAX_PLAYERS_LIMIT, USER_TOTAL_WON, USER_WINS, USER_WIN_COUNT,
};

/// Validate ticket price and round capacity.
pub fn validate_lottery_params(
    ticket_price: Uint128,
    max_players: u32,
) -> Result<(), ContractError> {
    if ticket_price.is_zero() {
        return Err(ContractError::InvalidConfig {
            reason: "ticket_price must be greater than zero".to_string(),
        });
    }
    if max_players == 0 || max_players > MAX_PLAYERS_LIMIT {
        return Err(ContractError::InvalidConfig {
            reason: format!(
                "max_players must be between 1 and {}, got {}",
                MAX_PLAYERS_LIMIT, max_players
            ),
        });
    }
    Ok(())
}

pub fn validate_denom(denom: &str) -> Result<(), ContractError> {
    if denom.trim().is_empty() {
        return Err(ContractError::InvalidConfig {
            reason: "denom must not be empty".to_string(),
        });
    }
    Ok(())
}

/// Capability check shared by every manager-gated handler.
pub fn ensure_manager(
    config: &LotteryConfig,
    sender: &Addr,
    action: &str,
) -> Result<(), ContractError> {
    if *sender != config.manager {
        return Err(ContractError::Unauthorized {
            reason: format!("only the manager can {}", action),
        });
    }
    Ok(())
}

/// Exactly one coin, in the lottery denom, for exactly the ticket price.
fn check_ticket_payment(config: &LotteryConfig, funds: &[Coin]) -> Result<Uint128, ContractError> {
    match funds {
        [coin] if coin.denom == config.denom && coin.amount == config.ticket_price => {
            Ok(coin.amount)
        }
        _ => Err(ContractError::InvalidPayment {
            expected: format!("{}{}", config.ticket_price, config.denom),
            received: describe_funds(funds),
        }),
    }
}

fn describe_funds(funds: &[Coin]) -> String {
    if funds.is_empty() {
        return "nothing".to_string();
    }
    funds
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn new_round_event(round: u64, config: &LotteryConfig) -> Event {
    Event::new("lottery_new_round")
        .add_attribute("round", round.to_string())
        .add_attribute("ticket_price", config.ticket_price.to_string())
        .add_attribute("max_players", config.max_players.to_string())
}

/// Result of drawing a full round, not yet persisted.
struct RoundOutcome {
    record: RoundRecord,
    payout: BankMsg,
}

/// Draw the winner of a full roster and build the payout.
///
/// The index comes from `round_lottery_common::entropy`, which hashes block
/// values and the roster. Those inputs are public, so the draw is
/// predictable by whoever submits the filling entry.
fn select_winner(
    env: &Env,
    config: &LotteryConfig,
    state: &LotteryState,
) -> Result<RoundOutcome, ContractError> {
    let num_players = state.players.len();
    if num_players != config.max_players as usize {
        return Err(ContractError::InvalidState {
            reason: format!(
                "cannot draw with {} of {} players",
                num_players, config.max_players
            ),
        });
    }

    // The pot must be exactly what this round collected
    let expected_prize = config
        .ticket_price
        .checked_mul(Uint128::from(config.max_players))?;
    if state.pot.is_zero() || state.pot != expected_prize {
        return Err(ContractError::PayoutFailure {
            reason: format!(
                "pot {} does not match expected prize {}",
                state.pot, expected_prize
            ),
        });
    }

    let inputs = EntropyInputs {
        block_height: env.block.height,
        chain_id: env.block.chain_id.clone(),
        block_time_nanos: env.block.time.nanos(),
        players: state.players.iter().map(|p| p.to_string()).collect(),
    };
    let seed = compute_round_seed(&inputs);
    let index = winner_index(&seed, num_players).ok_or_else(|| ContractError::InvalidState {
        reason: "cannot draw from an empty roster".to_string(),
    })?;
    let winner = state.players[index].clone();

    let payout = BankMsg::Send {
        to_address: winner.to_string(),
        amount: coins(state.pot.u128(), &config.denom),
    };

    let record = RoundRecord {
        round_number: state.current_round,
        players: state.players.clone(),
        winner,
        winner_index: index as u32,
        prize: state.pot,
        ticket_price: config.ticket_price,
        seed: seed_hex(&seed),
        completed_at: env.block.time,
    };

    Ok(RoundOutcome { record, payout })
}

/// Reset a paid-out roster and open the next round.
fn rollover_round(config: &LotteryConfig, state: &mut LotteryState) -> Result<Event, ContractError> {
    if state.players.len() != config.max_players as usize {
        return Err(ContractError::InvalidState {
            reason: "round can only roll over once it is full".to_string(),
        });
    }

    state.players.clear();
    state.pot = Uint128::zero();
    state.current_round += 1;

    Ok(new_round_event(state.current_round, config))
}

/// Buy a ticket for the current round.
///
/// When this entry fills the roster the same call:
/// 1. Draws the winner from the block/roster entropy
/// 2. Sends the whole pot to the winner
/// 3. Archives the round record and per-winner stats
/// 4. Clears the roster and advances `current_round`
///
/// Everything is computed on in-memory copies and written at the end, so a
/// failure leaves storage untouched. The payout is a bank message; if it
/// fails the chain reverts the whole transaction.
pub fn enter(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut state = LOTTERY_STATE.load(deps.storage)?;

    if state.paused {
        return Err(ContractError::InvalidState {
            reason: "lottery is paused".to_string(),
        });
    }

    let paid = check_ticket_payment(&config, &info.funds)?;

    if state.players.len() >= config.max_players as usize {
        return Err(ContractError::RoundFull {
            max_players: config.max_players,
        });
    }

    let round = state.current_round;
    state.players.push(info.sender.clone());
    state.pot = state.pot.checked_add(paid)?;

    let mut response = Response::new()
        .add_attribute("action", "enter")
        .add_attribute("player", info.sender.to_string())
        .add_attribute("round", round.to_string())
        .add_event(
            Event::new("lottery_player_entered")
                .add_attribute("player", info.sender.to_string())
                .add_attribute("round", round.to_string())
                .add_attribute("players", state.players.len().to_string())
                .add_attribute("max_players", config.max_players.to_string()),
        );

    if state.players.len() < config.max_players as usize {
        LOTTERY_STATE.save(deps.storage, &state)?;
        return Ok(response);
    }

    let RoundOutcome { record, payout } = select_winner(&env, &config, &state)?;
    state.total_prizes_paid = state.total_prizes_paid.checked_add(record.prize)?;

    let win_count = USER_WIN_COUNT
        .may_load(deps.storage, &record.winner)?
        .unwrap_or(0);
    let user_total = USER_TOTAL_WON
        .may_load(deps.storage, &record.winner)?
        .unwrap_or(Uint128::zero())
        .checked_add(record.prize)?;

    let new_round = rollover_round(&config, &mut state)?;

    LOTTERY_ROUNDS.save(deps.storage, record.round_number, &record)?;
    USER_WINS.save(
        deps.storage,
        (&record.winner, record.round_number),
        &record.prize,
    )?;
    USER_WIN_COUNT.save(deps.storage, &record.winner, &(win_count + 1))?;
    USER_TOTAL_WON.save(deps.storage, &record.winner, &user_total)?;
    LOTTERY_STATE.save(deps.storage, &state)?;

    response = response
        .add_message(payout)
        .add_attribute("winner", record.winner.to_string())
        .add_attribute("prize", record.prize.to_string())
        .add_event(
            Event::new("lottery_winner_selected")
                .add_attribute("round", record.round_number.to_string())
                .add_attribute("winner", record.winner.to_string())
                .add_attribute("amount", record.prize.to_string())
                .add_attribute("denom", config.denom.clone())
                .add_attribute("winner_index", record.winner_index.to_string())
                .add_attribute("seed", record.seed.clone()),
        )
        .add_event(new_round);

    Ok(response)
}

/// Pause or resume entries. Manager only.
pub fn set_pause(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    paused: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_manager(&config, &info.sender, "pause the lottery")?;

    let mut state = LOTTERY_STATE.load(deps.storage)?;
    state.paused = paused;
    LOTTERY_STATE.save(deps.storage, &state)?;

    Ok(Response::new()
        .add_attribute("action", "set_pause")
        .add_attribute("paused", paused.to_string())
        .add_event(Event::new("lottery_pause_changed").add_attribute("paused", paused.to_string())))
}

/// Reconfigure ticket price and capacity between rounds. Manager only.
///
/// The round counter is left alone: only a completed round advances it.
pub fn start_new_lottery(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    ticket_price: Uint128,
    max_players: u32,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_manager(&config, &info.sender, "start a new lottery")?;

    let state = LOTTERY_STATE.load(deps.storage)?;
    if !state.players.is_empty() {
        return Err(ContractError::InvalidState {
            reason: format!(
                "round {} is in progress with {} players",
                state.current_round,
                state.players.len()
            ),
        });
    }

    validate_lottery_params(ticket_price, max_players)?;

    config.ticket_price = ticket_price;
    config.max_players = max_players;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "start_new_lottery")
        .add_attribute("round", state.current_round.to_string())
        .add_event(new_round_event(state.current_round, &config)))
}
