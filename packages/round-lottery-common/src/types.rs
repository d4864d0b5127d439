use cosmwasm_schema::cw_serde;

/// Block and roster values hashed together to pick a round's winner.
///
/// Every field is public on-chain state at the time the final ticket is
/// bought, so anyone who can order or time that transaction can predict the
/// outcome.
#[cw_serde]
pub struct EntropyInputs {
    pub block_height: u64,
    pub chain_id: String,
    /// Block time in nanoseconds since the unix epoch
    pub block_time_nanos: u64,
    /// Roster in entry order, as bech32 strings
    pub players: Vec<String>,
}
