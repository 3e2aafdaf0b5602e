use soroban_sdk::contracttype;

use crate::storage::Config;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigResponse {
    pub config: Config,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionResponse {
    /// Staked base units of the staked token
    pub staked_units: u64,
    /// Reward settled by the last stake, withdraw or claim
    pub settled_reward: u64,
    /// Reward owed as of the current ledger timestamp
    pub pending_reward: u64,
    pub last_update_time: u64,
}
