use accrual::{AccrualConfig, Position};
use cstake::ttl::{
    INSTANCE_RENEWAL_THRESHOLD, INSTANCE_TARGET_TTL, POSITION_RENEWAL_THRESHOLD,
    POSITION_TARGET_TTL,
};
use soroban_sdk::{contracttype, log, panic_with_error, symbol_short, Address, Env, Symbol};

use crate::error::ContractError;

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const PENDING_ADMIN: Symbol = symbol_short!("p_admin");
const CONFIG: Symbol = symbol_short!("CONFIG");
const TOTAL_STAKED: Symbol = symbol_short!("TOT_STK");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Token locked by `stake_one`, one configured unit at a time
    pub staked_token: Address,
    /// Token paid out by `claim` from the contract's own reserve
    pub reward_token: Address,
    pub accrual: AccrualConfig,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Position(Address),
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&CONFIG, config);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_RENEWAL_THRESHOLD, INSTANCE_TARGET_TTL);
}

pub fn get_config(env: &Env) -> Config {
    let config = env.storage().instance().get(&CONFIG).unwrap_or_else(|| {
        log!(env, "Staking: Config not set");
        panic_with_error!(env, ContractError::ConfigNotSet)
    });
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_RENEWAL_THRESHOLD, INSTANCE_TARGET_TTL);

    config
}

pub fn save_admin(env: &Env, address: &Address) {
    env.storage().instance().set(&ADMIN, address);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_RENEWAL_THRESHOLD, INSTANCE_TARGET_TTL);
}

pub fn get_admin(env: &Env) -> Address {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_RENEWAL_THRESHOLD, INSTANCE_TARGET_TTL);

    env.storage().instance().get(&ADMIN).unwrap_or_else(|| {
        log!(env, "Staking: Admin not set");
        panic_with_error!(env, ContractError::AdminNotSet)
    })
}

pub fn get_position(env: &Env, account: &Address) -> Position {
    let key = DataKey::Position(account.clone());
    let position = env
        .storage()
        .persistent()
        .get::<_, Position>(&key)
        .unwrap_or_default();
    env.storage().persistent().has(&key).then(|| {
        env.storage().persistent().extend_ttl(
            &key,
            POSITION_RENEWAL_THRESHOLD,
            POSITION_TARGET_TTL,
        );
    });

    position
}

pub fn save_position(env: &Env, account: &Address, position: &Position) {
    let key = DataKey::Position(account.clone());
    env.storage().persistent().set(&key, position);
    env.storage().persistent().extend_ttl(
        &key,
        POSITION_RENEWAL_THRESHOLD,
        POSITION_TARGET_TTL,
    );
}

pub fn get_total_staked(env: &Env) -> u128 {
    env.storage().instance().get(&TOTAL_STAKED).unwrap_or(0u128)
}

pub fn increase_total_staked(env: &Env, amount: u64) {
    let total = get_total_staked(env) + u128::from(amount);
    env.storage().instance().set(&TOTAL_STAKED, &total);
}

pub fn decrease_total_staked(env: &Env, amount: u64) {
    let total = get_total_staked(env).saturating_sub(u128::from(amount));
    env.storage().instance().set(&TOTAL_STAKED, &total);
}
