use accrual::AccrualConfig;
use cstake::utils::AdminChange;
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, token, Address, BytesN, Env,
};

use crate::{
    accounting,
    error::ContractError,
    msg::{ConfigResponse, PositionResponse},
    storage::{
        decrease_total_staked, get_admin, get_config, get_position, get_total_staked,
        increase_total_staked, save_admin, save_config, Config, PENDING_ADMIN,
    },
};

// Metadata that is added on to the WASM custom section
contractmeta!(
    key = "Description",
    val = "Confidential staking with linear time based reward accrual"
);

#[contract]
pub struct ConfidentialStaking;

pub trait StakingTrait {
    /// Locks one unit of the staked token and settles pending reward.
    fn stake_one(env: Env, sender: Address) -> Result<(), ContractError>;

    /// Returns one unit of the staked token and settles pending reward.
    fn withdraw_one(env: Env, sender: Address) -> Result<(), ContractError>;

    /// Pays out the whole settled reward, returns the paid amount.
    fn claim(env: Env, sender: Address) -> Result<u64, ContractError>;

    /// Tops up the reward reserve the claims are paid from.
    fn fund_rewards(env: Env, sender: Address, amount: i128) -> Result<(), ContractError>;

    fn propose_admin(
        env: Env,
        new_admin: Address,
        time_limit: Option<u64>,
    ) -> Result<Address, ContractError>;

    fn revoke_admin_change(env: Env) -> Result<(), ContractError>;

    fn accept_admin(env: Env) -> Result<Address, ContractError>;

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>);

    // QUERIES

    fn get_staked(env: Env, user: Address) -> u64;

    /// Reward owed as of the current ledger timestamp, nothing is written.
    fn get_accrued_usdt(env: Env, user: Address) -> Result<u64, ContractError>;

    fn get_last_update(env: Env, user: Address) -> u64;

    fn query_position(env: Env, user: Address) -> Result<PositionResponse, ContractError>;

    fn interest_rate_per_day(env: Env) -> u64;

    fn query_config(env: Env) -> ConfigResponse;

    fn query_admin(env: Env) -> Address;

    fn query_total_staked(env: Env) -> u128;

    fn query_reward_reserve(env: Env) -> i128;
}

#[contractimpl]
impl ConfidentialStaking {
    pub fn __constructor(
        env: Env,
        admin: Address,
        staked_token: Address,
        reward_token: Address,
        accrual: AccrualConfig,
    ) {
        if staked_token == reward_token {
            log!(
                &env,
                "Staking: Initialize: staked and reward token must be different"
            );
            panic_with_error!(&env, ContractError::TokensIdentical);
        }
        if accrual.validate().is_err() {
            log!(
                &env,
                "Staking: Initialize: unit and day length must be bigger than 0"
            );
            panic_with_error!(&env, ContractError::InvalidConfig);
        }

        let config = Config {
            staked_token: staked_token.clone(),
            reward_token: reward_token.clone(),
            accrual,
        };
        save_config(&env, &config);
        save_admin(&env, &admin);

        env.events()
            .publish(("initialize", "staked token"), &staked_token);
        env.events()
            .publish(("initialize", "reward token"), &reward_token);
    }
}

#[contractimpl]
impl StakingTrait for ConfidentialStaking {
    fn stake_one(env: Env, sender: Address) -> Result<(), ContractError> {
        sender.require_auth();

        let now = env.ledger().timestamp();
        let mut ledger = accounting::ledger(&env, get_config(&env))?;
        let unit = ledger.config().unit;

        ledger.stake_one(&sender, now).map_err(|err| {
            log!(&env, "Staking: Stake one: rejected for {} at {}", sender, now);
            ContractError::from(err)
        })?;
        increase_total_staked(&env, unit);

        Ok(())
    }

    fn withdraw_one(env: Env, sender: Address) -> Result<(), ContractError> {
        sender.require_auth();

        let now = env.ledger().timestamp();
        let mut ledger = accounting::ledger(&env, get_config(&env))?;
        let unit = ledger.config().unit;

        ledger.withdraw_one(&sender, now).map_err(|err| {
            log!(
                &env,
                "Staking: Withdraw one: rejected for {} at {}",
                sender,
                now
            );
            ContractError::from(err)
        })?;
        decrease_total_staked(&env, unit);

        Ok(())
    }

    fn claim(env: Env, sender: Address) -> Result<u64, ContractError> {
        sender.require_auth();

        let now = env.ledger().timestamp();
        let mut ledger = accounting::ledger(&env, get_config(&env))?;

        let amount = ledger.claim(&sender, now).map_err(|err| {
            log!(&env, "Staking: Claim: rejected for {} at {}", sender, now);
            ContractError::from(err)
        })?;

        Ok(amount)
    }

    fn fund_rewards(env: Env, sender: Address, amount: i128) -> Result<(), ContractError> {
        sender.require_auth();

        if amount <= 0 {
            log!(
                &env,
                "Staking: Fund rewards: amount {} must be bigger than 0",
                amount
            );
            return Err(ContractError::InvalidAmount);
        }

        let config = get_config(&env);
        token::Client::new(&env, &config.reward_token).transfer(
            &sender,
            &env.current_contract_address(),
            &amount,
        );

        env.events().publish(("fund_rewards", "user"), &sender);
        env.events().publish(("fund_rewards", "amount"), amount);

        Ok(())
    }

    fn propose_admin(
        env: Env,
        new_admin: Address,
        time_limit: Option<u64>,
    ) -> Result<Address, ContractError> {
        let current_admin = get_admin(&env);
        current_admin.require_auth();

        if current_admin == new_admin {
            log!(&env, "Staking: Propose admin: trying to set the same admin");
            return Err(ContractError::SameAdmin);
        }

        env.storage().instance().set(
            &PENDING_ADMIN,
            &AdminChange {
                new_admin: new_admin.clone(),
                time_limit,
            },
        );

        env.events().publish(
            ("Staking: ", "Admin replacement requested by old admin: "),
            &current_admin,
        );
        env.events()
            .publish(("Staking: ", "Replace with new admin: "), &new_admin);

        Ok(new_admin)
    }

    fn revoke_admin_change(env: Env) -> Result<(), ContractError> {
        let current_admin = get_admin(&env);
        current_admin.require_auth();

        if !env.storage().instance().has(&PENDING_ADMIN) {
            log!(&env, "Staking: Revoke admin change: no admin change in place");
            return Err(ContractError::NoAdminChangeInPlace);
        }

        env.storage().instance().remove(&PENDING_ADMIN);

        env.events().publish(("Staking: ", "Undo admin change: "), ());

        Ok(())
    }

    fn accept_admin(env: Env) -> Result<Address, ContractError> {
        let admin_change: AdminChange = env
            .storage()
            .instance()
            .get(&PENDING_ADMIN)
            .ok_or_else(|| {
                log!(&env, "Staking: Accept admin: no admin change in place");
                ContractError::NoAdminChangeInPlace
            })?;

        let pending_admin = admin_change.new_admin.clone();
        pending_admin.require_auth();

        if admin_change.is_expired(env.ledger().timestamp()) {
            log!(&env, "Staking: Accept admin: admin change expired");
            return Err(ContractError::AdminChangeExpired);
        }

        env.storage().instance().remove(&PENDING_ADMIN);
        save_admin(&env, &pending_admin);

        env.events()
            .publish(("Staking: ", "Accepted new admin: "), &pending_admin);

        Ok(pending_admin)
    }

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let admin = get_admin(&env);
        admin.require_auth();

        env.deployer().update_current_contract_wasm(new_wasm_hash);
    }

    // QUERIES

    fn get_staked(env: Env, user: Address) -> u64 {
        get_position(&env, &user).staked_units
    }

    fn get_accrued_usdt(env: Env, user: Address) -> Result<u64, ContractError> {
        let ledger = accounting::ledger(&env, get_config(&env))?;

        ledger
            .accrued(&user, env.ledger().timestamp())
            .map_err(ContractError::from)
    }

    fn get_last_update(env: Env, user: Address) -> u64 {
        get_position(&env, &user).last_update_time
    }

    fn query_position(env: Env, user: Address) -> Result<PositionResponse, ContractError> {
        let ledger = accounting::ledger(&env, get_config(&env))?;
        let position = ledger.position(&user);
        let pending_reward = ledger.accrued(&user, env.ledger().timestamp())?;

        Ok(PositionResponse {
            staked_units: position.staked_units,
            settled_reward: position.accrued_reward,
            pending_reward,
            last_update_time: position.last_update_time,
        })
    }

    fn interest_rate_per_day(env: Env) -> u64 {
        get_config(&env).accrual.rate_per_day
    }

    fn query_config(env: Env) -> ConfigResponse {
        ConfigResponse {
            config: get_config(&env),
        }
    }

    fn query_admin(env: Env) -> Address {
        get_admin(&env)
    }

    fn query_total_staked(env: Env) -> u128 {
        get_total_staked(&env)
    }

    fn query_reward_reserve(env: Env) -> i128 {
        let config = get_config(&env);
        token::Client::new(&env, &config.reward_token).balance(&env.current_contract_address())
    }
}
