use accrual::{
    AccrualError, AccrualLedger, EventSink, LedgerEvent, Position, PositionStore,
    RewardAssetRegistry, StakedAssetRegistry,
};
use cstake::utils::to_token_amount;
use soroban_sdk::{log, token, Address, Env};

use crate::{
    error::ContractError,
    storage::{get_position, save_position, Config},
};

pub type Ledger<'a> =
    AccrualLedger<PersistentPositions<'a>, StakedToken<'a>, RewardReserve<'a>, ContractEvents<'a>>;

/// Builds the accrual ledger on top of this contract's storage and token contracts.
pub fn ledger<'a>(env: &'a Env, config: Config) -> Result<Ledger<'a>, ContractError> {
    let staked_asset = StakedToken {
        env,
        client: token::Client::new(env, &config.staked_token),
    };
    let reward_asset = RewardReserve {
        env,
        client: token::Client::new(env, &config.reward_token),
    };

    AccrualLedger::new(
        config.accrual,
        PersistentPositions { env },
        staked_asset,
        reward_asset,
        ContractEvents { env },
    )
    .map_err(ContractError::from)
}

pub struct PersistentPositions<'a> {
    env: &'a Env,
}

impl PositionStore for PersistentPositions<'_> {
    fn load(&self, account: &Address) -> Position {
        get_position(self.env, account)
    }

    fn save(&mut self, account: &Address, position: &Position) {
        save_position(self.env, account, position);
    }
}

/// Custody of the staked token: stakes move into the contract, withdrawals move back out.
pub struct StakedToken<'a> {
    env: &'a Env,
    client: token::Client<'a>,
}

impl StakedAssetRegistry for StakedToken<'_> {
    fn debit(&mut self, account: &Address, amount: u64) -> Result<(), AccrualError> {
        let amount = to_token_amount(amount);
        let balance = self.client.balance(account);
        if balance < amount {
            log!(
                self.env,
                "Staking: Stake one: balance {} is less than the required {}",
                balance,
                amount
            );
            return Err(AccrualError::InsufficientBalance);
        }

        self.client
            .transfer(account, &self.env.current_contract_address(), &amount);
        Ok(())
    }

    fn credit(&mut self, account: &Address, amount: u64) -> Result<(), AccrualError> {
        self.client.transfer(
            &self.env.current_contract_address(),
            account,
            &to_token_amount(amount),
        );
        Ok(())
    }
}

/// Reward payouts come out of the reward tokens held by the contract.
/// Rewards are not minted, so a claim fails once the funded reserve runs short.
pub struct RewardReserve<'a> {
    env: &'a Env,
    client: token::Client<'a>,
}

impl RewardAssetRegistry for RewardReserve<'_> {
    fn credit(&mut self, account: &Address, amount: u64) -> Result<(), AccrualError> {
        let amount = to_token_amount(amount);
        let contract = self.env.current_contract_address();
        let reserve = self.client.balance(&contract);
        if reserve < amount {
            log!(
                self.env,
                "Staking: Claim: reward reserve {} can not pay out {}",
                reserve,
                amount
            );
            return Err(AccrualError::RewardReserveDepleted);
        }

        self.client.transfer(&contract, account, &amount);
        Ok(())
    }
}

pub struct ContractEvents<'a> {
    env: &'a Env,
}

impl EventSink for ContractEvents<'_> {
    fn publish(&mut self, event: LedgerEvent) {
        match event {
            LedgerEvent::Staked { account, units } => {
                self.env
                    .events()
                    .publish(("staked", "user"), (account, units));
            }
            LedgerEvent::Withdrawn { account, units } => {
                self.env
                    .events()
                    .publish(("withdrawn", "user"), (account, units));
            }
            LedgerEvent::Claimed { account, amount } => {
                self.env
                    .events()
                    .publish(("claimed", "user"), (account, amount));
            }
        }
    }
}
