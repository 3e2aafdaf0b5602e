use soroban_sdk::Address;

use crate::{project, settle, AccrualConfig, AccrualError, ClaimPolicy, Position};

/// Where positions are kept between operations.
pub trait PositionStore {
    /// Returns the stored position, or an all zero one for an unknown account.
    fn load(&self, account: &Address) -> Position;

    fn save(&mut self, account: &Address, position: &Position);
}

/// Balance keeper of the staked asset.
pub trait StakedAssetRegistry {
    /// Takes `amount` from the account, failing with `InsufficientBalance` when it can't.
    fn debit(&mut self, account: &Address, amount: u64) -> Result<(), AccrualError>;

    fn credit(&mut self, account: &Address, amount: u64) -> Result<(), AccrualError>;
}

/// Balance keeper of the reward asset.
pub trait RewardAssetRegistry {
    fn credit(&mut self, account: &Address, amount: u64) -> Result<(), AccrualError>;
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LedgerEvent {
    Staked { account: Address, units: u64 },
    Withdrawn { account: Address, units: u64 },
    Claimed { account: Address, amount: u64 },
}

pub trait EventSink {
    fn publish(&mut self, event: LedgerEvent);
}

/// Per account accrual ledger.
///
/// Every mutation settles a copy of the position first, checks its own
/// precondition, performs the registry call and only then stores the result
/// and publishes the event. Any error therefore leaves the stored position
/// and both registries exactly as they were.
pub struct AccrualLedger<S, K, R, E> {
    config: AccrualConfig,
    positions: S,
    staked_asset: K,
    reward_asset: R,
    events: E,
}

impl<S, K, R, E> AccrualLedger<S, K, R, E>
where
    S: PositionStore,
    K: StakedAssetRegistry,
    R: RewardAssetRegistry,
    E: EventSink,
{
    pub fn new(
        config: AccrualConfig,
        positions: S,
        staked_asset: K,
        reward_asset: R,
        events: E,
    ) -> Result<Self, AccrualError> {
        config.validate()?;
        Ok(AccrualLedger {
            config,
            positions,
            staked_asset,
            reward_asset,
            events,
        })
    }

    pub fn config(&self) -> &AccrualConfig {
        &self.config
    }

    pub fn stake_one(&mut self, account: &Address, now: u64) -> Result<Position, AccrualError> {
        let unit = self.config.unit;
        let mut position = settle(&self.config, &self.positions.load(account), now)?;
        position.staked_units = position
            .staked_units
            .checked_add(unit)
            .ok_or(AccrualError::StakeOverflow)?;

        self.staked_asset.debit(account, unit)?;
        self.positions.save(account, &position);
        self.events.publish(LedgerEvent::Staked {
            account: account.clone(),
            units: unit,
        });

        Ok(position)
    }

    pub fn withdraw_one(&mut self, account: &Address, now: u64) -> Result<Position, AccrualError> {
        let unit = self.config.unit;
        let stored = self.positions.load(account);
        if stored.staked_units < unit {
            return Err(AccrualError::InsufficientStaked);
        }

        let mut position = settle(&self.config, &stored, now)?;
        position.staked_units -= unit;

        self.staked_asset.credit(account, unit)?;
        self.positions.save(account, &position);
        self.events.publish(LedgerEvent::Withdrawn {
            account: account.clone(),
            units: unit,
        });

        Ok(position)
    }

    /// Pays out the whole settled reward and returns the paid amount.
    pub fn claim(&mut self, account: &Address, now: u64) -> Result<u64, AccrualError> {
        let mut position = settle(&self.config, &self.positions.load(account), now)?;
        let amount = position.accrued_reward;

        if amount == 0 {
            if self.config.claim_policy == ClaimPolicy::RejectEmpty {
                return Err(AccrualError::NothingToClaim);
            }
        } else {
            self.reward_asset.credit(account, amount)?;
        }

        position.accrued_reward = 0;
        self.positions.save(account, &position);
        self.events.publish(LedgerEvent::Claimed {
            account: account.clone(),
            amount,
        });

        Ok(amount)
    }

    pub fn position(&self, account: &Address) -> Position {
        self.positions.load(account)
    }

    pub fn staked(&self, account: &Address) -> u64 {
        self.positions.load(account).staked_units
    }

    /// Reward owed as of `now`, projected without touching the stored position.
    pub fn accrued(&self, account: &Address, now: u64) -> Result<u64, AccrualError> {
        project(&self.config, &self.positions.load(account), now)
    }

    pub fn last_update(&self, account: &Address) -> u64 {
        self.positions.load(account).last_update_time
    }

    pub fn staked_asset(&self) -> &K {
        &self.staked_asset
    }

    pub fn reward_asset(&self) -> &R {
        &self.reward_asset
    }

    pub fn events(&self) -> &E {
        &self.events
    }
}
