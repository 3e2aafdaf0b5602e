#![no_std]

//! Linear, time based reward accrual for staked positions.
//!
//! A position earns `rate_per_day` reward base units per staked unit per day,
//! accrued per second and truncated toward zero. Accrual is settled lazily:
//! every mutation of a position first brings its reward up to the current
//! timestamp and only then applies its own effect.

mod ledger;

pub use ledger::{
    AccrualLedger, EventSink, LedgerEvent, PositionStore, RewardAssetRegistry,
    StakedAssetRegistry,
};

use soroban_sdk::contracttype;

/// 10^6 base units, one whole staked token.
pub const ONE_UNIT: u64 = 1_000_000;
/// Ten whole reward tokens per staked unit per day.
pub const DEFAULT_RATE_PER_DAY: u64 = 10_000_000;
pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AccrualError {
    /// Withdraw requested with less than one unit staked
    InsufficientStaked,
    /// Settled reward would not fit into the reward counter
    AccrualOverflow,
    /// Claim with nothing settled under `ClaimPolicy::RejectEmpty`
    NothingToClaim,
    /// The staked-asset registry refused the debit
    InsufficientBalance,
    /// The reward-asset registry cannot pay the settled amount
    RewardReserveDepleted,
    /// Staked units would not fit into the staked counter
    StakeOverflow,
    /// Operation timestamp is older than the last settlement
    StaleTimestamp,
    InvalidConfig,
}

/// What `claim` does when the settled reward is zero.
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ClaimPolicy {
    /// Succeed without paying anything
    Allow = 0,
    /// Fail with `AccrualError::NothingToClaim`
    RejectEmpty = 1,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccrualConfig {
    /// Base units moved by a single stake or withdraw
    pub unit: u64,
    /// Reward base units earned per day by one staked unit
    pub rate_per_day: u64,
    pub seconds_per_day: u64,
    pub claim_policy: ClaimPolicy,
}

impl Default for AccrualConfig {
    fn default() -> Self {
        AccrualConfig {
            unit: ONE_UNIT,
            rate_per_day: DEFAULT_RATE_PER_DAY,
            seconds_per_day: SECONDS_PER_DAY,
            claim_policy: ClaimPolicy::Allow,
        }
    }
}

impl AccrualConfig {
    pub fn validate(&self) -> Result<(), AccrualError> {
        if self.unit == 0 || self.seconds_per_day == 0 {
            return Err(AccrualError::InvalidConfig);
        }
        Ok(())
    }
}

/// Per account staking state. A never touched account reads as all zero.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Position {
    /// Staked base units, always a multiple of the configured unit
    pub staked_units: u64,
    /// Reward owed up to `last_update_time`
    pub accrued_reward: u64,
    /// Timestamp of the last settlement, zero for a fresh position
    pub last_update_time: u64,
}

/// Reward earned by `position` between its last settlement and `now`.
///
/// Evaluated as `rate * elapsed * staked / (seconds_per_day * unit)` in 128 bit
/// so the division happens only once; sub-unit remainders are dropped.
pub fn accrue(config: &AccrualConfig, position: &Position, now: u64) -> Result<u64, AccrualError> {
    if now < position.last_update_time {
        return Err(AccrualError::StaleTimestamp);
    }
    let elapsed = now - position.last_update_time;
    if position.staked_units == 0 || elapsed == 0 {
        return Ok(0);
    }

    let numerator = u128::from(config.rate_per_day)
        .checked_mul(u128::from(elapsed))
        .and_then(|n| n.checked_mul(u128::from(position.staked_units)))
        .ok_or(AccrualError::AccrualOverflow)?;
    let denominator = u128::from(config.seconds_per_day) * u128::from(config.unit);
    if denominator == 0 {
        return Err(AccrualError::InvalidConfig);
    }

    u64::try_from(numerator / denominator).map_err(|_| AccrualError::AccrualOverflow)
}

/// Returns `position` brought up to date as of `now`. The input is left untouched
/// so a failing operation never observes a half settled position.
pub fn settle(
    config: &AccrualConfig,
    position: &Position,
    now: u64,
) -> Result<Position, AccrualError> {
    let newly_accrued = accrue(config, position, now)?;
    let accrued_reward = position
        .accrued_reward
        .checked_add(newly_accrued)
        .ok_or(AccrualError::AccrualOverflow)?;

    Ok(Position {
        staked_units: position.staked_units,
        accrued_reward,
        last_update_time: now,
    })
}

/// Reward the position would hold if it were settled at `now`, without settling it.
pub fn project(config: &AccrualConfig, position: &Position, now: u64) -> Result<u64, AccrualError> {
    // views may run with a clock behind the stored timestamp; nothing accrues then
    let now = now.max(position.last_update_time);
    settle(config, position, now).map(|settled| settled.accrued_reward)
}
