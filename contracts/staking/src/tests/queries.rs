use pretty_assertions::assert_eq;
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env,
};

use super::setup::{deploy, ONE_DAY, ONE_HOUR, ONE_HOUR_REWARD, ONE_UNIT, RATE_PER_DAY};
use crate::msg::PositionResponse;

#[test]
fn unknown_account_reads_as_empty_position() {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| li.timestamp = ONE_DAY);

    let deployment = deploy(&env);
    let user = Address::generate(&env);

    assert_eq!(
        deployment.staking.query_position(&user),
        PositionResponse {
            staked_units: 0,
            settled_reward: 0,
            pending_reward: 0,
            last_update_time: 0,
        }
    );
}

#[test]
fn views_project_without_settling() {
    let env = Env::default();
    env.mock_all_auths();

    let deployment = deploy(&env);
    let staking = &deployment.staking;
    let user = Address::generate(&env);
    deployment.fund_staker(&user, 1);

    staking.stake_one(&user);
    env.ledger().with_mut(|li| li.timestamp = ONE_HOUR);

    assert_eq!(
        staking.query_position(&user),
        PositionResponse {
            staked_units: ONE_UNIT,
            settled_reward: 0,
            pending_reward: ONE_HOUR_REWARD,
            last_update_time: 0,
        }
    );
    // reading did not move the stored clock
    assert_eq!(staking.get_last_update(&user), 0);
}

#[test]
fn repeated_reads_are_identical() {
    let env = Env::default();
    env.mock_all_auths();

    let deployment = deploy(&env);
    let staking = &deployment.staking;
    let user = Address::generate(&env);
    deployment.fund_staker(&user, 1);

    staking.stake_one(&user);
    env.ledger().with_mut(|li| li.timestamp = 12_345);

    assert_eq!(staking.get_staked(&user), staking.get_staked(&user));
    assert_eq!(
        staking.get_accrued_usdt(&user),
        staking.get_accrued_usdt(&user)
    );
    assert_eq!(staking.get_last_update(&user), staking.get_last_update(&user));
    assert_eq!(staking.query_position(&user), staking.query_position(&user));
}

#[test]
fn accounts_accrue_independently() {
    let env = Env::default();
    env.mock_all_auths();

    let deployment = deploy(&env);
    let staking = &deployment.staking;
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    deployment.fund_staker(&alice, 2);
    deployment.fund_staker(&bob, 1);

    staking.stake_one(&alice);
    staking.stake_one(&alice);
    env.ledger().with_mut(|li| li.timestamp = ONE_DAY / 2);
    staking.stake_one(&bob);
    env.ledger().with_mut(|li| li.timestamp = ONE_DAY);

    assert_eq!(staking.get_accrued_usdt(&alice), 2 * RATE_PER_DAY);
    assert_eq!(staking.get_accrued_usdt(&bob), RATE_PER_DAY / 2);
    assert_eq!(staking.query_total_staked(), 3 * ONE_UNIT as u128);
}
