use accrual::AccrualConfig;
use soroban_sdk::{testutils::Address as _, token, Address, Env};

use crate::contract::{ConfidentialStaking, ConfidentialStakingClient};

pub const ONE_UNIT: u64 = 1_000_000;
pub const RATE_PER_DAY: u64 = 10_000_000;
pub const ONE_HOUR: u64 = 3_600;
pub const ONE_DAY: u64 = 86_400;
/// Reward for one staked unit over one hour: floor(10_000_000 * 3_600 / 86_400)
pub const ONE_HOUR_REWARD: u64 = 416_666;

pub fn deploy_token_contract<'a>(
    env: &Env,
    admin: &Address,
) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
    let address = env
        .register_stellar_asset_contract_v2(admin.clone())
        .address();
    (
        token::Client::new(env, &address),
        token::StellarAssetClient::new(env, &address),
    )
}

pub fn deploy_staking_contract<'a>(
    env: &Env,
    admin: &Address,
    staked_token: &Address,
    reward_token: &Address,
    accrual: AccrualConfig,
) -> ConfidentialStakingClient<'a> {
    ConfidentialStakingClient::new(
        env,
        &env.register(
            ConfidentialStaking,
            (
                admin.clone(),
                staked_token.clone(),
                reward_token.clone(),
                accrual,
            ),
        ),
    )
}

pub struct Deployment<'a> {
    pub admin: Address,
    pub staking: ConfidentialStakingClient<'a>,
    pub staked_token: token::Client<'a>,
    pub staked_token_admin: token::StellarAssetClient<'a>,
    pub reward_token: token::Client<'a>,
    pub reward_token_admin: token::StellarAssetClient<'a>,
}

impl Deployment<'_> {
    /// Mints `units` whole staked tokens to `user`.
    pub fn fund_staker(&self, user: &Address, units: u64) {
        self.staked_token_admin
            .mint(user, &i128::from(units * ONE_UNIT));
    }

    /// Puts `amount` reward base units into the staking contract's reserve.
    pub fn fund_reserve(&self, amount: i128) {
        self.reward_token_admin.mint(&self.admin, &amount);
        self.staking.fund_rewards(&self.admin, &amount);
    }
}

pub fn deploy_with<'a>(env: &Env, accrual: AccrualConfig) -> Deployment<'a> {
    let admin = Address::generate(env);
    let (staked_token, staked_token_admin) = deploy_token_contract(env, &admin);
    let (reward_token, reward_token_admin) = deploy_token_contract(env, &admin);

    let staking = deploy_staking_contract(
        env,
        &admin,
        &staked_token.address,
        &reward_token.address,
        accrual,
    );

    Deployment {
        admin,
        staking,
        staked_token,
        staked_token_admin,
        reward_token,
        reward_token_admin,
    }
}

pub fn deploy<'a>(env: &Env) -> Deployment<'a> {
    deploy_with(env, AccrualConfig::default())
}
