use accrual::AccrualError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    InsufficientStaked = 700,
    AccrualOverflow = 701,
    NothingToClaim = 702,
    InsufficientBalance = 703,
    RewardReserveDepleted = 704,
    StakeOverflow = 705,
    StaleTimestamp = 706,
    InvalidConfig = 707,
    TokensIdentical = 708,
    InvalidAmount = 709,
    ConfigNotSet = 710,
    AdminNotSet = 711,
    SameAdmin = 712,
    NoAdminChangeInPlace = 713,
    AdminChangeExpired = 714,
}

impl From<AccrualError> for ContractError {
    fn from(err: AccrualError) -> Self {
        match err {
            AccrualError::InsufficientStaked => ContractError::InsufficientStaked,
            AccrualError::AccrualOverflow => ContractError::AccrualOverflow,
            AccrualError::NothingToClaim => ContractError::NothingToClaim,
            AccrualError::InsufficientBalance => ContractError::InsufficientBalance,
            AccrualError::RewardReserveDepleted => ContractError::RewardReserveDepleted,
            AccrualError::StakeOverflow => ContractError::StakeOverflow,
            AccrualError::StaleTimestamp => ContractError::StaleTimestamp,
            AccrualError::InvalidConfig => ContractError::InvalidConfig,
        }
    }
}
