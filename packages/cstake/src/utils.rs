use soroban_sdk::{contracttype, Address};

/// Pending two-step admin replacement.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminChange {
    pub new_admin: Address,
    /// Last ledger timestamp at which the change can still be accepted
    pub time_limit: Option<u64>,
}

impl AdminChange {
    pub fn is_expired(&self, now: u64) -> bool {
        match self.time_limit {
            Some(limit) => now > limit,
            None => false,
        }
    }
}

/// Token contracts count in i128 while the ledger counts in u64 base units.
pub fn to_token_amount(amount: u64) -> i128 {
    i128::from(amount)
}
