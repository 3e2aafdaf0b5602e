/// Ledgers closed per day at a five second close time.
pub const DAY_IN_LEDGERS: u32 = 17280;

/// Instance storage (config, admin, totals) is kept alive for a week.
pub const INSTANCE_TARGET_TTL: u32 = 7 * DAY_IN_LEDGERS;
/// Below this the instance TTL is bumped back to `INSTANCE_TARGET_TTL`.
pub const INSTANCE_RENEWAL_THRESHOLD: u32 = INSTANCE_TARGET_TTL - DAY_IN_LEDGERS;

/// Staking positions are kept alive for a month after their last touch.
pub const POSITION_TARGET_TTL: u32 = 30 * DAY_IN_LEDGERS;
/// Below this a position's TTL is bumped back to `POSITION_TARGET_TTL`.
pub const POSITION_RENEWAL_THRESHOLD: u32 = POSITION_TARGET_TTL - DAY_IN_LEDGERS;
