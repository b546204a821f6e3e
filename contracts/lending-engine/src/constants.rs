/// Interest accrues once per whole elapsed day; partial days earn nothing.
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Daily interest rates are per mille: a rate of 2 charges 0.2% per day.
pub const DAILY_RATE_SCALE: i128 = 1_000;
