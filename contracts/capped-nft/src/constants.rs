use super::*;

/// Total number of tokens an instance will ever issue.
pub const MAX_SUPPLY: u32 = 10;

/// Upper bound on the quantity of a single purchase call.
pub const MAX_MINT: u32 = 10;

/// Price of a single token.
pub const UNIT_PRICE: Amount = Amount::from_micro_ccd(50_000);
