//! Program-wide constants.

/// Basis points denominator (10_000 bps = 100%).
pub const BPS_DENOM: u64 = 10_000;

/// Offset added to normal-token lock ids. LP lock ids stay below it, so the
/// two kinds can never collide in one id space.
pub const ID_PADDING: u64 = 1_000_000;

/// Max byte length of a lock's free-form description.
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// Max lock ids held in one per-token index account.
pub const MAX_LOCKS_PER_TOKEN: usize = 1_000;

/// Max lock ids held in one per-owner index account.
pub const MAX_LOCKS_PER_OWNER: usize = 256;

/// Max lock ids returned per enumeration page.
pub const MAX_QUOTE_PAGE: u64 = 100;
