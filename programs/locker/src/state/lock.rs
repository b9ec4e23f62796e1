use anchor_lang::prelude::*;

use crate::constants::MAX_DESCRIPTION_LEN;
use crate::error::LockerError;

pub const LOCK_SEED: &str = "lock";
pub const VAULT_SEED: &str = "vault";

/// One token lock. Append-only: the record is mutated in place by unlock,
/// amendment and ownership transfer, but never closed, so fully released
/// locks stay queryable.
#[account]
#[derive(Debug)]
pub struct Lock {
    pub id: u64,               // Kind-namespaced, monotonically assigned
    pub owner: Pubkey,         // Current controlling identity
    pub token: Pubkey,         // Mint of the locked asset
    pub is_lp_token: bool,     // Classification for indexing/display only
    pub amount: u64,           // Total ever deposited (never decreases)
    pub lock_date: i64,        // Creation timestamp
    pub tge_date: i64,         // Unlock date (cliff) or TGE date (vesting)
    pub tge_bps: u16,          // Bps released at tge_date (vesting only)
    pub cycle_seconds: u64,    // 0 = cliff lock, >0 = vesting period
    pub cycle_bps: u16,        // Bps released per elapsed cycle (vesting only)
    pub unlocked_amount: u64,  // Cumulative amount already withdrawn
    pub bump: u8,              // PDA bump
    pub description: String,   // Free-form metadata
}

impl Lock {
    pub const SIZE: usize =
        8 +  // id
        32 + // owner
        32 + // token
        1 +  // is_lp_token
        8 +  // amount
        8 +  // lock_date
        8 +  // tge_date
        2 +  // tge_bps
        8 +  // cycle_seconds
        2 +  // cycle_bps
        8 +  // unlocked_amount
        1 +  // bump
        4 + MAX_DESCRIPTION_LEN; // description

    /// Cliff locks release their full amount at `tge_date` in one step.
    pub fn is_cliff(&self) -> bool {
        self.cycle_seconds == 0
    }

    /// Amount still in custody.
    pub fn locked_balance(&self) -> u64 {
        self.amount.saturating_sub(self.unlocked_amount)
    }

    /// Record a withdrawal of `amount`. The `Overdraw` guard is defensive:
    /// callers route through `schedule::withdrawable_amount`, which never
    /// exceeds the locked balance.
    pub fn record_withdrawal(&mut self, amount: u64) -> Result<()> {
        let unlocked = self
            .unlocked_amount
            .checked_add(amount)
            .ok_or(LockerError::MathOverflow)?;
        require!(unlocked <= self.amount, LockerError::Overdraw);
        self.unlocked_amount = unlocked;
        Ok(())
    }

    /// Validate an amendment without touching the record and return the
    /// amount delta to be pulled into custody. Amendments are monotonic:
    /// amounts only grow, dates only move later.
    pub fn validate_amendment(
        &self,
        new_amount: Option<u64>,
        new_tge_date: Option<i64>,
    ) -> Result<u64> {
        require!(
            new_amount.is_some() || new_tge_date.is_some(),
            LockerError::InvalidAmendment
        );
        if let Some(amount) = new_amount {
            require!(amount >= self.amount, LockerError::InvalidAmendment);
        }
        if let Some(tge_date) = new_tge_date {
            require!(tge_date >= self.tge_date, LockerError::InvalidAmendment);
        }
        Ok(new_amount.map_or(0, |amount| amount - self.amount))
    }

    /// Apply an amendment previously accepted by `validate_amendment`.
    pub fn apply_amendment(&mut self, new_amount: Option<u64>, new_tge_date: Option<i64>) {
        if let Some(amount) = new_amount {
            self.amount = amount;
        }
        if let Some(tge_date) = new_tge_date {
            self.tge_date = tge_date;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cliff_lock(amount: u64, tge_date: i64) -> Lock {
        Lock {
            id: crate::constants::ID_PADDING,
            owner: Pubkey::new_unique(),
            token: Pubkey::new_unique(),
            is_lp_token: false,
            amount,
            lock_date: 0,
            tge_date,
            tge_bps: 0,
            cycle_seconds: 0,
            cycle_bps: 0,
            unlocked_amount: 0,
            bump: 255,
            description: String::new(),
        }
    }

    #[test]
    fn withdrawal_bookkeeping() {
        let mut lock = cliff_lock(1_000, 86_400);
        lock.record_withdrawal(400).unwrap();
        assert_eq!(lock.unlocked_amount, 400);
        assert_eq!(lock.locked_balance(), 600);

        lock.record_withdrawal(600).unwrap();
        assert_eq!(lock.unlocked_amount, 1_000);
        assert_eq!(lock.locked_balance(), 0);
    }

    #[test]
    fn withdrawal_beyond_amount_is_overdraw() {
        let mut lock = cliff_lock(1_000, 86_400);
        lock.record_withdrawal(999).unwrap();
        assert_eq!(
            lock.record_withdrawal(2),
            Err(LockerError::Overdraw.into())
        );
        // Rejected withdrawal leaves the record untouched.
        assert_eq!(lock.unlocked_amount, 999);
    }

    #[test]
    fn amendment_top_up_and_extension() {
        let mut lock = cliff_lock(1_000, 86_400);
        let delta = lock.validate_amendment(Some(1_500), Some(172_800)).unwrap();
        assert_eq!(delta, 500);
        lock.apply_amendment(Some(1_500), Some(172_800));
        assert_eq!(lock.amount, 1_500);
        assert_eq!(lock.tge_date, 172_800);
    }

    #[test]
    fn amendment_equal_amount_has_zero_delta() {
        let lock = cliff_lock(1_000, 86_400);
        assert_eq!(lock.validate_amendment(Some(1_000), None).unwrap(), 0);
    }

    #[test]
    fn amendment_rejects_decrease_and_shortening() {
        let lock = cliff_lock(1_000, 86_400);
        assert_eq!(
            lock.validate_amendment(Some(999), None),
            Err(LockerError::InvalidAmendment.into())
        );
        assert_eq!(
            lock.validate_amendment(None, Some(86_399)),
            Err(LockerError::InvalidAmendment.into())
        );
        // A decrease smuggled next to a valid extension must not pass either.
        assert_eq!(
            lock.validate_amendment(Some(1), Some(172_800)),
            Err(LockerError::InvalidAmendment.into())
        );
    }

    #[test]
    fn amendment_requires_at_least_one_field() {
        let lock = cliff_lock(1_000, 86_400);
        assert_eq!(
            lock.validate_amendment(None, None),
            Err(LockerError::InvalidAmendment.into())
        );
    }

    #[test]
    fn fully_released_lock_accepts_top_up() {
        let mut lock = cliff_lock(1_000, 86_400);
        lock.record_withdrawal(1_000).unwrap();
        assert_eq!(lock.locked_balance(), 0);

        let delta = lock.validate_amendment(Some(1_400), None).unwrap();
        assert_eq!(delta, 400);
        lock.apply_amendment(Some(1_400), None);
        assert_eq!(lock.locked_balance(), 400);
    }
}
