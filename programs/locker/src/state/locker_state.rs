use anchor_lang::prelude::*;

use crate::constants::ID_PADDING;
use crate::error::LockerError;

pub const LOCKER_STATE_SEED: &str = "locker_state";

/// Global singleton holding the per-kind lock sequences and distinct-token
/// counters. Normal-token locks take ids at `ID_PADDING + sequence`, LP
/// locks take the bare sequence, so the two kinds never collide.
#[account]
#[derive(Default, Debug)]
pub struct LockerState {
    pub normal_lock_count: u64, // Normal-token locks ever created
    pub lp_lock_count: u64,     // LP-token locks ever created
    pub normal_token_count: u64, // Distinct normal-token mints ever locked
    pub lp_token_count: u64,    // Distinct LP mints ever locked
    pub bump: u8,               // PDA bump
}

impl LockerState {
    pub const SIZE: usize =
        8 + // normal_lock_count
        8 + // lp_lock_count
        8 + // normal_token_count
        8 + // lp_token_count
        1;  // bump

    /// Id the next lock of this kind will be assigned. Used in PDA seed
    /// derivation, so it must stay in sync with `take_next_id`.
    pub fn peek_next_id(&self, is_lp_token: bool) -> u64 {
        if is_lp_token {
            self.lp_lock_count
        } else {
            ID_PADDING.saturating_add(self.normal_lock_count)
        }
    }

    /// Assign and consume the next id of this kind.
    pub fn take_next_id(&mut self, is_lp_token: bool) -> Result<u64> {
        let id = self.peek_next_id(is_lp_token);
        if is_lp_token {
            require!(id < ID_PADDING, LockerError::LockIdSpaceExhausted);
            self.lp_lock_count = self
                .lp_lock_count
                .checked_add(1)
                .ok_or(LockerError::MathOverflow)?;
        } else {
            self.normal_lock_count = self
                .normal_lock_count
                .checked_add(1)
                .ok_or(LockerError::MathOverflow)?;
        }
        Ok(id)
    }

    /// Called when a `(mint, kind)` pair is indexed for the first time.
    pub fn note_new_token(&mut self, is_lp_token: bool) -> Result<()> {
        let counter = if is_lp_token {
            &mut self.lp_token_count
        } else {
            &mut self.normal_token_count
        };
        *counter = counter.checked_add(1).ok_or(LockerError::MathOverflow)?;
        Ok(())
    }

    /// Locks ever created, across both kinds.
    pub fn total_lock_count(&self) -> u64 {
        self.normal_lock_count.saturating_add(self.lp_lock_count)
    }
}
