use anchor_lang::prelude::*;

use crate::constants::MAX_LOCKS_PER_OWNER;
use crate::error::LockerError;

pub const OWNER_INDEX_SEED: &str = "owner_index";

/// Per-`(owner, kind)` membership list. Owners accumulate few locks relative
/// to token popularity, so the list is read whole rather than paginated.
#[account]
#[derive(Default, Debug)]
pub struct OwnerIndex {
    pub owner: Pubkey,      // Identity these locks belong to
    pub is_lp_token: bool,  // Kind of the listed locks
    pub bump: u8,           // PDA bump
    pub lock_ids: Vec<u64>, // Lock ids currently owned
}

impl OwnerIndex {
    pub const SIZE: usize =
        32 + // owner
        1 +  // is_lp_token
        1 +  // bump
        4 + 8 * MAX_LOCKS_PER_OWNER; // lock_ids

    pub fn add(&mut self, id: u64) -> Result<()> {
        require!(
            self.lock_ids.len() < MAX_LOCKS_PER_OWNER,
            LockerError::OwnerIndexFull
        );
        self.lock_ids.push(id);
        Ok(())
    }

    /// Remove `id`, preserving the order of the remaining entries. Every
    /// owned lock is indexed at creation or transfer, so a miss means the
    /// indices diverged from the ledger.
    pub fn remove(&mut self, id: u64) -> Result<()> {
        let position = self
            .lock_ids
            .iter()
            .position(|&listed| listed == id)
            .ok_or(LockerError::IndexOutOfSync)?;
        self.lock_ids.remove(position);
        Ok(())
    }
}
