use anchor_lang::prelude::*;

use crate::constants::MAX_LOCKS_PER_TOKEN;
use crate::error::LockerError;

pub const TOKEN_STATS_SEED: &str = "token_stats";

/// Per-`(mint, kind)` aggregate: cumulative locked amount, lock count and
/// the insertion-ordered id list backing paginated enumeration. A popular
/// token accumulates locks from many owners, so reads go through `page`.
#[account]
#[derive(Default, Debug)]
pub struct TokenStats {
    pub token: Pubkey,       // Mint this aggregate tracks
    pub is_lp_token: bool,   // Kind of the tracked locks
    pub total_locked: u64,   // Cumulative deposits across all locks
    pub lock_count: u64,     // Locks ever created for this (mint, kind)
    pub bump: u8,            // PDA bump
    pub lock_ids: Vec<u64>,  // Insertion-ordered lock ids
}

impl TokenStats {
    pub const SIZE: usize =
        32 + // token
        1 +  // is_lp_token
        8 +  // total_locked
        8 +  // lock_count
        1 +  // bump
        4 + 8 * MAX_LOCKS_PER_TOKEN; // lock_ids

    /// Register a freshly created lock.
    pub fn register_lock(&mut self, id: u64, amount: u64) -> Result<()> {
        require!(
            self.lock_ids.len() < MAX_LOCKS_PER_TOKEN,
            LockerError::TokenIndexFull
        );
        self.lock_ids.push(id);
        self.lock_count = self
            .lock_count
            .checked_add(1)
            .ok_or(LockerError::MathOverflow)?;
        self.total_locked = self
            .total_locked
            .checked_add(amount)
            .ok_or(LockerError::MathOverflow)?;
        Ok(())
    }

    /// Fold an amendment's amount delta into the aggregate. Membership and
    /// lock count are unchanged: the id is already listed.
    pub fn record_amendment(&mut self, delta: u64) -> Result<()> {
        self.total_locked = self
            .total_locked
            .checked_add(delta)
            .ok_or(LockerError::MathOverflow)?;
        Ok(())
    }

    /// Stable insertion-order page of lock ids. An offset past the end
    /// yields an empty page; the tail page is short.
    pub fn page(&self, offset: u64, limit: u64) -> &[u64] {
        let start = (offset as usize).min(self.lock_ids.len());
        let end = start
            .saturating_add(limit as usize)
            .min(self.lock_ids.len());
        &self.lock_ids[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_with_ids(ids: &[u64]) -> TokenStats {
        let mut stats = TokenStats {
            token: Pubkey::new_unique(),
            ..TokenStats::default()
        };
        for &id in ids {
            stats.register_lock(id, 100).unwrap();
        }
        stats
    }

    #[test]
    fn registration_updates_aggregates() {
        let mut stats = TokenStats::default();
        stats.register_lock(7, 1_000).unwrap();
        stats.register_lock(9, 250).unwrap();
        assert_eq!(stats.total_locked, 1_250);
        assert_eq!(stats.lock_count, 2);
        assert_eq!(stats.lock_ids, vec![7, 9]);
    }

    #[test]
    fn amendment_delta_folds_into_total() {
        let mut stats = stats_with_ids(&[1]);
        stats.record_amendment(500).unwrap();
        assert_eq!(stats.total_locked, 600);
        assert_eq!(stats.lock_count, 1);
        assert_eq!(stats.lock_ids.len(), 1);
    }

    #[test]
    fn pagination_is_stable_and_bounded() {
        let stats = stats_with_ids(&[10, 11, 12, 13, 14]);
        assert_eq!(stats.page(0, 2), &[10, 11]);
        assert_eq!(stats.page(2, 2), &[12, 13]);
        // Short tail page.
        assert_eq!(stats.page(4, 2), &[14]);
        // Offset past the end yields an empty page.
        assert!(stats.page(5, 2).is_empty());
        assert!(stats.page(100, 10).is_empty());
    }

    #[test]
    fn capacity_is_enforced() {
        let mut stats = TokenStats::default();
        for id in 0..MAX_LOCKS_PER_TOKEN as u64 {
            stats.register_lock(id, 1).unwrap();
        }
        assert_eq!(
            stats.register_lock(u64::MAX, 1),
            Err(LockerError::TokenIndexFull.into())
        );
        assert_eq!(stats.lock_count, MAX_LOCKS_PER_TOKEN as u64);
    }
}
