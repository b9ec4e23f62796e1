//! Release-schedule math.
//!
//! - Cliff locks (`cycle_seconds == 0`) release their full amount at
//!   `tge_date`.
//! - Vesting locks release `tge_bps` at `tge_date`, then `cycle_bps` per
//!   fully elapsed cycle, capped at 100%.
//! - All bps arithmetic is floor-rounded through a `u128` intermediate, so
//!   `amount * bps` cannot overflow for any `u64` amount.

use crate::constants::BPS_DENOM;
use crate::state::Lock;

/// floor(amount * bps / 10_000). `bps` must already be capped at
/// `BPS_DENOM`, which keeps the result within `u64`.
pub fn mul_div_bps(amount: u64, bps: u64) -> u64 {
    debug_assert!(bps <= BPS_DENOM);
    ((amount as u128 * bps as u128) / BPS_DENOM as u128) as u64
}

/// Cumulative amount the schedule has released at `now`, ignoring
/// withdrawals.
pub fn releasable_amount(lock: &Lock, now: i64) -> u64 {
    if now < lock.tge_date {
        return 0;
    }
    if lock.is_cliff() {
        return lock.amount;
    }
    // now >= tge_date, so the difference is non-negative; widen before
    // subtracting so extreme timestamps cannot wrap.
    let elapsed = (now as i128 - lock.tge_date as i128) as u128;
    let cycles = elapsed / lock.cycle_seconds as u128;
    let total_bps = (lock.tge_bps as u128)
        .saturating_add(cycles.saturating_mul(lock.cycle_bps as u128))
        .min(BPS_DENOM as u128);
    mul_div_bps(lock.amount, total_bps as u64)
}

/// Amount claimable at `now`: released-to-date minus already withdrawn,
/// never exceeding what is still custodied. An amendment that extends
/// `tge_date` can push releasable below `unlocked_amount`; the claimable
/// amount then floors at zero.
pub fn withdrawable_amount(lock: &Lock, now: i64) -> u64 {
    releasable_amount(lock, now)
        .saturating_sub(lock.unlocked_amount)
        .min(lock.locked_balance())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::prelude::Pubkey;

    const DAY: i64 = 86_400;
    const T: i64 = 1_700_000_000;

    fn cliff(amount: u64, tge_date: i64) -> Lock {
        vesting(amount, tge_date, 0, 0, 0)
    }

    fn vesting(amount: u64, tge_date: i64, tge_bps: u16, cycle_seconds: u64, cycle_bps: u16) -> Lock {
        Lock {
            id: 0,
            owner: Pubkey::new_unique(),
            token: Pubkey::new_unique(),
            is_lp_token: false,
            amount,
            lock_date: T,
            tge_date,
            tge_bps,
            cycle_seconds,
            cycle_bps,
            unlocked_amount: 0,
            bump: 255,
            description: String::new(),
        }
    }

    #[test]
    fn cliff_releases_everything_at_unlock_date() {
        let lock = cliff(1_000, T + DAY);
        assert_eq!(withdrawable_amount(&lock, T), 0);
        assert_eq!(withdrawable_amount(&lock, T + DAY - 1), 0);
        assert_eq!(withdrawable_amount(&lock, T + DAY), 1_000);
        assert_eq!(withdrawable_amount(&lock, T + DAY + 1), 1_000);
    }

    #[test]
    fn cliff_withdrawable_drops_to_zero_after_claim() {
        let mut lock = cliff(1_000, T + DAY);
        lock.record_withdrawal(1_000).unwrap();
        assert_eq!(withdrawable_amount(&lock, T + DAY + 1), 0);
    }

    #[test]
    fn vesting_releases_tge_portion_then_per_cycle() {
        let lock = vesting(1_000, T + DAY, 2_000, DAY as u64, 1_000);
        // Before TGE nothing is released.
        assert_eq!(releasable_amount(&lock, T), 0);
        // Just past TGE only the TGE portion is out.
        assert_eq!(releasable_amount(&lock, T + DAY + 1), 200);
        // One full cycle later, one cycle portion more.
        assert_eq!(releasable_amount(&lock, T + 2 * DAY + 1), 300);
        // Eight full cycles take 2_000 + 8 * 1_000 bps to the cap.
        assert_eq!(releasable_amount(&lock, T + 9 * DAY), 1_000);
        // Far beyond the cap nothing further accrues.
        assert_eq!(releasable_amount(&lock, T + 1_000 * DAY), 1_000);
    }

    #[test]
    fn partial_withdrawals_reduce_claimable_not_released() {
        let mut lock = vesting(1_000, T + DAY, 2_000, DAY as u64, 1_000);
        let now = T + DAY + 1;
        assert_eq!(withdrawable_amount(&lock, now), 200);

        lock.record_withdrawal(200).unwrap();
        assert_eq!(withdrawable_amount(&lock, now), 0);
        assert_eq!(releasable_amount(&lock, now), 200);

        // Next cycle frees exactly one more cycle portion.
        assert_eq!(withdrawable_amount(&lock, T + 2 * DAY + 1), 100);
    }

    #[test]
    fn withdrawable_plus_unlocked_equals_releasable() {
        let mut lock = vesting(999, T, 1_500, 3_600, 700);
        for step in 0..30 {
            let now = T + step * 1_800;
            let withdrawable = withdrawable_amount(&lock, now);
            assert_eq!(
                withdrawable + lock.unlocked_amount,
                releasable_amount(&lock, now)
            );
            lock.record_withdrawal(withdrawable).unwrap();
        }
    }

    #[test]
    fn withdrawable_is_monotonic_absent_withdrawals() {
        let lock = vesting(123_457, T + DAY, 900, 7_200, 33);
        let mut previous = 0;
        for step in 0..500 {
            let current = withdrawable_amount(&lock, T + step * 3_600);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn rounding_is_truncation() {
        // 10% of 1_001 is 100.1; the fraction is dropped, never rounded.
        assert_eq!(mul_div_bps(1_001, 1_000), 100);
        assert_eq!(mul_div_bps(999, 10_000), 999);
        assert_eq!(mul_div_bps(1, 9_999), 0);

        let lock = vesting(1_001, T, 1_000, DAY as u64, 1_000);
        assert_eq!(releasable_amount(&lock, T), 100);
    }

    #[test]
    fn wide_amounts_do_not_overflow() {
        assert_eq!(mul_div_bps(u64::MAX, 10_000), u64::MAX);
        assert_eq!(mul_div_bps(u64::MAX, 5_000), u64::MAX / 2);

        let lock = vesting(u64::MAX, T, 2_500, 1, 2_500);
        assert_eq!(releasable_amount(&lock, T), u64::MAX / 4);
        assert_eq!(releasable_amount(&lock, T + 100), u64::MAX);
    }

    #[test]
    fn total_bps_caps_at_denominator() {
        // tge_bps + cycle_bps may exceed 100% together; the cap applies at
        // read time, not at creation.
        let lock = vesting(1_000, T, 8_000, DAY as u64, 8_000);
        assert_eq!(releasable_amount(&lock, T), 800);
        assert_eq!(releasable_amount(&lock, T + DAY), 1_000);
    }

    #[test]
    fn cycle_count_uses_fully_elapsed_cycles_only() {
        let lock = vesting(10_000, T, 0, 100, 1);
        assert_eq!(releasable_amount(&lock, T + 99), 0);
        assert_eq!(releasable_amount(&lock, T + 100), 1);
        assert_eq!(releasable_amount(&lock, T + 199), 1);
        assert_eq!(releasable_amount(&lock, T + 200), 2);
    }

    #[test]
    fn extension_past_now_floors_claimable_at_zero() {
        // A lock that already paid out its TGE portion, then had its TGE
        // date extended beyond `now`: releasable recomputes to zero while
        // unlocked_amount stays, so nothing further is claimable.
        let mut lock = vesting(1_000, T, 2_000, DAY as u64, 1_000);
        lock.record_withdrawal(200).unwrap();
        lock.apply_amendment(None, Some(T + 30 * DAY));
        assert_eq!(releasable_amount(&lock, T + DAY), 0);
        assert_eq!(withdrawable_amount(&lock, T + DAY), 0);
    }
}
