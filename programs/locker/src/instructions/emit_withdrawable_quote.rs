use anchor_lang::prelude::*;

use crate::state::{Lock, LOCK_SEED};
use crate::utils::schedule;

/// Read-only quote of a lock's release state at the current clock. No
/// mutation; collaborators consume the emitted event.
pub fn emit_withdrawable_quote(ctx: Context<EmitWithdrawableQuote>, _lock_id: u64) -> Result<()> {
    let lock = &ctx.accounts.lock;
    let now = Clock::get()?.unix_timestamp;

    let releasable = schedule::releasable_amount(lock, now);
    let withdrawable = schedule::withdrawable_amount(lock, now);

    emit!(WithdrawableQuote {
        id: lock.id,
        owner: lock.owner,
        releasable,
        unlocked_amount: lock.unlocked_amount,
        withdrawable,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(lock_id: u64)]
pub struct EmitWithdrawableQuote<'info> {
    #[account(
        seeds = [LOCK_SEED.as_bytes(), lock_id.to_le_bytes().as_ref()],
        bump = lock.bump
    )]
    pub lock: Box<Account<'info, Lock>>,
}

#[event]
pub struct WithdrawableQuote {
    pub id: u64,
    pub owner: Pubkey,
    pub releasable: u64,
    pub unlocked_amount: u64,
    pub withdrawable: u64,
    pub timestamp: i64,
}
