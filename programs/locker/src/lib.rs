pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;
use instructions::*;

declare_id!("F6Mkwqmw8kptGNyA1JSxY1uJDDriZoEdnaKPVr6455FA");

/// Token lock and vesting ledger: custodies fungible-token deposits and
/// releases them either at a single unlock date (cliff) or on a periodic
/// basis-point schedule anchored at a TGE date (vesting).
#[program]
pub mod locker {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    /// Create a cliff lock releasing everything at `unlock_date`.
    pub fn lock(
        ctx: Context<CreateLock>,
        owner: Pubkey,
        is_lp_token: bool,
        amount: u64,
        unlock_date: i64,
        description: String,
    ) -> Result<()> {
        instructions::create_lock(
            ctx,
            owner,
            is_lp_token,
            amount,
            unlock_date,
            0,
            0,
            0,
            description,
            false,
        )
    }

    /// Create a vesting lock releasing `tge_bps` at `tge_date`, then
    /// `cycle_bps` per elapsed cycle of `cycle_seconds`.
    pub fn vesting_lock(
        ctx: Context<CreateLock>,
        owner: Pubkey,
        is_lp_token: bool,
        amount: u64,
        tge_date: i64,
        tge_bps: u16,
        cycle_seconds: u64,
        cycle_bps: u16,
        description: String,
    ) -> Result<()> {
        instructions::create_lock(
            ctx,
            owner,
            is_lp_token,
            amount,
            tge_date,
            tge_bps,
            cycle_seconds,
            cycle_bps,
            description,
            true,
        )
    }

    /// Withdraw everything the schedule has released so far.
    pub fn unlock(ctx: Context<Unlock>, lock_id: u64) -> Result<()> {
        instructions::unlock(ctx, lock_id)
    }

    /// Top up a lock's amount and/or extend its unlock/TGE date.
    pub fn edit_lock(
        ctx: Context<EditLock>,
        lock_id: u64,
        new_amount: Option<u64>,
        new_tge_date: Option<i64>,
    ) -> Result<()> {
        instructions::edit_lock(ctx, lock_id, new_amount, new_tge_date)
    }

    pub fn edit_lock_description(
        ctx: Context<EditLockDescription>,
        lock_id: u64,
        description: String,
    ) -> Result<()> {
        instructions::edit_lock_description(ctx, lock_id, description)
    }

    pub fn transfer_lock_ownership(
        ctx: Context<TransferLockOwnership>,
        lock_id: u64,
        new_owner: Pubkey,
    ) -> Result<()> {
        instructions::transfer_lock_ownership(ctx, lock_id, new_owner)
    }

    /// Emit a read-only releasable/withdrawable quote for one lock.
    pub fn emit_withdrawable_quote(
        ctx: Context<EmitWithdrawableQuote>,
        lock_id: u64,
    ) -> Result<()> {
        instructions::emit_withdrawable_quote(ctx, lock_id)
    }

    /// Emit one page of a token's lock ids with its aggregates.
    pub fn emit_token_locks(
        ctx: Context<EmitTokenLocks>,
        token: Pubkey,
        is_lp_token: bool,
        offset: u64,
        limit: u64,
    ) -> Result<()> {
        instructions::emit_token_locks(ctx, token, is_lp_token, offset, limit)
    }

    /// Emit the full lock id list one owner holds for one kind.
    pub fn emit_owner_locks(
        ctx: Context<EmitOwnerLocks>,
        owner: Pubkey,
        is_lp_token: bool,
    ) -> Result<()> {
        instructions::emit_owner_locks(ctx, owner, is_lp_token)
    }
}
