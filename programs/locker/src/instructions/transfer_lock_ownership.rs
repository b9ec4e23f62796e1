use anchor_lang::prelude::*;

use crate::error::LockerError;
use crate::state::{Lock, OwnerIndex, LOCK_SEED, OWNER_INDEX_SEED};

/// Hand a lock to a new owner, re-homing its id between the per-owner
/// indices. The token aggregate is untouched: the lock itself does not move.
pub fn transfer_lock_ownership(
    ctx: Context<TransferLockOwnership>,
    _lock_id: u64,
    new_owner: Pubkey,
) -> Result<()> {
    let lock = &mut ctx.accounts.lock;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        lock.owner,
        LockerError::Unauthorized
    );
    require!(new_owner != Pubkey::default(), LockerError::InvalidNewOwner);
    require!(new_owner != lock.owner, LockerError::InvalidNewOwner);

    ctx.accounts.old_owner_index.remove(lock.id)?;

    let new_owner_index = &mut ctx.accounts.new_owner_index;
    if new_owner_index.owner == Pubkey::default() {
        new_owner_index.owner = new_owner;
        new_owner_index.is_lp_token = lock.is_lp_token;
        new_owner_index.bump = ctx.bumps.new_owner_index;
    }
    new_owner_index.add(lock.id)?;

    let old_owner = lock.owner;
    lock.owner = new_owner;

    emit!(OwnershipTransferred {
        id: lock.id,
        old_owner,
        new_owner,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(lock_id: u64, new_owner: Pubkey)]
pub struct TransferLockOwnership<'info> {
    #[account(
        mut,
        seeds = [LOCK_SEED.as_bytes(), lock_id.to_le_bytes().as_ref()],
        bump = lock.bump
    )]
    pub lock: Box<Account<'info, Lock>>,

    #[account(
        mut,
        seeds = [
            OWNER_INDEX_SEED.as_bytes(),
            lock.owner.as_ref(),
            &[lock.is_lp_token as u8]
        ],
        bump = old_owner_index.bump
    )]
    pub old_owner_index: Box<Account<'info, OwnerIndex>>,

    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + OwnerIndex::SIZE,
        seeds = [
            OWNER_INDEX_SEED.as_bytes(),
            new_owner.as_ref(),
            &[lock.is_lp_token as u8]
        ],
        bump
    )]
    pub new_owner_index: Box<Account<'info, OwnerIndex>>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct OwnershipTransferred {
    pub id: u64,
    pub old_owner: Pubkey,
    pub new_owner: Pubkey,
}
