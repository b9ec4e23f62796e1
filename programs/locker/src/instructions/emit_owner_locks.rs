use anchor_lang::prelude::*;

use crate::state::{OwnerIndex, OWNER_INDEX_SEED};

/// Read-only enumeration of every lock id an owner holds for one kind.
pub fn emit_owner_locks(
    ctx: Context<EmitOwnerLocks>,
    owner: Pubkey,
    is_lp_token: bool,
) -> Result<()> {
    let index = &ctx.accounts.owner_index;

    emit!(OwnerLockList {
        owner,
        is_lp_token,
        lock_ids: index.lock_ids.clone(),
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(owner: Pubkey, is_lp_token: bool)]
pub struct EmitOwnerLocks<'info> {
    #[account(
        seeds = [
            OWNER_INDEX_SEED.as_bytes(),
            owner.as_ref(),
            &[is_lp_token as u8]
        ],
        bump = owner_index.bump
    )]
    pub owner_index: Box<Account<'info, OwnerIndex>>,
}

#[event]
pub struct OwnerLockList {
    pub owner: Pubkey,
    pub is_lp_token: bool,
    pub lock_ids: Vec<u64>,
}
