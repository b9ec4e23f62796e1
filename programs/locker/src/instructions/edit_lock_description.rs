use anchor_lang::prelude::*;

use crate::constants::MAX_DESCRIPTION_LEN;
use crate::error::LockerError;
use crate::state::{Lock, LOCK_SEED};

pub fn edit_lock_description(
    ctx: Context<EditLockDescription>,
    _lock_id: u64,
    description: String,
) -> Result<()> {
    let lock = &mut ctx.accounts.lock;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        lock.owner,
        LockerError::Unauthorized
    );
    require!(
        description.len() <= MAX_DESCRIPTION_LEN,
        LockerError::DescriptionTooLong
    );

    lock.description = description;

    emit!(DescriptionChanged { id: lock.id });

    Ok(())
}

#[derive(Accounts)]
#[instruction(lock_id: u64)]
pub struct EditLockDescription<'info> {
    #[account(
        mut,
        seeds = [LOCK_SEED.as_bytes(), lock_id.to_le_bytes().as_ref()],
        bump = lock.bump
    )]
    pub lock: Box<Account<'info, Lock>>,

    pub owner: Signer<'info>,
}

#[event]
pub struct DescriptionChanged {
    pub id: u64,
}
