use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::LockerError;
use crate::state::{Lock, LOCK_SEED, VAULT_SEED};
use crate::utils::schedule;

pub fn unlock(ctx: Context<Unlock>, lock_id: u64) -> Result<()> {
    // Capture AccountInfos before taking mutable borrows.
    let lock_ai = ctx.accounts.lock.to_account_info();

    let lock = &mut ctx.accounts.lock;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        lock.owner,
        LockerError::Unauthorized
    );

    let now = Clock::get()?.unix_timestamp;
    let withdrawable = schedule::withdrawable_amount(lock, now);
    require!(withdrawable > 0, LockerError::NothingToUnlock);

    // Bookkeeping before the token movement: once the transfer is issued the
    // released amount is already accounted for, so it cannot be paid twice.
    lock.record_withdrawal(withdrawable)?;

    let id_bytes = lock_id.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[LOCK_SEED.as_bytes(), id_bytes.as_ref(), &[lock.bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.owner_token_account.to_account_info(),
                authority: lock_ai,
            },
            signer_seeds,
        ),
        withdrawable,
    )?;

    emit!(Unlocked {
        id: lock.id,
        amount: withdrawable,
        unlocked_total: lock.unlocked_amount,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(lock_id: u64)]
pub struct Unlock<'info> {
    #[account(
        mut,
        seeds = [LOCK_SEED.as_bytes(), lock_id.to_le_bytes().as_ref()],
        bump = lock.bump
    )]
    pub lock: Box<Account<'info, Lock>>,

    #[account(
        mut,
        token::mint = lock.token,
        token::authority = lock,
        seeds = [VAULT_SEED.as_bytes(), lock.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = lock.token,
        token::authority = owner,
    )]
    pub owner_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct Unlocked {
    pub id: u64,
    pub amount: u64,
    pub unlocked_total: u64,
}
