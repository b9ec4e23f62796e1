use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::LockerError;
use crate::state::{Lock, TokenStats, LOCK_SEED, TOKEN_STATS_SEED, VAULT_SEED};

/// Amend a lock: top up the amount and/or push the unlock/TGE date later.
/// Validation is completed before any effect; a positive amount delta is
/// pulled into the vault before the record and aggregate are committed.
pub fn edit_lock(
    ctx: Context<EditLock>,
    _lock_id: u64,
    new_amount: Option<u64>,
    new_tge_date: Option<i64>,
) -> Result<()> {
    let lock = &ctx.accounts.lock;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        lock.owner,
        LockerError::Unauthorized
    );

    let delta = lock.validate_amendment(new_amount, new_tge_date)?;

    if delta > 0 {
        token::transfer(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.owner_token_account.to_account_info(),
                    to: ctx.accounts.vault.to_account_info(),
                    authority: ctx.accounts.owner.to_account_info(),
                },
            ),
            delta,
        )?;
    }

    let lock = &mut ctx.accounts.lock;
    lock.apply_amendment(new_amount, new_tge_date);
    ctx.accounts.token_stats.record_amendment(delta)?;

    emit!(LockAmended {
        id: lock.id,
        new_amount,
        new_tge_date,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(lock_id: u64)]
pub struct EditLock<'info> {
    #[account(
        mut,
        seeds = [LOCK_SEED.as_bytes(), lock_id.to_le_bytes().as_ref()],
        bump = lock.bump
    )]
    pub lock: Box<Account<'info, Lock>>,

    #[account(
        mut,
        seeds = [
            TOKEN_STATS_SEED.as_bytes(),
            lock.token.as_ref(),
            &[lock.is_lp_token as u8]
        ],
        bump = token_stats.bump
    )]
    pub token_stats: Box<Account<'info, TokenStats>>,

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
pub struct LockAmended {
    pub id: u64,
    pub new_amount: Option<u64>,
    pub new_tge_date: Option<i64>,
}
