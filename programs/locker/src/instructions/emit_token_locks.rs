use anchor_lang::prelude::*;

use crate::constants::MAX_QUOTE_PAGE;
use crate::error::LockerError;
use crate::state::{TokenStats, TOKEN_STATS_SEED};

/// Read-only paginated enumeration of a token's lock ids, bounding the
/// response for heavily-used tokens.
pub fn emit_token_locks(
    ctx: Context<EmitTokenLocks>,
    token: Pubkey,
    is_lp_token: bool,
    offset: u64,
    limit: u64,
) -> Result<()> {
    require!(limit > 0 && limit <= MAX_QUOTE_PAGE, LockerError::InvalidPage);

    let stats = &ctx.accounts.token_stats;

    emit!(TokenLockPage {
        token,
        is_lp_token,
        total_locked: stats.total_locked,
        lock_count: stats.lock_count,
        offset,
        lock_ids: stats.page(offset, limit).to_vec(),
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(token: Pubkey, is_lp_token: bool)]
pub struct EmitTokenLocks<'info> {
    #[account(
        seeds = [
            TOKEN_STATS_SEED.as_bytes(),
            token.as_ref(),
            &[is_lp_token as u8]
        ],
        bump = token_stats.bump
    )]
    pub token_stats: Box<Account<'info, TokenStats>>,
}

#[event]
pub struct TokenLockPage {
    pub token: Pubkey,
    pub is_lp_token: bool,
    pub total_locked: u64,
    pub lock_count: u64,
    pub offset: u64,
    pub lock_ids: Vec<u64>,
}
