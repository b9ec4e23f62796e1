use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{BPS_DENOM, MAX_DESCRIPTION_LEN};
use crate::error::LockerError;
use crate::state::{
    Lock, LockerState, OwnerIndex, TokenStats, LOCKER_STATE_SEED, LOCK_SEED, OWNER_INDEX_SEED,
    TOKEN_STATS_SEED, VAULT_SEED,
};

/// Shared handler behind the `lock` and `vesting_lock` entrypoints. A cliff
/// lock is the `cycle_seconds == 0` degenerate case with no bps schedule.
pub fn create_lock(
    ctx: Context<CreateLock>,
    owner: Pubkey,
    is_lp_token: bool,
    amount: u64,
    tge_date: i64,
    tge_bps: u16,
    cycle_seconds: u64,
    cycle_bps: u16,
    description: String,
    vesting: bool,
) -> Result<()> {
    require!(owner != Pubkey::default(), LockerError::InvalidPubkey);
    require!(amount > 0, LockerError::InvalidAmount);
    require!(
        description.len() <= MAX_DESCRIPTION_LEN,
        LockerError::DescriptionTooLong
    );

    let now = Clock::get()?.unix_timestamp;
    require!(tge_date > now, LockerError::DateInPast);

    if vesting {
        require!(cycle_seconds > 0, LockerError::InvalidCycle);
        require!(
            tge_bps as u64 <= BPS_DENOM && cycle_bps as u64 <= BPS_DENOM,
            LockerError::BpsOutOfRange
        );
    } else {
        require!(cycle_seconds == 0, LockerError::InvalidCycle);
        require!(tge_bps == 0 && cycle_bps == 0, LockerError::BpsOutOfRange);
    }

    // The deposit must reach custody before the record is written.
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.funder_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.funder.to_account_info(),
            },
        ),
        amount,
    )?;

    let locker_state = &mut ctx.accounts.locker_state;
    let id = locker_state.take_next_id(is_lp_token)?;

    let lock = &mut ctx.accounts.lock;
    lock.id = id;
    lock.owner = owner;
    lock.token = ctx.accounts.mint.key();
    lock.is_lp_token = is_lp_token;
    lock.amount = amount;
    lock.lock_date = now;
    lock.tge_date = tge_date;
    lock.tge_bps = tge_bps;
    lock.cycle_seconds = cycle_seconds;
    lock.cycle_bps = cycle_bps;
    lock.unlocked_amount = 0;
    lock.bump = ctx.bumps.lock;
    lock.description = description;

    // First touch of a (mint, kind) pair creates its aggregate.
    let token_stats = &mut ctx.accounts.token_stats;
    if token_stats.token == Pubkey::default() {
        token_stats.token = ctx.accounts.mint.key();
        token_stats.is_lp_token = is_lp_token;
        token_stats.bump = ctx.bumps.token_stats;
        locker_state.note_new_token(is_lp_token)?;
    }
    token_stats.register_lock(id, amount)?;

    let owner_index = &mut ctx.accounts.owner_index;
    if owner_index.owner == Pubkey::default() {
        owner_index.owner = owner;
        owner_index.is_lp_token = is_lp_token;
        owner_index.bump = ctx.bumps.owner_index;
    }
    owner_index.add(id)?;

    emit!(LockCreated {
        id,
        owner,
        token: lock.token,
        is_lp_token,
        amount,
        lock_date: now,
        tge_date,
        tge_bps,
        cycle_seconds,
        cycle_bps,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(owner: Pubkey, is_lp_token: bool)]
pub struct CreateLock<'info> {
    #[account(
        mut,
        seeds = [LOCKER_STATE_SEED.as_bytes()],
        bump = locker_state.bump
    )]
    pub locker_state: Account<'info, LockerState>,

    #[account(
        init,
        payer = funder,
        space = 8 + Lock::SIZE,
        seeds = [
            LOCK_SEED.as_bytes(),
            locker_state.peek_next_id(is_lp_token).to_le_bytes().as_ref()
        ],
        bump
    )]
    pub lock: Box<Account<'info, Lock>>,

    #[account(
        init,
        payer = funder,
        token::mint = mint,
        token::authority = lock,
        seeds = [VAULT_SEED.as_bytes(), lock.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = funder,
        space = 8 + TokenStats::SIZE,
        seeds = [
            TOKEN_STATS_SEED.as_bytes(),
            mint.key().as_ref(),
            &[is_lp_token as u8]
        ],
        bump
    )]
    pub token_stats: Box<Account<'info, TokenStats>>,

    #[account(
        init_if_needed,
        payer = funder,
        space = 8 + OwnerIndex::SIZE,
        seeds = [
            OWNER_INDEX_SEED.as_bytes(),
            owner.as_ref(),
            &[is_lp_token as u8]
        ],
        bump
    )]
    pub owner_index: Box<Account<'info, OwnerIndex>>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = funder,
    )]
    pub funder_token_account: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub funder: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct LockCreated {
    pub id: u64,
    pub owner: Pubkey,
    pub token: Pubkey,
    pub is_lp_token: bool,
    pub amount: u64,
    pub lock_date: i64,
    pub tge_date: i64,
    pub tge_bps: u16,
    pub cycle_seconds: u64,
    pub cycle_bps: u16,
}
