use anchor_lang::prelude::*;

use crate::state::{LockerState, LOCKER_STATE_SEED};

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let state = &mut ctx.accounts.locker_state;
    state.normal_lock_count = 0;
    state.lp_lock_count = 0;
    state.normal_token_count = 0;
    state.lp_token_count = 0;
    state.bump = ctx.bumps.locker_state;

    emit!(LockerInitialized {
        locker_state: state.key(),
        payer: ctx.accounts.payer.key(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = payer,
        space = 8 + LockerState::SIZE,
        seeds = [LOCKER_STATE_SEED.as_bytes()],
        bump
    )]
    pub locker_state: Account<'info, LockerState>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct LockerInitialized {
    pub locker_state: Pubkey,
    pub payer: Pubkey,
}
