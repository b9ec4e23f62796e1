use anchor_lang::prelude::*;

/// Custom error codes for the locker program.
#[error_code]
pub enum LockerError {
    #[msg("Amount should be greater than 0")]
    InvalidAmount,

    #[msg("Unlock date should be in the future")]
    DateInPast,

    #[msg("Invalid cycle")]
    InvalidCycle,

    #[msg("Basis points out of range")]
    BpsOutOfRange,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("New owner must be a valid key different from the current owner")]
    InvalidNewOwner,

    #[msg("Description is too long")]
    DescriptionTooLong,

    #[msg("Invalid enumeration page")]
    InvalidPage,

    #[msg("You are not the owner of this lock")]
    Unauthorized,

    #[msg("Nothing to unlock")]
    NothingToUnlock,

    #[msg("Lock amount can only be increased and dates only extended")]
    InvalidAmendment,

    #[msg("Withdrawal would exceed the locked amount")]
    Overdraw,

    #[msg("Lock id missing from an index it should belong to")]
    IndexOutOfSync,

    #[msg("Token lock index is full")]
    TokenIndexFull,

    #[msg("Owner lock index is full")]
    OwnerIndexFull,

    #[msg("Lock id space exhausted")]
    LockIdSpaceExhausted,

    #[msg("Math overflow")]
    MathOverflow,
}
