pub mod initialize;
pub mod create_lock;
pub mod unlock;
pub mod edit_lock;
pub mod edit_lock_description;
pub mod transfer_lock_ownership;
pub mod emit_withdrawable_quote;
pub mod emit_token_locks;
pub mod emit_owner_locks;

pub use initialize::*;
pub use create_lock::*;
pub use unlock::*;
pub use edit_lock::*;
pub use edit_lock_description::*;
pub use transfer_lock_ownership::*;
pub use emit_withdrawable_quote::*;
pub use emit_token_locks::*;
pub use emit_owner_locks::*;
