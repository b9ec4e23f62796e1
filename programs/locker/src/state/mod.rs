pub mod lock;
pub mod locker_state;
pub mod owner_index;
pub mod token_stats;

pub use lock::*;
pub use locker_state::*;
pub use owner_index::*;
pub use token_stats::*;
