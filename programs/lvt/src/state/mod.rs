pub mod global;
pub mod governance;
pub mod leaderboard;
pub mod loan;
pub mod lp_state;
pub mod rewards;
pub mod trade_record;
pub mod user_state;

pub use global::*;
pub use governance::*;
pub use leaderboard::*;
pub use loan::*;
pub use lp_state::*;
pub use trade_record::*;
pub use user_state::*;
