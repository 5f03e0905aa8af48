pub mod adjust_fee;
pub mod auto_adjust_fee;
pub mod batch_orders;
pub mod batch_process;
pub mod borrow;
pub mod cast_vote;
pub mod claim_rewards;
pub mod init_governance;
pub mod initialize;
pub mod record_liquidity_deposit;
pub mod record_trade;
pub mod register_lp;
pub mod register_user;
pub mod reward_strategy_boost;
pub mod stake_with_lockup;
pub mod update_dynamic_reward;
pub mod update_fee_by_vote;
pub mod update_leaderboard;

pub use adjust_fee::*;
pub use auto_adjust_fee::*;
pub use batch_orders::*;
pub use batch_process::*;
pub use borrow::*;
pub use cast_vote::*;
pub use claim_rewards::*;
pub use init_governance::*;
pub use initialize::*;
pub use record_liquidity_deposit::*;
pub use record_trade::*;
pub use register_lp::*;
pub use register_user::*;
pub use reward_strategy_boost::*;
pub use stake_with_lockup::*;
pub use update_dynamic_reward::*;
pub use update_fee_by_vote::*;
pub use update_leaderboard::*;
