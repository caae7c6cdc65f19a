//! Game-tree analysis and move suggestion
//!
//! [`get_stats`] enumerates every continuation of a position and
//! [`suggest_move`] turns those counts into a recommended move.

pub mod config;
pub mod stats;
pub mod suggest;

pub use config::AdvisorConfig;
pub use stats::{MoveStats, PositionStats, get_stats, move_stats};
pub use suggest::{Advisor, Suggestion, Tier, choose_move, next_suggested_move, suggest_move};
