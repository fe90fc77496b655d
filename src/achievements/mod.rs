//! Achievement system module.
//!
//! A fixed table of predicate/effect pairs evaluated on every long tick.
//! Each achievement unlocks at most once per session; only the list of
//! unlocked names is persisted, and effects are replayed on load.

pub mod data;
pub mod tracker;
pub mod types;

pub use data::achievement_list;
pub use tracker::AchievementTracker;
pub use types::{Achievement, AchievementProperties};
