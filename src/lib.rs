//! Immortality — idle cultivation game core.
//!
//! Game state services, the long-tick achievement tracker, and checksummed
//! save/load. Rendering and the interactive loop live in the embedding
//! application; this crate exposes the logic they drive.

pub mod achievements;
pub mod activity;
pub mod battle;
pub mod character;
pub mod constants;
pub mod game;
pub mod game_log;
pub mod home;
pub mod inventory;
pub mod items;
pub mod main_loop;
pub mod save_manager;
pub mod store;
pub mod tick;

pub use achievements::{Achievement, AchievementProperties, AchievementTracker};
pub use constants::{TICKS_PER_LONG_TICK, TICK_INTERVAL_MS};
pub use game::Game;
pub use save_manager::{SaveData, SaveManager};
pub use tick::game_tick;
