//! Per-tick orchestration.
//!
//! The external driver (UI shell, headless simulator) calls [`game_tick`]
//! at a fixed real-time interval. Fast systems run every tick outside this
//! crate; slow systems hang off the long-tick boundary reported here. All
//! achievement unlocks caused by a tick are applied before it returns.

use crate::achievements::AchievementTracker;
use crate::game::Game;
use std::io;

/// Processes one game tick. Returns true when this tick was a long tick
/// (so callers can hook additional slow systems on the same cadence).
pub fn game_tick(game: &mut Game, achievements: &mut AchievementTracker) -> io::Result<bool> {
    let long_tick = game.main_loop.tick();
    if long_tick {
        achievements.on_long_tick(game)?;
    }
    Ok(long_tick)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TICKS_PER_LONG_TICK;
    use std::env;
    use std::fs;

    #[test]
    fn test_achievements_evaluate_only_on_long_ticks() {
        let path = env::temp_dir().join(format!(
            "immortality-tick-test-{}.dat",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);

        let mut game = Game::new();
        let mut tracker = AchievementTracker::with_save_path(&game.item_repo, path.clone());
        game.store.open_store();

        // Short ticks never evaluate the table.
        for _ in 0..TICKS_PER_LONG_TICK - 1 {
            let long_tick = game_tick(&mut game, &mut tracker).unwrap();
            assert!(!long_tick);
            assert!(!tracker.is_unlocked("Bookworm"));
        }

        // The long-tick boundary does.
        let long_tick = game_tick(&mut game, &mut tracker).unwrap();
        assert!(long_tick);
        assert!(tracker.is_unlocked("Bookworm"));

        let _ = fs::remove_file(path);
    }
}
