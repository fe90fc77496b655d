//! The achievement tracker: long-tick evaluation, unlock bookkeeping, and
//! persistence of unlocked names.

use crate::achievements::data::achievement_list;
use crate::achievements::types::{Achievement, AchievementProperties};
use crate::game::Game;
use crate::game_log::{LogLevel, LogTopic};
use crate::items::ItemRepo;
use crate::save_manager::{SaveData, SaveManager};
use std::io;
use std::path::PathBuf;

/// Late-bound handle to the save manager.
///
/// The tracker exists before the save layer does (the save layer needs the
/// tracker's properties to build a full snapshot), so the manager is
/// constructed on the first new unlock and cached for the session.
struct LazySaveHandle {
    save_path: Option<PathBuf>,
    manager: Option<SaveManager>,
}

impl LazySaveHandle {
    fn new(save_path: Option<PathBuf>) -> Self {
        Self {
            save_path,
            manager: None,
        }
    }

    fn save(&mut self, data: &SaveData) -> io::Result<()> {
        if self.manager.is_none() {
            self.manager = Some(match &self.save_path {
                Some(path) => SaveManager::at_path(path.clone()),
                None => SaveManager::new()?,
            });
        }
        if let Some(manager) = &self.manager {
            manager.save(data)?;
        }
        Ok(())
    }
}

/// Owns the achievement table and evaluates it on every long tick.
pub struct AchievementTracker {
    achievements: Vec<Achievement>,
    unlocked_achievements: Vec<String>,
    save_handle: LazySaveHandle,
}

impl AchievementTracker {
    /// Builds the tracker from the static table. Descriptions are rendered
    /// here, once, from the item registry.
    pub fn new(item_repo: &ItemRepo) -> Self {
        Self {
            achievements: achievement_list(item_repo),
            unlocked_achievements: Vec::new(),
            save_handle: LazySaveHandle::new(None),
        }
    }

    /// Like [`new`](Self::new), but unlock-triggered saves go to an explicit
    /// path instead of the platform config directory.
    pub fn with_save_path(item_repo: &ItemRepo, save_path: PathBuf) -> Self {
        Self {
            achievements: achievement_list(item_repo),
            unlocked_achievements: Vec::new(),
            save_handle: LazySaveHandle::new(Some(save_path)),
        }
    }

    /// The full achievement table, for UI listings.
    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn is_unlocked(&self, name: &str) -> bool {
        self.achievements
            .iter()
            .any(|achievement| achievement.name == name && achievement.unlocked)
    }

    pub fn unlocked_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.unlocked).count()
    }

    /// Long-tick handler: evaluates every locked achievement and unlocks
    /// all whose predicates now hold, in declaration order, before
    /// returning. Cadence is controlled by the main loop, not here.
    pub fn on_long_tick(&mut self, game: &mut Game) -> io::Result<()> {
        let mut due = Vec::new();
        for (index, achievement) in self.achievements.iter().enumerate() {
            if !achievement.unlocked && (achievement.check)(game) {
                due.push(index);
            }
        }
        for index in due {
            self.unlock_achievement(index, game, true)?;
        }
        Ok(())
    }

    /// Applies an unlock. With `is_new` the unlock is recorded, announced
    /// on the story log, and the whole game is saved immediately so the
    /// unlock survives a crash before the next autosave. The effect runs
    /// and the flag is set on both the live and the replay path.
    fn unlock_achievement(&mut self, index: usize, game: &mut Game, is_new: bool) -> io::Result<()> {
        if is_new {
            let (name, description) = {
                let achievement = &self.achievements[index];
                (achievement.name, achievement.description.clone())
            };
            self.unlocked_achievements.push(name.to_string());
            game.log
                .add_log_message(description, LogLevel::Standard, LogTopic::Story);
            let snapshot = game.snapshot(self.get_properties());
            self.save_handle.save(&snapshot)?;
        }
        let effect = self.achievements[index].effect;
        effect(game);
        self.achievements[index].unlocked = true;
        Ok(())
    }

    /// Persistable snapshot: unlocked names in unlock order.
    pub fn get_properties(&self) -> AchievementProperties {
        AchievementProperties {
            unlocked_achievements: Some(self.unlocked_achievements.clone()),
        }
    }

    /// Restores unlock state from a persisted snapshot. Effects are
    /// replayed (they are idempotent by contract) and flags set, but
    /// nothing is logged and no save is triggered. Names that match no
    /// known achievement are ignored.
    pub fn set_properties(
        &mut self,
        properties: AchievementProperties,
        game: &mut Game,
    ) -> io::Result<()> {
        self.unlocked_achievements = properties.unlocked_achievements.unwrap_or_default();
        let mut replay = Vec::new();
        for (index, achievement) in self.achievements.iter().enumerate() {
            if self
                .unlocked_achievements
                .iter()
                .any(|name| name == achievement.name)
            {
                replay.push(index);
            }
        }
        for index in replay {
            self.unlock_achievement(index, game, false)?;
        }
        Ok(())
    }
}
