//! The game aggregate: every service the achievement tracker reads or
//! mutates, owned in one place.

use crate::achievements::AchievementProperties;
use crate::activity::ActivityService;
use crate::battle::BattleService;
use crate::character::CharacterService;
use crate::game_log::LogService;
use crate::home::HomeService;
use crate::inventory::InventoryService;
use crate::items::ItemRepo;
use crate::main_loop::MainLoopService;
use crate::save_manager::SaveData;
use crate::store::StoreService;

/// Mutable game state shared by all systems. Single-threaded by design:
/// every system runs synchronously inside the tick callback, so no locking
/// is involved anywhere.
#[derive(Debug, Clone)]
pub struct Game {
    pub main_loop: MainLoopService,
    pub character: CharacterService,
    pub inventory: InventoryService,
    pub home: HomeService,
    pub store: StoreService,
    pub battle: BattleService,
    pub activity: ActivityService,
    pub item_repo: ItemRepo,
    pub log: LogService,
}

impl Game {
    pub fn new() -> Self {
        Self {
            main_loop: MainLoopService::new(),
            character: CharacterService::new(),
            inventory: InventoryService::new(),
            home: HomeService::new(),
            store: StoreService::new(),
            battle: BattleService::new(),
            activity: ActivityService::new(),
            item_repo: ItemRepo::new(),
            log: LogService::new(),
        }
    }

    /// Captures a full persistable snapshot. The achievement properties come
    /// from the tracker, which is owned separately from the game state.
    pub fn snapshot(&self, achievements: AchievementProperties) -> SaveData {
        SaveData {
            main_loop: self.main_loop.clone(),
            character: self.character.clone(),
            inventory: self.inventory.clone(),
            home: self.home.clone(),
            store: self.store.clone(),
            battle: self.battle.clone(),
            activity: self.activity.clone(),
            achievements,
        }
    }

    /// Restores service state from a snapshot. Achievement properties are
    /// not applied here; the caller replays them through the tracker so that
    /// unlock effects run against the restored state.
    pub fn restore(&mut self, data: &SaveData) {
        self.main_loop = data.main_loop.clone();
        self.character = data.character.clone();
        self.inventory = data.inventory.clone();
        self.home = data.home.clone();
        self.store = data.store.clone();
        self.battle = data.battle.clone();
        self.activity = data.activity.clone();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_restore_round_trip() {
        let mut game = Game::new();
        game.battle.trouble_kills = 7;
        game.home.buy_land(3);
        game.store.open_store();
        for _ in 0..25 {
            game.main_loop.tick();
        }

        let data = game.snapshot(AchievementProperties::default());

        let mut restored = Game::new();
        restored.restore(&data);
        assert_eq!(restored.battle.trouble_kills, 7);
        assert_eq!(restored.home.land, 3);
        assert!(restored.store.store_opened);
        assert_eq!(restored.main_loop.total_ticks, 25);
    }
}
