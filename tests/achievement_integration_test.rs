//! Integration test: achievement unlock system
//!
//! Tests achievements end to end through the tick driver and the save
//! layer: threshold boundaries, unlock side effects (store manuals, gift
//! flags), story-log and save triggers, replay on restore, and full
//! save/load cycles.

use immortality::achievements::AchievementProperties;
use immortality::items::Item;
use immortality::AchievementTracker;
use immortality::Game;
use immortality::SaveManager;
use std::env;
use std::fs;
use std::path::PathBuf;

fn temp_save_path(name: &str) -> PathBuf {
    let path = env::temp_dir().join(format!(
        "immortality-integration-{}-{}.dat",
        name,
        std::process::id()
    ));
    let _ = fs::remove_file(&path);
    path
}

fn tracker_for(game: &Game, name: &str) -> (AchievementTracker, PathBuf) {
    let path = temp_save_path(name);
    let tracker = AchievementTracker::with_save_path(&game.item_repo, path.clone());
    (tracker, path)
}

// =============================================================================
// Threshold boundaries
// =============================================================================

#[test]
fn test_played_a_bit_unlocks_above_ten_years_of_ticks() {
    let mut game = Game::new();
    let (mut tracker, path) = tracker_for(&game, "played-a-bit");

    // 3650 ticks: exactly ten years, not yet past it.
    game.main_loop.total_ticks = 3650;
    tracker.on_long_tick(&mut game).unwrap();
    assert!(!tracker.is_unlocked("Played a Bit"));
    assert!(!game.store.is_manual_unlocked("fasterPlayManual"));

    // 3651 ticks: unlocks on the next evaluation.
    game.main_loop.total_ticks = 3651;
    tracker.on_long_tick(&mut game).unwrap();
    assert!(tracker.is_unlocked("Played a Bit"));
    assert!(game.store.is_manual_unlocked("fasterPlayManual"));

    let _ = fs::remove_file(path);
}

#[test]
fn test_full_inventory_unlocks_auto_sell() {
    let mut game = Game::new();
    let (mut tracker, path) = tracker_for(&game, "full-inventory");

    // Fill every slot with distinct junk.
    let mut i = 0;
    while game.inventory.open_inventory_slots() > 0 {
        let item = Item::manual(&format!("junk{}", i), "Junk", "", 1);
        assert!(game.inventory.add_item(item, 1));
        i += 1;
    }

    tracker.on_long_tick(&mut game).unwrap();
    assert!(tracker.is_unlocked("This Does Not Spark Joy"));
    assert!(game.store.is_manual_unlocked("autoSellManual"));

    let _ = fs::remove_file(path);
}

#[test]
fn test_moderation_requires_both_counters() {
    let mut game = Game::new();
    let (mut tracker, path) = tracker_for(&game, "moderation");

    game.inventory.lifetime_used_items = 8888;
    game.inventory.lifetime_sold_items = 8887;
    tracker.on_long_tick(&mut game).unwrap();
    assert!(!tracker.is_unlocked("All Things In Moderation"));

    game.inventory.lifetime_sold_items = 8888;
    tracker.on_long_tick(&mut game).unwrap();
    assert!(tracker.is_unlocked("All Things In Moderation"));

    let _ = fs::remove_file(path);
}

#[test]
fn test_equipment_achievements_guard_empty_slots() {
    let mut game = Game::new();
    let (mut tracker, path) = tracker_for(&game, "equipment");

    // One strong weapon in one hand only: condition not met, no panic.
    game.character.character_state.equipment.right_hand =
        Some(Item::weapon("metalSword", "Metal Sword", 200, 1000));
    tracker.on_long_tick(&mut game).unwrap();
    assert!(!tracker.is_unlocked("Weapons Master"));

    game.character.character_state.equipment.left_hand =
        Some(Item::weapon("woodClub", "Wood Club", 131, 1000));
    tracker.on_long_tick(&mut game).unwrap();
    assert!(tracker.is_unlocked("Weapons Master"));
    assert!(game.store.is_manual_unlocked("autoWeaponMergeManual"));

    // Armor needs all four slots.
    let equipment = &mut game.character.character_state.equipment;
    equipment.head = Some(Item::armor("helm", "Helm", 140, 100));
    equipment.body = Some(Item::armor("plate", "Plate", 150, 100));
    equipment.legs = Some(Item::armor("greaves", "Greaves", 160, 100));
    tracker.on_long_tick(&mut game).unwrap();
    assert!(!tracker.is_unlocked("Practically Invincible"));

    game.character.character_state.equipment.feet = Some(Item::armor("boots", "Boots", 131, 100));
    tracker.on_long_tick(&mut game).unwrap();
    assert!(tracker.is_unlocked("Practically Invincible"));

    let _ = fs::remove_file(path);
}

// =============================================================================
// Unlock side effects: log and immediate save
// =============================================================================

#[test]
fn test_unlock_emits_story_log_and_saves_immediately() {
    let mut game = Game::new();
    let (mut tracker, path) = tracker_for(&game, "side-effects");

    game.store.open_store();
    assert!(!path.exists());
    tracker.on_long_tick(&mut game).unwrap();

    let story = game.log.story_entries();
    assert_eq!(story.len(), 1);
    assert_eq!(
        story[0].message,
        "You opened the manuals shop and unlocked the Manual of Expeditious Time Compression"
    );
    assert!(path.exists(), "unlock should save the game immediately");

    // The emergency save already contains the unlock.
    let saved = SaveManager::at_path(path.clone()).load().unwrap();
    assert_eq!(
        saved.achievements.unlocked_achievements,
        Some(vec!["Bookworm".to_string()])
    );

    let _ = fs::remove_file(path);
}

#[test]
fn test_gift_achievements_set_flags_on_their_services() {
    let mut game = Game::new();
    let (mut tracker, path) = tracker_for(&game, "gifts");

    game.character.character_state.total_lives = 9;
    game.activity.odd_job_days = 889;
    game.activity.begging_days = 889;
    game.character.character_state.attributes.spirituality.value = 0.5;
    tracker.on_long_tick(&mut game).unwrap();

    assert!(game.home.grandfather_tent);
    assert!(game.character.father_gift);
    assert!(game.inventory.mother_gift);
    assert!(game.inventory.grandmother_gift);
    assert!(tracker.is_unlocked("Grandpa's Old Tent"));
    assert!(tracker.is_unlocked("Paternal Pride"));
    assert!(tracker.is_unlocked("Maternal Love"));
    assert!(tracker.is_unlocked("Grandma's Stick"));

    let _ = fs::remove_file(path);
}

#[test]
fn test_gemologist_follows_kill_counter_not_gems() {
    // The description talks about gems, but the live trigger has always
    // been the trouble-kill counter. Monster Slayer (131 kills) must stay
    // locked while Gemologist (89 kills) unlocks.
    let mut game = Game::new();
    let (mut tracker, path) = tracker_for(&game, "gemologist");

    game.battle.trouble_kills = 89;
    tracker.on_long_tick(&mut game).unwrap();
    assert!(tracker.is_unlocked("Gemologist"));
    assert!(!tracker.is_unlocked("Monster Slayer"));

    let _ = fs::remove_file(path);
}

// =============================================================================
// Restore / replay path
// =============================================================================

#[test]
fn test_replay_applies_effects_without_log_or_save() {
    let mut game = Game::new();
    let (mut tracker, path) = tracker_for(&game, "replay");

    tracker
        .set_properties(
            AchievementProperties {
                unlocked_achievements: Some(vec!["Guzzler".to_string()]),
            },
            &mut game,
        )
        .unwrap();

    assert!(tracker.is_unlocked("Guzzler"));
    assert!(game.store.is_manual_unlocked("autoPotionManual"));
    assert!(game.log.story_entries().is_empty());
    assert!(!path.exists());
}

#[test]
fn test_replayed_achievement_does_not_unlock_again() {
    let mut game = Game::new();
    let (mut tracker, path) = tracker_for(&game, "no-re-unlock");

    game.store.open_store();
    tracker
        .set_properties(
            AchievementProperties {
                unlocked_achievements: Some(vec!["Bookworm".to_string()]),
            },
            &mut game,
        )
        .unwrap();

    // Predicate still true, but the achievement is already unlocked.
    tracker.on_long_tick(&mut game).unwrap();
    assert_eq!(
        tracker.get_properties().unlocked_achievements,
        Some(vec!["Bookworm".to_string()])
    );
    assert!(game.log.story_entries().is_empty());
    assert!(!path.exists());
}

#[test]
fn test_double_restore_does_not_double_grant() {
    let mut game = Game::new();
    let (mut tracker, _path) = tracker_for(&game, "double-restore");

    let properties = AchievementProperties {
        unlocked_achievements: Some(vec!["Bookworm".to_string(), "Junkie".to_string()]),
    };
    tracker.set_properties(properties.clone(), &mut game).unwrap();
    tracker.set_properties(properties, &mut game).unwrap();

    assert_eq!(game.store.unlocked_manuals().len(), 2);
    assert_eq!(
        tracker.get_properties().unlocked_achievements,
        Some(vec!["Bookworm".to_string(), "Junkie".to_string()])
    );
}

// =============================================================================
// Full save/load cycle
// =============================================================================

#[test]
fn test_save_load_cycle_restores_unlocks_and_state() {
    let save_path = temp_save_path("full-cycle");

    // Session one: earn two achievements during play.
    let mut game = Game::new();
    let mut tracker = AchievementTracker::with_save_path(&game.item_repo, save_path.clone());
    game.store.open_store();
    game.battle.trouble_kills = 131;
    tracker.on_long_tick(&mut game).unwrap();
    assert!(tracker.is_unlocked("Bookworm"));
    assert!(tracker.is_unlocked("Monster Slayer"));
    assert!(tracker.is_unlocked("Gemologist"));

    // Session two: load the unlock-triggered save into a fresh world.
    let data = SaveManager::at_path(save_path.clone()).load().unwrap();
    let mut restored_game = Game::new();
    let mut restored_tracker =
        AchievementTracker::with_save_path(&restored_game.item_repo, save_path.clone());
    restored_game.restore(&data);
    restored_tracker
        .set_properties(data.achievements.clone(), &mut restored_game)
        .unwrap();

    assert_eq!(restored_game.battle.trouble_kills, 131);
    assert!(restored_game.store.store_opened);
    assert!(restored_tracker.is_unlocked("Bookworm"));
    assert!(restored_tracker.is_unlocked("Monster Slayer"));
    assert!(restored_tracker.is_unlocked("Gemologist"));
    assert!(restored_game.store.is_manual_unlocked("fastPlayManual"));
    assert!(restored_game.store.is_manual_unlocked("autoTroubleManual"));
    assert!(restored_game.store.is_manual_unlocked("useSpiritGemManual"));
    // Restoring produced no fresh story entries.
    assert!(restored_game.log.story_entries().is_empty());

    let _ = fs::remove_file(save_path);
}

#[test]
fn test_unlock_order_survives_round_trip() {
    let save_path = temp_save_path("order");

    let mut game = Game::new();
    let mut tracker = AchievementTracker::with_save_path(&game.item_repo, save_path.clone());

    // Unlock in two separate passes so the order is meaningful.
    game.battle.trouble_kills = 89;
    tracker.on_long_tick(&mut game).unwrap();
    game.store.open_store();
    tracker.on_long_tick(&mut game).unwrap();

    assert_eq!(
        tracker.get_properties().unlocked_achievements,
        Some(vec!["Gemologist".to_string(), "Bookworm".to_string()])
    );

    let data = SaveManager::at_path(save_path.clone()).load().unwrap();
    let mut restored_game = Game::new();
    let mut restored_tracker =
        AchievementTracker::with_save_path(&restored_game.item_repo, save_path.clone());
    restored_tracker
        .set_properties(data.achievements, &mut restored_game)
        .unwrap();
    assert_eq!(
        restored_tracker.get_properties().unlocked_achievements,
        Some(vec!["Gemologist".to_string(), "Bookworm".to_string()])
    );

    let _ = fs::remove_file(save_path);
}
