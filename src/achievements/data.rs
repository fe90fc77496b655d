//! The static achievement table, in declaration (evaluation) order.

use crate::achievements::types::Achievement;
use crate::game::Game;
use crate::home::HomeTier;
use crate::items::ItemRepo;

/// Effect helper: makes a manual purchasable in the store. Missing registry
/// entries are skipped; `StoreService::unlock_manual` is itself idempotent.
fn unlock_manual(game: &mut Game, key: &str) {
    if let Some(item) = game.item_repo.item(key) {
        game.store.unlock_manual(item);
    }
}

fn unlock_text(repo: &ItemRepo, deed: &str, key: &str) -> String {
    format!("You {} and unlocked the {}", deed, repo.manual_name(key))
}

/// Builds the full achievement list. Order matters: achievements are
/// evaluated in this order every long tick. Names are persistence keys and
/// must never change ("Persitent Reincarnator" keeps its historical
/// spelling for exactly that reason).
pub fn achievement_list(repo: &ItemRepo) -> Vec<Achievement> {
    vec![
        Achievement {
            name: "Bookworm",
            description: unlock_text(repo, "opened the manuals shop", "fastPlayManual"),
            check: |game| game.store.store_opened,
            effect: |game| unlock_manual(game, "fastPlayManual"),
            unlocked: false,
        },
        Achievement {
            name: "Played a Bit",
            description: unlock_text(
                repo,
                "worked toward immortality for ten years across your lifetimes",
                "fasterPlayManual",
            ),
            check: |game| game.main_loop.total_ticks > 3650,
            effect: |game| unlock_manual(game, "fasterPlayManual"),
            unlocked: false,
        },
        Achievement {
            name: "Basically an Expert",
            description: unlock_text(
                repo,
                "worked toward immortality for one hundred years across your lifetimes",
                "fastestPlayManual",
            ),
            check: |game| game.main_loop.total_ticks > 36500,
            effect: |game| unlock_manual(game, "fastestPlayManual"),
            unlocked: false,
        },
        Achievement {
            name: "Agricultural Aptitude",
            description: unlock_text(repo, "plowed 88 fields", "perpetualFarmingManual"),
            check: |game| game.home.fields.len() >= 88,
            effect: |game| unlock_manual(game, "perpetualFarmingManual"),
            unlocked: false,
        },
        Achievement {
            name: "Persitent Reincarnator",
            description: unlock_text(repo, "lived 48 lives", "restartActivityManual"),
            check: |game| game.character.character_state.total_lives >= 48,
            effect: |game| unlock_manual(game, "restartActivityManual"),
            unlocked: false,
        },
        Achievement {
            name: "This Sparks Joy",
            description: unlock_text(repo, "used 888 items", "autoUseManual"),
            check: |game| game.inventory.lifetime_used_items >= 888,
            effect: |game| unlock_manual(game, "autoUseManual"),
            unlocked: false,
        },
        Achievement {
            name: "This Does Not Spark Joy",
            description: unlock_text(repo, "filled your entire inventory", "autoSellManual"),
            check: |game| game.inventory.open_inventory_slots() == 0,
            effect: |game| unlock_manual(game, "autoSellManual"),
            unlocked: false,
        },
        Achievement {
            name: "All Things In Moderation",
            description: unlock_text(repo, "sold and used 8888 items", "autoBalanceManual"),
            check: |game| {
                game.inventory.lifetime_used_items >= 8888
                    && game.inventory.lifetime_sold_items >= 8888
            },
            effect: |game| unlock_manual(game, "autoBalanceManual"),
            unlocked: false,
        },
        Achievement {
            name: "Land Rush",
            description: unlock_text(repo, "owned 520 plots of land", "autoBuyLandManual"),
            check: |game| game.home.land >= 520,
            effect: |game| unlock_manual(game, "autoBuyLandManual"),
            unlocked: false,
        },
        Achievement {
            name: "Real Housewives of Immortality",
            description: unlock_text(repo, "acquired a very fine home", "autoBuyHomeManual"),
            check: |game| game.home.home_value >= HomeTier::CourtyardHouse,
            effect: |game| unlock_manual(game, "autoBuyHomeManual"),
            unlocked: false,
        },
        Achievement {
            name: "Off to Ikea",
            description: unlock_text(
                repo,
                "filled all your furniture slots",
                "autoBuyFurnitureManual",
            ),
            check: |game| game.home.furniture.all_slots_filled(),
            effect: |game| unlock_manual(game, "autoBuyFurnitureManual"),
            unlocked: false,
        },
        Achievement {
            name: "Time to Buy a Tractor",
            description: unlock_text(repo, "plowed 888 fields", "autoFieldManual"),
            check: |game| game.home.fields.len() >= 888,
            effect: |game| unlock_manual(game, "autoFieldManual"),
            unlocked: false,
        },
        Achievement {
            name: "Guzzler",
            description: unlock_text(repo, "drank 88 potions", "autoPotionManual"),
            check: |game| game.inventory.lifetime_potions_used >= 88,
            effect: |game| unlock_manual(game, "autoPotionManual"),
            unlocked: false,
        },
        Achievement {
            name: "Junkie",
            description: unlock_text(repo, "took 131 pills", "autoPillManual"),
            check: |game| game.inventory.lifetime_pills_used >= 131,
            effect: |game| unlock_manual(game, "autoPillManual"),
            unlocked: false,
        },
        Achievement {
            name: "Monster Slayer",
            description: unlock_text(repo, "killed 131 monsters", "autoTroubleManual"),
            check: |game| game.battle.trouble_kills >= 131,
            effect: |game| unlock_manual(game, "autoTroubleManual"),
            unlocked: false,
        },
        Achievement {
            name: "Weapons Master",
            description: unlock_text(
                repo,
                "wielded powerful weapons of both metal and wood",
                "autoWeaponMergeManual",
            ),
            check: |game| {
                game.character
                    .character_state
                    .equipment
                    .min_weapon_damage()
                    >= 131
            },
            effect: |game| unlock_manual(game, "autoWeaponMergeManual"),
            unlocked: false,
        },
        Achievement {
            name: "Practically Invincible",
            description: unlock_text(
                repo,
                "equipped yourself with powerful armor",
                "autoArmorMergeManual",
            ),
            check: |game| {
                game.character
                    .character_state
                    .equipment
                    .min_armor_defense()
                    >= 131
            },
            effect: |game| unlock_manual(game, "autoArmorMergeManual"),
            unlocked: false,
        },
        Achievement {
            name: "Gemologist",
            description: unlock_text(repo, "acquired 88 gems", "useSpiritGemManual"),
            // Long-standing quirk: the live trigger counts trouble kills,
            // not gems. Kept as-is for save compatibility.
            check: |game| game.battle.trouble_kills > 88,
            effect: |game| unlock_manual(game, "useSpiritGemManual"),
            unlocked: false,
        },
        Achievement {
            name: "Ingredient Snob",
            description: unlock_text(
                repo,
                "achieved a deep understanding of herbs",
                "bestHerbsManual",
            ),
            check: |game| game.character.character_state.attributes.wood_lore.value > 1024.0,
            effect: |game| unlock_manual(game, "bestHerbsManual"),
            unlocked: false,
        },
        Achievement {
            name: "Grandpa's Old Tent",
            description: "You've gone through eight cycles of reincarnation and come to \
                          understand the value of grandfathers."
                .to_string(),
            check: |game| game.character.character_state.total_lives > 8,
            effect: |game| game.home.grandfather_tent = true,
            unlocked: false,
        },
        Achievement {
            name: "Paternal Pride",
            description: "You've worked 888 days of odd jobs and come to understand the \
                          value of fathers."
                .to_string(),
            check: |game| game.activity.odd_job_days > 888,
            effect: |game| game.character.father_gift = true,
            unlocked: false,
        },
        Achievement {
            name: "Maternal Love",
            description: "You've done 888 days of begging and come to understand the \
                          value of mothers."
                .to_string(),
            check: |game| game.activity.begging_days > 888,
            effect: |game| game.inventory.mother_gift = true,
            unlocked: false,
        },
        Achievement {
            name: "Grandma's Stick",
            description: "You've developed spirituality and come to understand the value \
                          of grandmothers."
                .to_string(),
            check: |game| game.character.character_state.attributes.spirituality.value > 0.0,
            effect: |game| game.inventory.grandmother_gift = true,
            unlocked: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_has_unique_names() {
        let repo = ItemRepo::new();
        let achievements = achievement_list(&repo);
        let names: HashSet<&str> = achievements.iter().map(|a| a.name).collect();
        assert_eq!(names.len(), achievements.len());
    }

    #[test]
    fn test_table_starts_fully_locked() {
        let repo = ItemRepo::new();
        for achievement in achievement_list(&repo) {
            assert!(!achievement.unlocked, "{} starts unlocked", achievement.name);
            assert!(!achievement.description.is_empty());
        }
    }

    #[test]
    fn test_descriptions_interpolate_manual_names() {
        let repo = ItemRepo::new();
        let achievements = achievement_list(&repo);
        let bookworm = achievements.iter().find(|a| a.name == "Bookworm").unwrap();
        assert_eq!(
            bookworm.description,
            "You opened the manuals shop and unlocked the Manual of Expeditious Time Compression"
        );
    }

    #[test]
    fn test_no_predicate_fires_on_fresh_game() {
        let repo = ItemRepo::new();
        let game = Game::new();
        for achievement in achievement_list(&repo) {
            assert!(
                !(achievement.check)(&game),
                "{} fired on a fresh game",
                achievement.name
            );
        }
    }

    #[test]
    fn test_effects_are_idempotent() {
        let repo = ItemRepo::new();
        let mut game = Game::new();
        let achievements = achievement_list(&repo);

        for achievement in &achievements {
            (achievement.effect)(&mut game);
        }
        let manuals_after_one = game.store.unlocked_manuals().to_vec();
        let snapshot_after_one = (
            game.home.grandfather_tent,
            game.character.father_gift,
            game.inventory.mother_gift,
            game.inventory.grandmother_gift,
        );

        for achievement in &achievements {
            (achievement.effect)(&mut game);
        }
        assert_eq!(game.store.unlocked_manuals(), manuals_after_one.as_slice());
        assert_eq!(
            (
                game.home.grandfather_tent,
                game.character.father_gift,
                game.inventory.mother_gift,
                game.inventory.grandmother_gift,
            ),
            snapshot_after_one
        );
    }

    #[test]
    fn test_gemologist_triggers_on_kill_counter() {
        let repo = ItemRepo::new();
        let mut game = Game::new();
        let achievements = achievement_list(&repo);
        let gemologist = achievements.iter().find(|a| a.name == "Gemologist").unwrap();

        game.battle.trouble_kills = 88;
        assert!(!(gemologist.check)(&game));
        game.battle.trouble_kills = 89;
        assert!((gemologist.check)(&game));
    }
}
