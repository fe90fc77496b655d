//! Item types and the static item registry.
//!
//! The registry maps stable item keys (persistence-safe, never renamed) to
//! item records. Achievement descriptions and manual unlocks resolve items
//! through it at runtime.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Broad item classification used by inventory bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    Manual,
    Weapon,
    Armor,
    Potion,
    Pill,
    Food,
    Herb,
    Gem,
}

/// Stats carried by weapon items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponStats {
    pub base_damage: u32,
}

/// Stats carried by armor items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArmorStats {
    pub defense: u32,
}

/// A single item record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Stable key, used as the persistence identifier.
    pub key: String,
    /// Display name.
    pub name: String,
    pub description: String,
    pub item_type: ItemType,
    pub value: u64,
    #[serde(default)]
    pub weapon_stats: Option<WeaponStats>,
    #[serde(default)]
    pub armor_stats: Option<ArmorStats>,
}

impl Item {
    /// Creates a manual item (unlockable technique book sold in the store).
    pub fn manual(key: &str, name: &str, description: &str, value: u64) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            item_type: ItemType::Manual,
            value,
            weapon_stats: None,
            armor_stats: None,
        }
    }

    /// Creates a weapon item with the given base damage.
    pub fn weapon(key: &str, name: &str, base_damage: u32, value: u64) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            description: String::new(),
            item_type: ItemType::Weapon,
            value,
            weapon_stats: Some(WeaponStats { base_damage }),
            armor_stats: None,
        }
    }

    /// Creates an armor item with the given defense.
    pub fn armor(key: &str, name: &str, defense: u32, value: u64) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            description: String::new(),
            item_type: ItemType::Armor,
            value,
            weapon_stats: None,
            armor_stats: Some(ArmorStats { defense }),
        }
    }
}

/// A stack of identical items in an inventory slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    pub item: Item,
    pub quantity: u32,
}

/// Static registry of item definitions keyed by stable item key.
///
/// Built once at startup; never mutated afterwards. Not persisted — saves
/// reference items by key and resolve them here on load.
#[derive(Debug, Clone)]
pub struct ItemRepo {
    items: HashMap<&'static str, Item>,
}

impl ItemRepo {
    pub fn new() -> Self {
        let mut items = HashMap::new();

        let manuals: &[(&str, &str, &str, u64)] = &[
            (
                "fastPlayManual",
                "Manual of Expeditious Time Compression",
                "Teaches you to accelerate the flow of time.",
                10000,
            ),
            (
                "fasterPlayManual",
                "Manual of Greatly Expeditious Time Compression",
                "Teaches you to accelerate the flow of time even further.",
                1000000,
            ),
            (
                "fastestPlayManual",
                "Manual of Ludicrous Time Compression",
                "Teaches you to accelerate the flow of time to its limit.",
                100000000,
            ),
            (
                "perpetualFarmingManual",
                "Manual of Perpetual Farming",
                "Teaches you to automatically replant harvested fields.",
                100000,
            ),
            (
                "restartActivityManual",
                "Manual of Remembered Plans",
                "Teaches you to resume your activity schedule after reincarnation.",
                500000,
            ),
            (
                "autoUseManual",
                "Manual of Reflexive Item Use",
                "Teaches you to use items the moment you acquire them.",
                100000,
            ),
            (
                "autoSellManual",
                "Manual of Effortless Salesmanship",
                "Teaches you to sell items the moment you acquire them.",
                100000,
            ),
            (
                "autoBalanceManual",
                "Manual of Balanced Consumption and Commerce",
                "Teaches you to balance using and selling your acquisitions.",
                5000000,
            ),
            (
                "autoBuyLandManual",
                "Manual of Aggressive Land Acquisition",
                "Teaches you to buy land whenever you can afford it.",
                2000000,
            ),
            (
                "autoBuyHomeManual",
                "Manual of Ambitious Home Upgrades",
                "Teaches you to upgrade your home whenever you can afford it.",
                10000000,
            ),
            (
                "autoBuyFurnitureManual",
                "Manual of Impeccable Furnishing",
                "Teaches you to buy furniture whenever you can afford it.",
                8000000,
            ),
            (
                "autoFieldManual",
                "Manual of Tireless Field Plowing",
                "Teaches you to plow new fields whenever land is available.",
                2000000,
            ),
            (
                "autoPotionManual",
                "Manual of Instinctive Potion Quaffing",
                "Teaches you to drink potions the moment you acquire them.",
                500000,
            ),
            (
                "autoPillManual",
                "Manual of Habitual Pill Popping",
                "Teaches you to swallow pills the moment you acquire them.",
                800000,
            ),
            (
                "autoTroubleManual",
                "Manual of Trouble Seeking",
                "Teaches you to go looking for trouble on your own.",
                1000000,
            ),
            (
                "autoWeaponMergeManual",
                "Manual of Weapon Fusion",
                "Teaches you to merge duplicate weapons automatically.",
                5000000,
            ),
            (
                "autoArmorMergeManual",
                "Manual of Armor Fusion",
                "Teaches you to merge duplicate armor automatically.",
                5000000,
            ),
            (
                "useSpiritGemManual",
                "Manual of Spirit Gem Infusion",
                "Teaches you to infuse spirit gems when upgrading equipment.",
                2000000,
            ),
            (
                "bestHerbsManual",
                "Manual of Discerning Herbalism",
                "Teaches you to gather only the finest herbs.",
                3000000,
            ),
        ];

        for (key, name, description, value) in manuals {
            items.insert(*key, Item::manual(key, name, description, *value));
        }

        Self { items }
    }

    /// Looks up an item by its stable key.
    pub fn item(&self, key: &str) -> Option<&Item> {
        self.items.get(key)
    }

    /// Display name for a manual, falling back to the key itself when the
    /// registry has no entry. Used when rendering achievement descriptions.
    pub fn manual_name(&self, key: &str) -> String {
        self.items
            .get(key)
            .map(|item| item.name.clone())
            .unwrap_or_else(|| key.to_string())
    }
}

impl Default for ItemRepo {
    fn default() -> Self {
        Self::new()
    }
}
