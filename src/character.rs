//! Character state: attributes, equipment, and lifetime counters.

use crate::items::Item;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single character attribute. Values grow without bound over lifetimes;
/// aptitude scales how quickly the value grows (growth itself is handled by
/// the external activity layer).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttributeValue {
    pub value: f64,
    pub aptitude: f64,
}

impl AttributeValue {
    fn base() -> Self {
        Self {
            value: 1.0,
            aptitude: 1.0,
        }
    }

    fn dormant() -> Self {
        Self {
            value: 0.0,
            aptitude: 1.0,
        }
    }
}

/// The full attribute block. Lore attributes unlock gathering and crafting
/// behavior elsewhere in the game; spirituality stays at zero until awakened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    pub strength: AttributeValue,
    pub toughness: AttributeValue,
    pub speed: AttributeValue,
    pub intelligence: AttributeValue,
    pub charisma: AttributeValue,
    pub spirituality: AttributeValue,
    pub earth_lore: AttributeValue,
    pub metal_lore: AttributeValue,
    pub wood_lore: AttributeValue,
    pub water_lore: AttributeValue,
    pub fire_lore: AttributeValue,
}

impl Attributes {
    pub fn new() -> Self {
        Self {
            strength: AttributeValue::base(),
            toughness: AttributeValue::base(),
            speed: AttributeValue::base(),
            intelligence: AttributeValue::base(),
            charisma: AttributeValue::base(),
            spirituality: AttributeValue::dormant(),
            earth_lore: AttributeValue::dormant(),
            metal_lore: AttributeValue::dormant(),
            wood_lore: AttributeValue::dormant(),
            water_lore: AttributeValue::dormant(),
            fire_lore: AttributeValue::dormant(),
        }
    }
}

impl Default for Attributes {
    fn default() -> Self {
        Self::new()
    }
}

/// Equipped items, one optional item per slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub head: Option<Item>,
    pub body: Option<Item>,
    pub legs: Option<Item>,
    pub feet: Option<Item>,
    pub left_hand: Option<Item>,
    pub right_hand: Option<Item>,
}

impl Equipment {
    fn slot_damage(slot: &Option<Item>) -> u32 {
        slot.as_ref()
            .and_then(|item| item.weapon_stats)
            .map(|stats| stats.base_damage)
            .unwrap_or(0)
    }

    fn slot_defense(slot: &Option<Item>) -> u32 {
        slot.as_ref()
            .and_then(|item| item.armor_stats)
            .map(|stats| stats.defense)
            .unwrap_or(0)
    }

    /// Lowest base damage across both hand slots. An empty slot or a
    /// non-weapon item counts as zero.
    pub fn min_weapon_damage(&self) -> u32 {
        Self::slot_damage(&self.left_hand).min(Self::slot_damage(&self.right_hand))
    }

    /// Lowest defense across the four armor slots. An empty slot or a
    /// non-armor item counts as zero.
    pub fn min_armor_defense(&self) -> u32 {
        Self::slot_defense(&self.head)
            .min(Self::slot_defense(&self.body))
            .min(Self::slot_defense(&self.legs))
            .min(Self::slot_defense(&self.feet))
    }
}

/// The character itself: identity, reincarnation count, attributes, gear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterState {
    pub id: String,
    /// Lives lived so far, counting the current one.
    pub total_lives: u64,
    pub attributes: Attributes,
    pub equipment: Equipment,
}

impl CharacterState {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            total_lives: 1,
            attributes: Attributes::new(),
            equipment: Equipment::default(),
        }
    }
}

impl Default for CharacterState {
    fn default() -> Self {
        Self::new()
    }
}

/// Character service: owns the character state plus flags granted by
/// achievements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterService {
    pub character_state: CharacterState,
    /// Granted by the "Paternal Pride" achievement.
    pub father_gift: bool,
}

impl CharacterService {
    pub fn new() -> Self {
        Self {
            character_state: CharacterState::new(),
            father_gift: false,
        }
    }

    /// Starts a new life. Equipment is lost between lives; attributes carry
    /// over (the cultivation loop's whole premise).
    pub fn reincarnate(&mut self) {
        self.character_state.total_lives += 1;
        self.character_state.equipment = Equipment::default();
    }
}

impl Default for CharacterService {
    fn default() -> Self {
        Self::new()
    }
}
