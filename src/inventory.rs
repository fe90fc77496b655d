//! Inventory state: stack slots, lifetime usage counters, and gift flags.

use crate::constants::DEFAULT_INVENTORY_SLOTS;
use crate::items::{Item, ItemStack, ItemType};
use serde::{Deserialize, Serialize};

/// Inventory service: fixed-capacity stack slots plus lifetime counters the
/// achievement tracker reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryService {
    pub item_stacks: Vec<Option<ItemStack>>,
    pub lifetime_used_items: u64,
    pub lifetime_sold_items: u64,
    pub lifetime_potions_used: u64,
    pub lifetime_pills_used: u64,
    /// Granted by the "Maternal Love" achievement.
    pub mother_gift: bool,
    /// Granted by the "Grandma's Stick" achievement.
    pub grandmother_gift: bool,
}

impl InventoryService {
    pub fn new() -> Self {
        Self {
            item_stacks: vec![None; DEFAULT_INVENTORY_SLOTS],
            lifetime_used_items: 0,
            lifetime_sold_items: 0,
            lifetime_potions_used: 0,
            lifetime_pills_used: 0,
            mother_gift: false,
            grandmother_gift: false,
        }
    }

    /// Number of empty slots remaining.
    pub fn open_inventory_slots(&self) -> usize {
        self.item_stacks.iter().filter(|slot| slot.is_none()).count()
    }

    /// Places an item into the first open slot, stacking onto an existing
    /// stack of the same item first. Returns false when the inventory is full.
    pub fn add_item(&mut self, item: Item, quantity: u32) -> bool {
        for slot in self.item_stacks.iter_mut().flatten() {
            if slot.item.key == item.key {
                slot.quantity += quantity;
                return true;
            }
        }
        for slot in self.item_stacks.iter_mut() {
            if slot.is_none() {
                *slot = Some(ItemStack { item, quantity });
                return true;
            }
        }
        false
    }

    /// Records that an item was consumed, updating the lifetime counters the
    /// achievement tracker watches.
    pub fn record_item_used(&mut self, item_type: ItemType) {
        self.lifetime_used_items += 1;
        match item_type {
            ItemType::Potion => self.lifetime_potions_used += 1,
            ItemType::Pill => self.lifetime_pills_used += 1,
            _ => {}
        }
    }

    /// Records that an item was sold.
    pub fn record_item_sold(&mut self, quantity: u64) {
        self.lifetime_sold_items += quantity;
    }
}

impl Default for InventoryService {
    fn default() -> Self {
        Self::new()
    }
}
