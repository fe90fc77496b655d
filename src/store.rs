//! The manuals store: tracks which technique manuals are purchasable.

use crate::items::Item;
use serde::{Deserialize, Serialize};

/// Store service. Manuals start hidden and become purchasable when an
/// achievement unlocks them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreService {
    /// Whether the player has found the manuals shop at all.
    pub store_opened: bool,
    unlocked_manuals: Vec<String>,
}

impl StoreService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_store(&mut self) {
        self.store_opened = true;
    }

    /// Marks a manual as purchasable. Safe to call repeatedly: a manual is
    /// recorded at most once, so achievement effects can be replayed on load.
    pub fn unlock_manual(&mut self, item: &Item) {
        if !self.unlocked_manuals.iter().any(|key| key == &item.key) {
            self.unlocked_manuals.push(item.key.clone());
        }
    }

    pub fn is_manual_unlocked(&self, key: &str) -> bool {
        self.unlocked_manuals.iter().any(|unlocked| unlocked == key)
    }

    /// Keys of all unlocked manuals, in unlock order.
    pub fn unlocked_manuals(&self) -> &[String] {
        &self.unlocked_manuals
    }
}
