//! Home state: land, fields, home tier, and furniture.

use crate::items::Item;
use serde::{Deserialize, Serialize};

/// Home tiers in upgrade order. Comparisons rely on declaration order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum HomeTier {
    SquatterTent,
    OwnTent,
    DirtyShack,
    SimpleHut,
    PleasantCottage,
    LargeHouse,
    CourtyardHouse,
    Manor,
    Mansion,
    Palace,
}

impl HomeTier {
    pub fn name(&self) -> &'static str {
        match self {
            HomeTier::SquatterTent => "Squatter Tent",
            HomeTier::OwnTent => "Tent of Your Own",
            HomeTier::DirtyShack => "Dirty Shack",
            HomeTier::SimpleHut => "Simple Hut",
            HomeTier::PleasantCottage => "Pleasant Cottage",
            HomeTier::LargeHouse => "Large House",
            HomeTier::CourtyardHouse => "Courtyard House",
            HomeTier::Manor => "Manor",
            HomeTier::Mansion => "Mansion",
            HomeTier::Palace => "Palace",
        }
    }
}

/// A plowed field. Crops and harvest timing are driven by the external
/// activity layer; the tracker only counts fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub crop: String,
    pub days_until_harvest: u32,
}

/// The four furniture slots of a furnished home.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Furniture {
    pub bed: Option<Item>,
    pub bathtub: Option<Item>,
    pub kitchen: Option<Item>,
    pub workbench: Option<Item>,
}

impl Furniture {
    pub fn all_slots_filled(&self) -> bool {
        self.bed.is_some()
            && self.bathtub.is_some()
            && self.kitchen.is_some()
            && self.workbench.is_some()
    }
}

/// Home service: land holdings, fields, home tier, furniture, and the
/// grandfather's tent flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeService {
    /// Unplowed plots of land owned.
    pub land: u64,
    pub fields: Vec<Field>,
    pub home_value: HomeTier,
    pub furniture: Furniture,
    /// Granted by the "Grandpa's Old Tent" achievement.
    pub grandfather_tent: bool,
}

impl HomeService {
    pub fn new() -> Self {
        Self {
            land: 0,
            fields: Vec::new(),
            home_value: HomeTier::SquatterTent,
            furniture: Furniture::default(),
            grandfather_tent: false,
        }
    }

    pub fn buy_land(&mut self, plots: u64) {
        self.land += plots;
    }

    /// Converts one plot of land into a plowed field. Returns false when no
    /// land is available.
    pub fn plow_field(&mut self, crop: &str) -> bool {
        if self.land == 0 {
            return false;
        }
        self.land -= 1;
        self.fields.push(Field {
            crop: crop.to_string(),
            days_until_harvest: 90,
        });
        true
    }

    pub fn upgrade_home(&mut self, tier: HomeTier) {
        if tier > self.home_value {
            self.home_value = tier;
        }
    }
}

impl Default for HomeService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_tier_ordering() {
        assert!(HomeTier::CourtyardHouse > HomeTier::LargeHouse);
        assert!(HomeTier::SquatterTent < HomeTier::CourtyardHouse);
        assert!(HomeTier::Palace >= HomeTier::CourtyardHouse);
    }

    #[test]
    fn test_plow_field_consumes_land() {
        let mut home = HomeService::new();
        assert!(!home.plow_field("rice"));

        home.buy_land(2);
        assert!(home.plow_field("rice"));
        assert!(home.plow_field("cabbage"));
        assert!(!home.plow_field("melon"));
        assert_eq!(home.fields.len(), 2);
        assert_eq!(home.land, 0);
    }

    #[test]
    fn test_upgrade_home_never_downgrades() {
        let mut home = HomeService::new();
        home.upgrade_home(HomeTier::LargeHouse);
        assert_eq!(home.home_value, HomeTier::LargeHouse);

        home.upgrade_home(HomeTier::DirtyShack);
        assert_eq!(home.home_value, HomeTier::LargeHouse);
    }

    #[test]
    fn test_all_furniture_slots_filled() {
        let mut home = HomeService::new();
        assert!(!home.furniture.all_slots_filled());

        home.furniture.bed = Some(Item::manual("bed", "Straw Mat", "", 10));
        home.furniture.bathtub = Some(Item::manual("bathtub", "Wooden Tub", "", 10));
        home.furniture.kitchen = Some(Item::manual("kitchen", "Clay Stove", "", 10));
        assert!(!home.furniture.all_slots_filled());

        home.furniture.workbench = Some(Item::manual("workbench", "Workbench", "", 10));
        assert!(home.furniture.all_slots_filled());
    }
}
