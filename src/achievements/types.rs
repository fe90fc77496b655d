//! Achievement types and the persisted properties shape.

use crate::game::Game;
use serde::{Deserialize, Serialize};

/// Predicate over current game state. Must be side-effect-free and cheap;
/// it runs for every locked achievement on every long tick.
pub type CheckFn = fn(&Game) -> bool;

/// Unlock side effect. Must be idempotent: it runs once during live play
/// and again every time a save is restored.
pub type EffectFn = fn(&mut Game);

/// A single achievement: name, rendered description, predicate, effect,
/// and session unlock status.
#[derive(Debug, Clone)]
pub struct Achievement {
    /// Unique name, stable across saves; the persistence key.
    pub name: &'static str,
    /// Display text, rendered once at construction (item names are
    /// interpolated from the registry at that point).
    pub description: String,
    pub check: CheckFn,
    pub effect: EffectFn,
    pub unlocked: bool,
}

/// The sole persisted shape for achievements: which names are unlocked,
/// in unlock order. The field tolerates absent/null input on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AchievementProperties {
    #[serde(default)]
    pub unlocked_achievements: Option<Vec<String>>,
}
