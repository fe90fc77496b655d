// Game timing constants
pub const TICK_INTERVAL_MS: u64 = 100;
pub const TICKS_PER_LONG_TICK: u64 = 10;

// Inventory constants
pub const DEFAULT_INVENTORY_SLOTS: usize = 10;

// Save system constants
pub const SAVE_VERSION_MAGIC: u64 = 0x494D4D4F5254414C; // "IMMORTAL" in hex
