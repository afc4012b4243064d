// Maximum straight-line fire distance in tiles
pub const FIRE_RANGE: i32 = 8;

// Fastest allowed move, tiles per step
pub const MAX_SPEED: i32 = 3;

// Manhattan distance from home within which the emergency recall applies
pub const EMERGENCY_RANGE: i32 = 100;

// Home x coordinate of the first player's planet
pub const FIRST_PLAYER_HOME_X: i32 = 9;

// Defenders wander at most this Manhattan distance from home
pub const DEFEND_RADIUS: i32 = 15;

// Attempts to roll a legal wander destination before giving up
pub const DEFEND_RETRIES: u32 = 10;

// Half-extent of the valuable-cluster scoring window (6x6 cells)
pub const CLUSTER_WINDOW: i32 = 3;

// Jitter applied to an explore target, +- tiles per axis
pub const EXPLORE_JITTER: i32 = 2;

// Edge bounces before an explorer gives up and turns attacker
pub const PROMOTE_BUMPS: u32 = 2;

// Attackers chase a remembered contact no further than this
pub const PURSUIT_RANGE: i32 = 12;

// Turns until a last-seen enemy position is forgotten
pub const SIGHTING_TTL: u32 = 50;

// Resource pool cap; at cap we queue new ships
pub const RESOURCE_CAP: i32 = 800;

// Ships queued per construction request
pub const CONSTRUCTION_BATCH: i32 = 2;
