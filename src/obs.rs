use crate::map::TileMap;
use crate::point::{Direction, Point};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};

pub type ShipId = u32;

/// One ship as reported by the environment. Rebuilt every step; only the id
/// is stable across steps.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    pub id: ShipId,
    pub x: i32,
    pub y: i32,
    pub health: i32,
    pub fire_cooldown: i32,
    pub move_cooldown: i32,
}

impl Ship {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn can_fire(&self) -> bool {
        self.fire_cooldown == 0
    }

    // Cooldown throttles but never fully stalls a ship
    pub fn move_speed(&self) -> i32 {
        if self.move_cooldown == 0 {
            crate::config::MAX_SPEED
        } else {
            1
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    pub x: i32,
    pub y: i32,
    /// -1 unclaimed, 0 owned by the first player, 100 by the second, values
    /// between mean the planet is contested.
    pub occupation: i32,
}

impl Planet {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Per-step input from the environment, already visibility-masked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    pub map: TileMap,
    pub allied_ships: Vec<Ship>,
    pub enemy_ships: Vec<Ship>,
    pub planets_occupation: Vec<Planet>,
    pub resources: i32,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Move { dir: Direction, speed: i32 },
    Fire { dir: Direction },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ShipCommand {
    pub ship_id: ShipId,
    pub command: Command,
}

impl ShipCommand {
    pub fn moving(ship_id: ShipId, dir: Direction, speed: i32) -> Self {
        debug_assert!((0..=crate::config::MAX_SPEED).contains(&speed));
        Self {
            ship_id,
            command: Command::Move { dir, speed },
        }
    }

    pub fn firing(ship_id: ShipId, dir: Direction) -> Self {
        Self {
            ship_id,
            command: Command::Fire { dir },
        }
    }

    /// Wire shape: `[id, 0, dir, speed]` for a move, `[id, 1, dir]` for fire.
    pub fn encode(&self) -> Vec<i32> {
        match self.command {
            Command::Move { dir, speed } => {
                vec![self.ship_id as i32, 0, dir.index() as i32, speed]
            }
            Command::Fire { dir } => vec![self.ship_id as i32, 1, dir.index() as i32],
        }
    }
}

impl Serialize for ShipCommand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let encoded = self.encode();
        let mut seq = serializer.serialize_seq(Some(encoded.len()))?;
        for v in encoded {
            seq.serialize_element(&v)?;
        }
        seq.end()
    }
}

/// Per-step output handed back to the environment.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ActionBatch {
    pub ships_actions: Vec<ShipCommand>,
    pub construction: i32,
}
