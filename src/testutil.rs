use crate::map::TileMap;
use crate::obs::{Observation, Planet, Ship, ShipId};

pub fn ship(id: ShipId, x: i32, y: i32) -> Ship {
    Ship {
        id,
        x,
        y,
        health: 100,
        fire_cooldown: 0,
        move_cooldown: 0,
    }
}

pub fn wounded(id: ShipId, x: i32, y: i32, health: i32) -> Ship {
    Ship {
        health,
        ..ship(id, x, y)
    }
}

/// Empty 100x100 board with a single owned home planet at (9, 9).
pub fn base_obs() -> Observation {
    Observation {
        map: TileMap::filled(100, 100, 0),
        allied_ships: vec![],
        enemy_ships: vec![],
        planets_occupation: vec![Planet {
            x: 9,
            y: 9,
            occupation: 0,
        }],
        resources: 0,
    }
}
