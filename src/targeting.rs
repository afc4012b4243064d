use crate::config::FIRE_RANGE;
use crate::obs::{Command, Ship};
use crate::point::{Direction, Point};

/// Cardinal direction from `ship` to `enemy` iff they share a row or column
/// and the gap is within fire range. Diagonal fire does not exist.
pub fn aligned_shot(ship: &Ship, enemy: &Ship) -> Option<Direction> {
    let dx = enemy.x - ship.x;
    let dy = enemy.y - ship.y;
    if dy == 0 && dx != 0 && dx.abs() <= FIRE_RANGE {
        Direction::along_x(dx)
    } else if dx == 0 && dy != 0 && dy.abs() <= FIRE_RANGE {
        Direction::along_y(dy)
    } else {
        None
    }
}

/// Fire command against the first aligned enemy in range, if the ship's gun
/// is ready. Shared by all roles; firing always beats movement.
pub fn shoot_if_aligned(ship: &Ship, enemies: &[Ship]) -> Option<Command> {
    if !ship.can_fire() {
        return None;
    }
    enemies
        .iter()
        .find_map(|e| aligned_shot(ship, e))
        .map(|dir| Command::Fire { dir })
}

/// One move toward `to` along the axis with the larger remaining distance,
/// speed capped at `max_speed` and at the remaining gap. `None` on arrival.
pub fn step_toward(from: Point, to: Point, max_speed: i32) -> Option<Command> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let dir = if dx.abs() >= dy.abs() {
        Direction::along_x(dx).or_else(|| Direction::along_y(dy))
    } else {
        Direction::along_y(dy)
    }?;
    let gap = if dir.is_horizontal() { dx.abs() } else { dy.abs() };
    Some(Command::Move {
        dir,
        speed: max_speed.min(gap).max(1),
    })
}

/// Homeward move, or a speed-0 hold while sitting on the target tile.
pub fn move_or_hold(from: Point, to: Point, max_speed: i32) -> Command {
    step_toward(from, to, max_speed).unwrap_or(Command::Move {
        dir: Direction::Right,
        speed: 0,
    })
}
