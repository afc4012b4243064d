use crate::config::{CLUSTER_WINDOW, EXPLORE_JITTER, PROMOTE_BUMPS};
use crate::map::{is_valuable, TileMap};
use crate::obs::{Command, Observation, Ship};
use crate::point::{Direction, Point};
use crate::state::Role;
use crate::targeting::{shoot_if_aligned, step_toward};
use crate::Agent;

impl Agent {
    /// Explore role: shoot anything lined up, head for the densest visible
    /// patch of valuable tiles, otherwise wander the assigned pattern.
    pub fn explore(&mut self, ship: &Ship, obs: &Observation) -> Command {
        if let Some(cmd) = shoot_if_aligned(ship, &obs.enemy_ships) {
            return cmd;
        }
        if let Some(target) = richest_cluster(&obs.map) {
            // Jitter keeps explorers from stacking on the exact same cell
            let jitter = Point::new(
                self.state.roll_jitter(EXPLORE_JITTER),
                self.state.roll_jitter(EXPLORE_JITTER),
            );
            let goal = obs.map.clamp(target + jitter);
            if let Some(cmd) = step_toward(ship.position(), goal, ship.move_speed()) {
                return cmd;
            }
        }
        self.wander(ship, obs)
    }

    fn wander(&mut self, ship: &Ship, obs: &Observation) -> Command {
        let turn = self.state.turn;
        let pattern = *self.state.pattern_for(ship.id);
        let mut dir = pattern.direction_at(turn, ship.id);
        let speed = ship.move_speed();
        let next = ship.position() + dir.offset() * speed;
        let out = if dir.is_horizontal() {
            next.x < 0 || next.x >= obs.map.width()
        } else {
            next.y < 0 || next.y >= obs.map.height()
        };
        if out {
            let stored = self
                .state
                .patterns
                .get_mut(&ship.id)
                .expect("pattern created above");
            stored.bounce(dir.is_horizontal());
            if stored.bumps >= PROMOTE_BUMPS {
                // Bounced around long enough; this ship has seen the map
                log::debug!("turn {turn}: explorer {} promoted to attacker", ship.id);
                self.state.assign_role(ship.id, Role::Attack);
                return self.attack(ship, obs);
            }
            dir = dir.flipped();
        }
        let pos = ship.position();
        let room = match dir {
            Direction::Right => obs.map.width() - 1 - pos.x,
            Direction::Left => pos.x,
            Direction::Down => obs.map.height() - 1 - pos.y,
            Direction::Up => pos.y,
        };
        Command::Move {
            dir,
            speed: speed.min(room).max(0),
        }
    }
}

/// Coordinate of the valuable tile with the most valuable neighbors in its
/// 6x6 window. Column-then-row scan; the first strict maximum wins.
fn richest_cluster(map: &TileMap) -> Option<Point> {
    let mut best: Option<(Point, i32)> = None;
    for x in 0..map.width() {
        for y in 0..map.height() {
            let p = Point::new(x, y);
            if !map.get(p).is_some_and(is_valuable) {
                continue;
            }
            let mut score = 0;
            for dx in -CLUSTER_WINDOW..CLUSTER_WINDOW {
                for dy in -CLUSTER_WINDOW..CLUSTER_WINDOW {
                    if map
                        .get(p + Point::new(dx, dy))
                        .is_some_and(is_valuable)
                    {
                        score += 1;
                    }
                }
            }
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((p, score));
            }
        }
    }
    best.map(|(p, _)| p)
}
