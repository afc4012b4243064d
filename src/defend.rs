use crate::config::{DEFEND_RADIUS, DEFEND_RETRIES};
use crate::map::is_asteroid;
use crate::obs::{Command, Observation, Ship};
use crate::targeting::{move_or_hold, shoot_if_aligned};
use crate::Agent;

impl Agent {
    /// Defend role: shoot anything lined up; run home when wounded or when
    /// the home planet is contested; otherwise loiter near home.
    pub fn defend(&mut self, ship: &Ship, obs: &Observation) -> Command {
        if let Some(cmd) = shoot_if_aligned(ship, &obs.enemy_ships) {
            return cmd;
        }
        let home = self.state.home_or_center(&obs.map);
        let contested = self.state.side.is_some_and(|side| {
            obs.planets_occupation
                .iter()
                .find(|p| p.position() == home)
                .is_some_and(|p| p.occupation != side.owned_occupation())
        });
        if ship.health <= self.params.wounded_health || contested {
            return move_or_hold(ship.position(), home, ship.move_speed());
        }

        let speed = ship.move_speed();
        let mut last = None;
        for _ in 0..DEFEND_RETRIES {
            let dir = self.state.roll_direction();
            last = Some(dir);
            let dest = ship.position() + dir.offset() * speed;
            let legal = obs.map.in_bounds(dest)
                && dest.manhattan_distance(home) <= DEFEND_RADIUS
                && !obs.map.get(dest).is_some_and(is_asteroid);
            if legal {
                return Command::Move { dir, speed };
            }
        }
        // Out of retries; the host clamps or ignores an illegal move
        Command::Move {
            dir: last.expect("at least one wander attempt"),
            speed,
        }
    }
}
