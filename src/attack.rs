use crate::config::PURSUIT_RANGE;
use crate::obs::{Command, Observation, Ship};
use crate::targeting::{move_or_hold, shoot_if_aligned, step_toward};
use crate::Agent;

impl Agent {
    /// Attack role: shoot anything lined up, chase a remembered contact
    /// nearby, otherwise push toward the enemy home planet.
    pub fn attack(&mut self, ship: &Ship, obs: &Observation) -> Command {
        if let Some(cmd) = shoot_if_aligned(ship, &obs.enemy_ships) {
            return cmd;
        }
        let pos = ship.position();
        if let Some(contact) = self.state.nearest_sighting(pos, PURSUIT_RANGE) {
            if let Some(cmd) = step_toward(pos, contact, ship.move_speed()) {
                return cmd;
            }
        }
        let target = self.state.enemy_home_or_center(&obs.map);
        move_or_hold(pos, target, ship.move_speed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Direction;
    use crate::testutil::{base_obs, ship};

    fn agent() -> Agent {
        let obs = base_obs();
        let mut agent = Agent::with_seed(1);
        agent
            .state
            .latch_home(obs.planets_occupation[0].position(), &obs.map);
        agent
    }

    #[test]
    fn firing_beats_movement() {
        let mut agent = agent();
        let mut obs = base_obs();
        obs.enemy_ships = vec![ship(50, 20, 14)];
        let cmd = agent.attack(&ship(1, 20, 10), &obs);
        assert_eq!(
            cmd,
            Command::Fire {
                dir: Direction::Down
            }
        );
    }

    #[test]
    fn pushes_toward_enemy_home_along_larger_axis() {
        let mut agent = agent();
        let obs = base_obs();
        // Enemy home mirrored to (90, 90); dx=70 > dy=40
        let cmd = agent.attack(&ship(1, 20, 50), &obs);
        assert_eq!(
            cmd,
            Command::Move {
                dir: Direction::Right,
                speed: 3
            }
        );
    }

    #[test]
    fn cooldown_throttles_the_push() {
        let mut agent = agent();
        let obs = base_obs();
        let mut attacker = ship(1, 20, 50);
        attacker.move_cooldown = 2;
        let cmd = agent.attack(&attacker, &obs);
        assert_eq!(
            cmd,
            Command::Move {
                dir: Direction::Right,
                speed: 1
            }
        );
    }

    #[test]
    fn chases_last_seen_contact_in_range() {
        let mut agent = agent();
        let obs = base_obs();
        agent.state.track_enemies(&[ship(9, 18, 55)]);
        // Contact off the fire lines but within pursuit range pulls the ship
        // away from the cross-board push
        let cmd = agent.attack(&ship(1, 20, 50), &obs);
        assert_eq!(
            cmd,
            Command::Move {
                dir: Direction::Down,
                speed: 3
            }
        );
        // A far contact is ignored in favor of the enemy home push
        let mut agent = self::agent();
        agent.state.track_enemies(&[ship(9, 60, 50)]);
        let cmd = agent.attack(&ship(1, 20, 50), &obs);
        assert_eq!(
            cmd,
            Command::Move {
                dir: Direction::Right,
                speed: 3
            }
        );
    }

    #[test]
    fn holds_on_the_enemy_planet() {
        let mut agent = agent();
        let obs = base_obs();
        let cmd = agent.attack(&ship(1, 90, 90), &obs);
        assert_eq!(
            cmd,
            Command::Move {
                dir: Direction::Right,
                speed: 0
            }
        );
    }
}
