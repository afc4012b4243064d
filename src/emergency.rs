use crate::config::EMERGENCY_RANGE;
use crate::obs::{Command, Observation, Ship};
use crate::targeting::move_or_hold;
use crate::Agent;

impl Agent {
    /// Home under existential threat? Then the assigned role does not
    /// matter: run back. Checked before every role behavior; `None` means
    /// business as usual.
    pub fn check_emergency(&mut self, ship: &Ship, obs: &Observation) -> Option<Command> {
        let home = self.state.home?;
        let owned = self.state.side?.owned_occupation();
        let occupation = obs
            .planets_occupation
            .iter()
            .find(|p| p.position() == home)
            .map(|p| p.occupation)?;
        if occupation == owned {
            return None;
        }
        if ship.position().manhattan_distance(home) > EMERGENCY_RANGE {
            return None;
        }
        log::debug!(
            "turn {}: ship {} recalled, home occupation at {}",
            self.state.turn,
            ship.id,
            occupation
        );
        Some(move_or_hold(ship.position(), home, ship.move_speed()))
    }
}
