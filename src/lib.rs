//! Scripted ship policy for the OctoSpace 2-player grid strategy
//! environment. The match harness drives one [`Agent`] per side, calling
//! [`Agent::get_action`] once per simulation step.

mod attack;
mod config;
mod defend;
mod emergency;
mod explore;
mod map;
mod obs;
mod point;
mod policy;
mod scheduler;
mod state;
mod targeting;
#[cfg(test)]
mod testutil;

pub use map::{is_asteroid, is_valuable, TileMap};
pub use obs::{ActionBatch, Command, Observation, Planet, Ship, ShipCommand, ShipId};
pub use point::{Direction, Point};
pub use policy::{load_params, save_params, PolicyParams, RoleMix};
pub use state::{MatchState, Role, Side, WanderPattern};
pub use targeting::{aligned_shot, shoot_if_aligned, step_toward};

use std::path::Path;

pub struct Agent {
    pub state: MatchState,
    pub params: PolicyParams,
}

impl Agent {
    pub fn new() -> Self {
        let time = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .unwrap()
            .as_secs();
        Self::with_seed(time)
    }

    /// Fixed-seed construction; every random choice of the policy flows from
    /// this seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: MatchState::new(seed),
            params: PolicyParams::default(),
        }
    }

    /// One full decision step: latch home on first contact, refresh enemy
    /// sightings, rebalance roles, then one command per ship plus the
    /// construction request.
    pub fn get_action(&mut self, obs: &Observation) -> ActionBatch {
        if self.state.home.is_none() {
            if let Some(planet) = obs.planets_occupation.first() {
                self.state.latch_home(planet.position(), &obs.map);
            }
        }
        self.state.track_enemies(&obs.enemy_ships);
        self.schedule_roles(&obs.allied_ships);

        let mut ships_actions = Vec::with_capacity(obs.allied_ships.len());
        for ship in &obs.allied_ships {
            let command = match self.check_emergency(ship, obs) {
                Some(cmd) => cmd,
                None => self.decide(ship, obs),
            };
            ships_actions.push(ShipCommand {
                ship_id: ship.id,
                command,
            });
        }

        let construction = if obs.resources >= config::RESOURCE_CAP {
            config::CONSTRUCTION_BATCH
        } else {
            0
        };
        self.state.turn += 1;
        ActionBatch {
            ships_actions,
            construction,
        }
    }

    fn decide(&mut self, ship: &Ship, obs: &Observation) -> Command {
        let role = *self
            .state
            .roles
            .get(&ship.id)
            .expect("scheduler assigns every live ship a role");
        match role {
            Role::Explore => self.explore(ship, obs),
            Role::Attack => self.attack(ship, obs),
            Role::Defend => self.defend(ship, obs),
        }
    }

    /// Load persisted policy parameters from the weights directory. A
    /// missing file keeps the built-in defaults.
    pub fn load(&mut self, abs_path: &Path) -> anyhow::Result<()> {
        if abs_path.join(policy::PARAMS_FILE).exists() {
            self.params = policy::load_params(abs_path)?;
            log::info!("policy parameters loaded from {}", abs_path.display());
        }
        Ok(())
    }

    /// Inference-mode switch. Nothing to flip in a scripted policy.
    pub fn eval(&mut self) {}

    /// Device relocation hook. No numeric backend, so nothing moves.
    pub fn to_device(&mut self, _device: &str) {}
}

impl Default for Agent {
    fn default() -> Self {
        Self::new()
    }
}

/// Terminal logger setup for the match harness.
pub fn init_logging(level: simplelog::LevelFilter) {
    let _ = simplelog::SimpleLogger::init(level, simplelog::Config::default());
}
