use crate::obs::Ship;
use crate::policy::RoleMix;
use crate::state::Role;
use crate::Agent;

const ROLE_ORDER: [Role; 3] = [Role::Explore, Role::Attack, Role::Defend];

impl Agent {
    /// Ensure every live ship has exactly one role, then nudge the fleet
    /// toward the phase target mix. Greedy single pass per role; if eligible
    /// donors run out the deficit stays.
    pub fn schedule_roles(&mut self, roster: &[Ship]) {
        let state = &mut self.state;
        state.purge_missing(roster);
        for ship in roster {
            if !state.roles.contains_key(&ship.id) {
                // Bootstrap determinism only, not gameplay logic
                let role = match ship.id % 3 {
                    0 => Role::Explore,
                    1 => Role::Attack,
                    _ => Role::Defend,
                };
                state.assign_role(ship.id, role);
            }
        }
        if roster.is_empty() {
            return;
        }

        let mix = self.params.mix_at(state.turn);
        let wounded = self.params.wounded_health;
        let mut counts = [0usize; 3];
        for s in roster {
            counts[role_index(state.roles[&s.id])] += 1;
        }
        let targets =
            ROLE_ORDER.map(|role| target_count(mix, role, roster.len()));
        for (ri, role) in ROLE_ORDER.into_iter().enumerate() {
            while counts[ri] < targets[ri] {
                // First surplus ship in roster order wins; wounded ships are
                // never drafted into Attack
                let donor = roster.iter().find(|s| {
                    let ci = role_index(state.roles[&s.id]);
                    ci != ri
                        && counts[ci] > targets[ci]
                        && !(role == Role::Attack && s.health <= wounded)
                });
                let Some(donor) = donor else { break };
                let from = state.roles[&donor.id];
                log::debug!(
                    "turn {}: ship {} reassigned {:?} -> {:?}",
                    state.turn,
                    donor.id,
                    from,
                    role
                );
                counts[role_index(from)] -= 1;
                counts[ri] += 1;
                state.assign_role(donor.id, role);
            }
        }
    }
}

fn role_index(role: Role) -> usize {
    match role {
        Role::Explore => 0,
        Role::Attack => 1,
        Role::Defend => 2,
    }
}

fn target_count(mix: RoleMix, role: Role, fleet: usize) -> usize {
    let fraction = match role {
        Role::Explore => mix.explore,
        Role::Attack => mix.attack,
        Role::Defend => mix.defend,
    };
    let floored = (fraction * fleet as f32).floor() as usize;
    if fraction > 0.0 {
        floored.max(1)
    } else {
        0
    }
}
