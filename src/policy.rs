use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

pub const PARAMS_FILE: &str = "policy.json";

/// Target share of the fleet per role during one match phase.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleMix {
    pub explore: f32,
    pub attack: f32,
    pub defend: f32,
}

/// Tunable knobs of the scripted policy. Defaults reproduce the shipped
/// agent; a `policy.json` next to the weights can override them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyParams {
    pub early_mix: RoleMix,
    // Kept separate from early_mix even though the shipped values are
    // identical, so the mid game can be retuned without a code change.
    pub mid_mix: RoleMix,
    pub late_mix: RoleMix,
    pub mid_turn: u32,
    pub late_turn: u32,
    pub wounded_health: i32,
}

impl Default for PolicyParams {
    fn default() -> Self {
        let open = RoleMix {
            explore: 0.8,
            attack: 0.0,
            defend: 0.2,
        };
        Self {
            early_mix: open,
            mid_mix: open,
            late_mix: RoleMix {
                explore: 0.0,
                attack: 1.0,
                defend: 0.0,
            },
            mid_turn: 250,
            late_turn: 750,
            wounded_health: 30,
        }
    }
}

impl PolicyParams {
    pub fn mix_at(&self, turn: u32) -> RoleMix {
        if turn >= self.late_turn {
            self.late_mix
        } else if turn >= self.mid_turn {
            self.mid_mix
        } else {
            self.early_mix
        }
    }
}

pub fn load_params(dir: &Path) -> anyhow::Result<PolicyParams> {
    let file = File::open(dir.join(PARAMS_FILE))?;
    serde_json::from_reader(file).map_err(|e| anyhow::anyhow!(e))
}

pub fn save_params(dir: &Path, params: &PolicyParams) -> anyhow::Result<()> {
    serde_json::to_writer(File::create(dir.join(PARAMS_FILE))?, params)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_boundaries() {
        let params = PolicyParams::default();
        assert_eq!(params.mix_at(0), params.early_mix);
        assert_eq!(params.mix_at(249), params.early_mix);
        assert_eq!(params.mix_at(250), params.mid_mix);
        assert_eq!(params.mix_at(749), params.mid_mix);
        assert_eq!(params.mix_at(750), params.late_mix);
        assert_eq!(params.mix_at(10_000), params.late_mix);
    }

    // The shipped agent uses the same mix before and after turn 250; the
    // commented intent in its source differs, but observed behavior wins.
    #[test]
    fn mid_phase_mix_matches_early_phase() {
        let params = PolicyParams::default();
        assert_eq!(params.mix_at(100), params.mix_at(500));
    }

    #[test]
    fn params_json_round_trip() {
        let params = PolicyParams::default();
        let json = serde_json::to_string(&params).unwrap();
        let back: PolicyParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }

    #[test]
    fn save_and_load() {
        let dir = std::env::temp_dir().join("octo_z_params_test");
        std::fs::create_dir_all(&dir).unwrap();
        let mut params = PolicyParams::default();
        params.late_turn = 600;
        save_params(&dir, &params).unwrap();
        assert_eq!(load_params(&dir).unwrap(), params);
    }
}
