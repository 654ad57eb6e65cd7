use std::env;

use crate::player::STARTING_LIVES;

/// Runtime knobs read from the environment. Unparseable or out-of-range
/// values fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Fixed RNG seed for reproducible levels.
    pub seed: Option<u64>,
    pub lives: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            lives: STARTING_LIVES,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("WORLDVENTURE_SEED").and_then(|v| v.trim().parse::<u64>().ok());
        let lives = lookup("WORLDVENTURE_LIVES")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(STARTING_LIVES);
        Self { seed, lives }
    }
}
