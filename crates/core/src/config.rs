//! Rule switches that differ between versions of the game.

use crate::types::Rotation;

/// Rotation given to freshly spawned pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpawnRotation {
    /// Always the same rotation index
    Fixed(Rotation),
    /// Uniform over the four indices, drawn from the config seed
    Random,
}

impl SpawnRotation {
    /// Parse `"random"` or any rotation name/index accepted by [`Rotation::from_str`]
    pub fn from_str(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("random") {
            return Some(SpawnRotation::Random);
        }
        Rotation::from_str(s).map(SpawnRotation::Fixed)
    }
}

/// How often the active piece may be swapped into the hold slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoldPolicy {
    /// No limit
    Unlimited,
    /// Once per spawned piece; re-armed when the next piece spawns
    OncePerPiece,
}

impl HoldPolicy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "unlimited" => Some(HoldPolicy::Unlimited),
            "once" | "once-per-piece" => Some(HoldPolicy::OncePerPiece),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RulesConfig {
    pub spawn_rotation: SpawnRotation,
    pub hold_policy: HoldPolicy,
    /// Seed for spawn rotations when `spawn_rotation` is `Random`
    pub seed: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            spawn_rotation: SpawnRotation::Fixed(Rotation::North),
            hold_policy: HoldPolicy::Unlimited,
            seed: 1,
        }
    }
}
