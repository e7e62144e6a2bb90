//! Leveling and evolution: the experience curves and the per-level-up
//! evolution check that together drive a creature's growth state machine.

pub mod evolution;
pub mod experience;

pub use evolution::{matching_evolution, EvolutionContext};
pub use experience::{experience_at_level, level_at_experience, MAX_LEVEL};

use schema::{MoveId, SpeciesId};
use serde::{Deserialize, Serialize};

/// What happened during one `gain_exp` call, in occurrence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressionEvent {
    LeveledUp { level: u8 },
    MoveLearned { level: u8, move_id: MoveId },
    Evolved { from: SpeciesId, to: SpeciesId },
}
