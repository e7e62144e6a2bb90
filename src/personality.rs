//! Pure resolvers mapping a personality value onto visible traits.
//!
//! Nothing here touches the generator: given the same personality and
//! species data, every function returns the same answer forever.

use crate::prng::Prng;
use schema::Gender;
use serde::{Deserialize, Serialize};

/// Shiny threshold: the xor-folded identity must be below this.
const SHINY_THRESHOLD: u16 = 8;

/// A trainer's public and secret identity, both drawn from the session
/// stream at character creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trainer {
    pub id: u16,
    pub secret_id: u16,
}

impl Trainer {
    /// Draw a fresh trainer identity. Draw order (public id first) matters
    /// for stream alignment.
    pub fn generate(prng: &mut Prng) -> Self {
        let id = prng.draw();
        let secret_id = prng.draw();
        Trainer { id, secret_id }
    }
}

/// Resolve gender from the species gender ratio and the personality value.
///
/// The ratio uses the catalog encoding: -1 genderless, 8 female-only,
/// 0 male-only, otherwise female eighths out of 8. For mixed ratios the
/// last byte of the personality is compared against `255 * ratio / 8`.
pub fn gender(gender_ratio: i8, personality: u32) -> Gender {
    match gender_ratio {
        // -1 is the genderless encoding; any other negative is malformed
        // catalog data and degrades to the same answer.
        ..=-1 => Gender::Genderless,
        8 => Gender::Female,
        0 => Gender::Male,
        ratio => {
            let threshold = (0xFF * ratio as u32) / 8;
            if personality % 0x100 >= threshold {
                Gender::Male
            } else {
                Gender::Female
            }
        }
    }
}

/// Resolve which of a species' ability slots the creature gets.
///
/// Single-ability species always use slot 0; otherwise the lowest bit of
/// the personality picks between the first two slots.
pub fn ability_slot(personality: u32, ability_count: usize) -> usize {
    debug_assert!(ability_count >= 1);
    (ability_count - 1).min((personality % 2) as usize)
}

/// The creature's index into the 25-row nature chart.
pub fn nature_index(personality: u32) -> u8 {
    (personality % 25) as u8
}

/// Whether a creature sparkles for its trainer.
///
/// A wild creature has no trainer context and is never shiny; the check
/// only becomes meaningful once an owner is assigned.
pub fn is_shiny(personality: u32, trainer: Option<&Trainer>) -> bool {
    let Some(trainer) = trainer else {
        return false;
    };
    let p_high = (personality >> 16) as u16;
    let p_low = (personality & 0xFFFF) as u16;
    (trainer.id ^ trainer.secret_id ^ p_high ^ p_low) < SHINY_THRESHOLD
}
