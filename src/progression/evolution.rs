//! Evolution-trigger evaluation.
//!
//! A candidate matches when its trigger equals the firing trigger and every
//! requirement its condition record actually sets holds. Unset requirements
//! are not checked. A set requirement the environment cannot answer fails:
//! a time-of-day gate with no clock never fires.
//!
//! Candidates are evaluated in catalog declaration order and the first
//! match wins. The catalog guarantees the evolves-into graph is acyclic;
//! this module evaluates exactly one hop per call, so multi-stage chains
//! only cascade across successive level-ups.

use crate::pokemon::Pokemon;
use schema::{
    EvolutionCondition, EvolutionData, EvolutionTrigger, ItemId, LocationId, SpeciesData,
    SpeciesId, TimeOfDay,
};

/// Environment state the creature itself does not carry. Fields left `None`
/// make any evolution gated on them unsatisfiable, not vacuously true.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvolutionContext<'a> {
    pub time_of_day: Option<TimeOfDay>,
    pub location: Option<LocationId>,
    pub party: &'a [SpeciesId],
}

/// Find the first candidate of `species` matching `trigger` for this
/// creature. `used_item` is the item being consumed for UseItem triggers.
pub fn matching_evolution<'a>(
    pokemon: &Pokemon,
    species: &'a SpeciesData,
    trigger: EvolutionTrigger,
    ctx: &EvolutionContext<'_>,
    used_item: Option<ItemId>,
) -> Option<&'a EvolutionData> {
    species
        .evolutions
        .iter()
        .find(|candidate| {
            candidate.trigger == trigger
                && condition_met(pokemon, &candidate.condition, ctx, used_item)
        })
}

fn condition_met(
    pokemon: &Pokemon,
    condition: &EvolutionCondition,
    ctx: &EvolutionContext<'_>,
    used_item: Option<ItemId>,
) -> bool {
    if let Some(minimum_level) = condition.minimum_level {
        if pokemon.level() < minimum_level {
            return false;
        }
    }
    if let Some(required_item) = condition.held_item {
        if pokemon.held_item() != Some(required_item) {
            return false;
        }
    }
    if let Some(required_item) = condition.used_item {
        if used_item != Some(required_item) {
            return false;
        }
    }
    if let Some(minimum_happiness) = condition.minimum_happiness {
        if pokemon.happiness() < minimum_happiness {
            return false;
        }
    }
    if let Some(minimum_beauty) = condition.minimum_beauty {
        if pokemon.beauty() < minimum_beauty {
            return false;
        }
    }
    if let Some(required_sign) = condition.relative_physical_stats {
        let stats = pokemon.stats();
        let diff = stats.attack as i32 - stats.defense as i32;
        if diff.signum() as i8 != required_sign {
            return false;
        }
    }
    if let Some(required_gender) = condition.gender {
        if pokemon.gender() != required_gender {
            return false;
        }
    }
    if let Some(required_move) = condition.known_move {
        if !pokemon.moves().contains(&required_move) {
            return false;
        }
    }
    if let Some(required_species) = condition.party_species {
        if !ctx.party.contains(&required_species) {
            return false;
        }
    }
    if let Some(required_time) = condition.time_of_day {
        if ctx.time_of_day != Some(required_time) {
            return false;
        }
    }
    if let Some(required_location) = condition.location {
        if ctx.location != Some(required_location) {
            return false;
        }
    }
    true
}
