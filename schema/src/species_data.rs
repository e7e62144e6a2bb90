use crate::{AbilityId, Gender, GrowthRate, ItemId, LocationId, MoveId, SpeciesId, StatType, TimeOfDay};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Species base stat strengths. Stored as `u16` so hosts can model
/// out-of-range experimental species without truncation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub sp_attack: u16,
    pub sp_defense: u16,
    pub speed: u16,
}

impl BaseStats {
    pub fn total(&self) -> u32 {
        self.hp as u32
            + self.attack as u32
            + self.defense as u32
            + self.sp_attack as u32
            + self.sp_defense as u32
            + self.speed as u32
    }

    pub fn get(&self, stat: StatType) -> u16 {
        match stat {
            StatType::Hp => self.hp,
            StatType::Attack => self.attack,
            StatType::Defense => self.defense,
            StatType::SpecialAttack => self.sp_attack,
            StatType::SpecialDefense => self.sp_defense,
            StatType::Speed => self.speed,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Learnset {
    pub level_up: HashMap<u8, Vec<MoveId>>, // level -> moves learned at that level
}

impl Learnset {
    pub fn empty() -> Self {
        Learnset {
            level_up: HashMap::new(),
        }
    }

    pub fn learns_at_level(&self, level: u8) -> Option<&Vec<MoveId>> {
        self.level_up.get(&level)
    }
}

/// The event that opens an evolution check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvolutionTrigger {
    LevelUp,
    Trade,
    UseItem,
    Shed,
}

/// One evolution candidate's requirement record. Every field is optional:
/// an unset requirement is not checked at all, a set requirement must hold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvolutionCondition {
    pub minimum_level: Option<u8>,
    pub held_item: Option<ItemId>,
    pub used_item: Option<ItemId>,
    pub minimum_happiness: Option<u8>,
    pub minimum_beauty: Option<u8>,
    /// Required value of sign(attack - defense): -1, 0, or 1.
    pub relative_physical_stats: Option<i8>,
    pub gender: Option<Gender>,
    pub known_move: Option<MoveId>,
    pub party_species: Option<SpeciesId>,
    pub time_of_day: Option<TimeOfDay>,
    pub location: Option<LocationId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionData {
    pub evolves_into: SpeciesId,
    pub trigger: EvolutionTrigger,
    pub condition: EvolutionCondition,
}

/// A read-only species record as served by the catalog.
///
/// `gender_ratio` uses the reference encoding: -1 genderless, 0 always male,
/// 8 always female, otherwise eighths-female out of 8.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesData {
    pub id: SpeciesId,
    pub identifier: String,
    pub base_stats: BaseStats,
    pub gender_ratio: i8,
    pub growth_rate: GrowthRate,
    pub abilities: Vec<AbilityId>,
    /// Candidates in declaration order; first match wins. The catalog
    /// guarantees the evolves-into graph is acyclic.
    pub evolutions: Vec<EvolutionData>,
    pub learnset: Learnset,
}

/// One row of the 25-entry nature chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatureData {
    pub index: u8,
    pub identifier: String,
    pub increased: Option<StatType>,
    pub decreased: Option<StatType>,
}

impl NatureData {
    pub fn is_neutral(&self) -> bool {
        self.increased.is_none() && self.decreased.is_none()
    }
}
