//! The species catalog seam.
//!
//! The engine never owns reference data; it consults a read-only catalog
//! passed explicitly to every operation that needs species or nature rows.
//! `InMemoryCatalog` is the stock implementation, fed either directly or
//! from per-species RON files.

use crate::errors::{CatalogError, CatalogResult};
use schema::{ItemId, NatureData, SpeciesData, SpeciesId, StatType};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// Read-only lookups the engine needs. Hosts with their own data pipeline
/// implement this over whatever store they use.
pub trait SpeciesCatalog {
    fn species(&self, id: SpeciesId) -> CatalogResult<&SpeciesData>;

    /// Nature chart row by index in 0..25.
    fn nature(&self, index: u8) -> CatalogResult<&NatureData>;

    /// Whether a held item universally blocks evolution (everstone-class
    /// items). Default: no item does.
    fn blocks_evolution(&self, _item: ItemId) -> bool {
        false
    }
}

/// A catalog held entirely in memory.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    species: HashMap<SpeciesId, SpeciesData>,
    natures: Vec<NatureData>,
    evolution_blockers: HashSet<ItemId>,
}

impl InMemoryCatalog {
    /// An empty catalog with the standard 25-entry nature chart preloaded.
    pub fn new() -> Self {
        InMemoryCatalog {
            species: HashMap::new(),
            natures: standard_natures(),
            evolution_blockers: HashSet::new(),
        }
    }

    pub fn insert_species(&mut self, data: SpeciesData) {
        self.species.insert(data.id, data);
    }

    pub fn register_evolution_blocker(&mut self, item: ItemId) {
        self.evolution_blockers.insert(item);
    }

    /// Replace the nature chart, e.g. for a host with translated
    /// identifiers.
    pub fn set_natures(&mut self, natures: Vec<NatureData>) {
        self.natures = natures;
    }

    /// Parse one species record from RON text and insert it.
    pub fn insert_species_ron(&mut self, content: &str) -> Result<SpeciesId, ron::error::SpannedError> {
        let data: SpeciesData = ron::from_str(content)?;
        let id = data.id;
        self.insert_species(data);
        Ok(id)
    }

    /// Load every `.ron` species file in a directory.
    pub fn load_species_dir(&mut self, dir: &Path) -> Result<usize, Box<dyn std::error::Error>> {
        if !dir.exists() {
            return Err(format!("Species data directory not found: {}", dir.display()).into());
        }

        let mut loaded = 0;
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("ron") {
                let content = fs::read_to_string(&path)?;
                self.insert_species_ron(&content)?;
                loaded += 1;
            }
        }
        Ok(loaded)
    }
}

impl SpeciesCatalog for InMemoryCatalog {
    fn species(&self, id: SpeciesId) -> CatalogResult<&SpeciesData> {
        self.species.get(&id).ok_or(CatalogError::UnknownSpecies(id))
    }

    fn nature(&self, index: u8) -> CatalogResult<&NatureData> {
        self.natures
            .iter()
            .find(|n| n.index == index)
            .ok_or(CatalogError::UnknownNature(index))
    }

    fn blocks_evolution(&self, item: ItemId) -> bool {
        self.evolution_blockers.contains(&item)
    }
}

/// Identifiers of the 25 natures, ordered by game index.
const NATURE_NAMES: [&str; 25] = [
    "hardy", "lonely", "brave", "adamant", "naughty", "bold", "docile", "relaxed", "impish",
    "lax", "timid", "hasty", "serious", "jolly", "naive", "modest", "mild", "quiet", "bashful",
    "rash", "calm", "gentle", "sassy", "careful", "quirky",
];

/// Channels natures act on, in chart order. HP is never part of the chart.
const NATURE_CHANNELS: [StatType; 5] = [
    StatType::Attack,
    StatType::Defense,
    StatType::Speed,
    StatType::SpecialAttack,
    StatType::SpecialDefense,
];

/// The canonical nature chart: row `i` increases channel `i / 5` and
/// decreases channel `i % 5`; the diagonal rows are neutral.
pub fn standard_natures() -> Vec<NatureData> {
    NATURE_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let increased = NATURE_CHANNELS[i / 5];
            let decreased = NATURE_CHANNELS[i % 5];
            let neutral = increased == decreased;
            NatureData {
                index: i as u8,
                identifier: (*name).to_string(),
                increased: (!neutral).then_some(increased),
                decreased: (!neutral).then_some(decreased),
            }
        })
        .collect()
}
