// In: src/lib.rs

//! Pokemon Genesis Engine
//!
//! Deterministic creature generation and progression with bit-exact
//! Generation III mechanics: the linear congruential PRNG, genome
//! derivation, derived-trait resolution, the permanent stat formula, and
//! the leveling/evolution state machine. Reference data (species, natures,
//! evolutions) is injected through a read-only catalog, keeping the engine
//! pure and trivially testable.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod catalog;
pub mod errors;
pub mod genome;
pub mod personality;
pub mod pokemon;
pub mod prng;
pub mod progression;
pub mod stats;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `pokemon-genesis`
// crate, making it easy for hosts to import the most important types
// directly.

// --- From the `schema` crate ---
// Re-export all catalog record and identifier types.
pub use schema::{
    AbilityId,
    BaseStats,
    EvolutionCondition,
    EvolutionData,
    EvolutionTrigger,
    Gender,
    GrowthRate,
    ItemId,
    Learnset,
    LocationId,
    MoveId,
    NatureData,
    SpeciesData,
    SpeciesId,
    StatType,
    TimeOfDay,
};

// --- From this crate's modules (`src/`) ---

// The generator and genome derivation.
pub use genome::{derive_gene, derive_personality, GenerationMethod, Genome};
pub use prng::Prng;

// Trait resolution and trainer identity.
pub use personality::{ability_slot, gender, is_shiny, nature_index, Trainer};

// The stat model.
pub use stats::{AcquiredValues, IndividualValues, NatureModifiers, PermanentStats};

// The creature instance and its progression machinery.
pub use pokemon::Pokemon;
pub use progression::{
    experience_at_level, level_at_experience, EvolutionContext, ProgressionEvent, MAX_LEVEL,
};

// The catalog seam.
pub use catalog::{standard_natures, InMemoryCatalog, SpeciesCatalog};

// Crate-specific error and result types.
pub use errors::{
    CatalogError, CatalogResult, EngineError, EngineResult, GenomeError, GenomeResult,
    ProgressionError, ProgressionResult, StatError, StatResult,
};
