// Pokemon Genesis Schema - Shared type definitions
// This crate contains the identifier newtypes, enums, and catalog record
// structs shared between the engine crate and any host application
// (battle engine, capture system, save-game serializer).

// Re-export the main types
pub use pokemon_types::*;
pub use species_data::*;

pub mod pokemon_types;
pub mod species_data;
