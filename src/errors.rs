use schema::{SpeciesId, StatType};
use std::fmt;

/// Main error type for the Pokemon Genesis engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Error related to genome derivation
    Genome(GenomeError),
    /// Error related to stat construction or mutation
    Stat(StatError),
    /// Error related to experience and leveling
    Progression(ProgressionError),
    /// Error surfaced by the species catalog, propagated unchanged
    Catalog(CatalogError),
}

/// Errors related to genome derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenomeError {
    /// The requested generation method is not one of 1, 2, or 4
    InvalidMethod(u8),
}

/// Errors related to stat invariants
///
/// Per-channel and total effort caps are distinct variants so callers can
/// react differently (cap exactly at the limit vs. reject outright).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatError {
    /// An individual value outside [0, 32] at construction. Fatal, never clamped.
    InvalidIndividualValue { channel: StatType, value: u16 },
    /// An effort write would push one channel past 255. The value is wide
    /// enough to report an overflowing `add` delta faithfully.
    ChannelLimitExceeded { channel: StatType, value: u32 },
    /// An effort write would push the six-channel total past 510
    TotalLimitExceeded { total: u16 },
}

/// Errors related to experience gain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressionError {
    /// A negative experience delta; experience is monotonically non-decreasing
    InvalidExperience(i64),
}

/// Errors surfaced by the species catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogError {
    /// The specified species was not found in the catalog
    UnknownSpecies(SpeciesId),
    /// The specified nature index was not found in the catalog
    UnknownNature(u8),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Genome(err) => write!(f, "Genome error: {}", err),
            EngineError::Stat(err) => write!(f, "Stat error: {}", err),
            EngineError::Progression(err) => write!(f, "Progression error: {}", err),
            EngineError::Catalog(err) => write!(f, "Catalog error: {}", err),
        }
    }
}

impl fmt::Display for GenomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenomeError::InvalidMethod(method) => {
                write!(f, "Unsupported generation method: {} (valid: 1, 2, 4)", method)
            }
        }
    }
}

impl fmt::Display for StatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatError::InvalidIndividualValue { channel, value } => {
                write!(f, "The {} IV ({}) must be between 0 and 32 inclusive", channel, value)
            }
            StatError::ChannelLimitExceeded { channel, value } => {
                write!(f, "The {} effort value ({}) must not exceed 255", channel, value)
            }
            StatError::TotalLimitExceeded { total } => {
                write!(f, "Total effort ({}) must not exceed 510", total)
            }
        }
    }
}

impl fmt::Display for ProgressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressionError::InvalidExperience(amount) => {
                write!(f, "Earned experience must be non-negative, got {}", amount)
            }
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::UnknownSpecies(species) => write!(f, "Species not found: {}", species),
            CatalogError::UnknownNature(index) => write!(f, "Nature index not found: {}", index),
        }
    }
}

impl std::error::Error for EngineError {}
impl std::error::Error for GenomeError {}
impl std::error::Error for StatError {}
impl std::error::Error for ProgressionError {}
impl std::error::Error for CatalogError {}

impl From<GenomeError> for EngineError {
    fn from(err: GenomeError) -> Self {
        EngineError::Genome(err)
    }
}

impl From<StatError> for EngineError {
    fn from(err: StatError) -> Self {
        EngineError::Stat(err)
    }
}

impl From<ProgressionError> for EngineError {
    fn from(err: ProgressionError) -> Self {
        EngineError::Progression(err)
    }
}

impl From<CatalogError> for EngineError {
    fn from(err: CatalogError) -> Self {
        EngineError::Catalog(err)
    }
}

/// Type alias for Results using EngineError
pub type EngineResult<T> = Result<T, EngineError>;

/// Type alias for Results using GenomeError
pub type GenomeResult<T> = Result<T, GenomeError>;

/// Type alias for Results using StatError
pub type StatResult<T> = Result<T, StatError>;

/// Type alias for Results using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Type alias for Results using ProgressionError
pub type ProgressionResult<T> = Result<T, ProgressionError>;
