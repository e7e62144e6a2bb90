//! Genome derivation: the personality value and the 32-bit gene from which
//! individual values are unpacked.
//!
//! The three supported generation methods differ only in which draws of the
//! sequence feed the gene. Method 1 uses four consecutive draws; methods 2
//! and 4 insert one discarded draw (after the personality pair, or between
//! the two gene halves).

use crate::errors::{GenomeError, GenomeResult};
use crate::prng::Prng;
use serde::{Deserialize, Serialize};

/// How the draw sequence maps onto (personality, gene).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationMethod {
    One,
    Two,
    Four,
}

impl GenerationMethod {
    /// Parse the numeric method id used by the reference material.
    pub fn from_id(id: u8) -> GenomeResult<Self> {
        match id {
            1 => Ok(GenerationMethod::One),
            2 => Ok(GenerationMethod::Two),
            4 => Ok(GenerationMethod::Four),
            other => Err(GenomeError::InvalidMethod(other)),
        }
    }

    pub fn id(self) -> u8 {
        match self {
            GenerationMethod::One => 1,
            GenerationMethod::Two => 2,
            GenerationMethod::Four => 4,
        }
    }

    /// Total draws consumed by a full derivation under this method.
    pub fn draw_count(self) -> usize {
        match self {
            GenerationMethod::One => 4,
            GenerationMethod::Two | GenerationMethod::Four => 5,
        }
    }
}

impl Default for GenerationMethod {
    fn default() -> Self {
        GenerationMethod::Two
    }
}

/// A creature's immutable identity pair. Derived once at creation; the only
/// way it moves between creatures is an explicit copy on capture/transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genome {
    personality: u32,
    gene: u32,
}

impl Genome {
    /// Derive a genome from one contiguous draw sequence.
    ///
    /// This must stay a single sequence: deriving personality and gene with
    /// two independent calls would double-consume the personality draws and
    /// desynchronize from the published reference sequences.
    pub fn derive(prng: &mut Prng, method: GenerationMethod) -> Self {
        let personality = combine(prng.draw(), prng.draw());
        let gene = match method {
            GenerationMethod::One => combine(prng.draw(), prng.draw()),
            GenerationMethod::Two => {
                let _ = prng.draw();
                combine(prng.draw(), prng.draw())
            }
            GenerationMethod::Four => {
                let low = prng.draw();
                let _ = prng.draw();
                combine(low, prng.draw())
            }
        };
        Genome { personality, gene }
    }

    /// Rebuild a genome from stored halves (save import, capture transfer).
    pub fn from_parts(personality: u32, gene: u32) -> Self {
        Genome { personality, gene }
    }

    /// The personality value: drives gender, ability slot, nature, and
    /// shininess.
    pub fn personality(&self) -> u32 {
        self.personality
    }

    /// The 32-bit value individual values are unpacked from.
    pub fn gene(&self) -> u32 {
        self.gene
    }
}

/// Derive only a personality value (two draws).
pub fn derive_personality(prng: &mut Prng) -> u32 {
    combine(prng.draw(), prng.draw())
}

/// Derive only a gene, consuming the method's full draw sequence. The
/// personality-shaped draws are consumed as noise so that the stream stays
/// aligned with a full derivation.
pub fn derive_gene(prng: &mut Prng, method: GenerationMethod) -> u32 {
    Genome::derive(prng, method).gene
}

fn combine(low: u16, high: u16) -> u32 {
    (low as u32) | ((high as u32) << 16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GenomeError;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn reference_genome_method_two() {
        // Published PID/IV reference pair for this seed.
        let mut prng = Prng::new(0x560B9CE3);
        let genome = Genome::derive(&mut prng, GenerationMethod::Two);
        assert_eq!(genome.personality(), 0x7E482751);
        assert_eq!(genome.gene(), 0x5EE9629C);
    }

    #[rstest]
    #[case(GenerationMethod::One, 4)]
    #[case(GenerationMethod::Two, 5)]
    #[case(GenerationMethod::Four, 5)]
    fn derivation_consumes_exact_draw_count(
        #[case] method: GenerationMethod,
        #[case] draws: usize,
    ) {
        let mut derived = Prng::new(0x1A56B091);
        Genome::derive(&mut derived, method);

        let mut reference = Prng::new(0x1A56B091);
        reference.draw_n(draws);

        assert_eq!(derived.seed(), reference.seed());
        assert_eq!(method.draw_count(), draws);
    }

    #[test]
    fn methods_select_different_gene_draws() {
        // Same seed, draw sequence d0..d4. Method 1 genes from (d2, d3),
        // method 2 from (d3, d4), method 4 from (d2, d4).
        let draws = Prng::new(0xCAFE_F00D).draw_n(5);
        let gene = |lo: u16, hi: u16| (lo as u32) | ((hi as u32) << 16);

        let m1 = Genome::derive(&mut Prng::new(0xCAFE_F00D), GenerationMethod::One);
        let m2 = Genome::derive(&mut Prng::new(0xCAFE_F00D), GenerationMethod::Two);
        let m4 = Genome::derive(&mut Prng::new(0xCAFE_F00D), GenerationMethod::Four);

        let personality = gene(draws[0], draws[1]);
        assert_eq!(m1.personality(), personality);
        assert_eq!(m2.personality(), personality);
        assert_eq!(m4.personality(), personality);

        assert_eq!(m1.gene(), gene(draws[2], draws[3]));
        assert_eq!(m2.gene(), gene(draws[3], draws[4]));
        assert_eq!(m4.gene(), gene(draws[2], draws[4]));
    }

    #[test]
    fn standalone_gene_stays_stream_aligned() {
        let mut a = Prng::new(0x560B9CE3);
        let mut b = Prng::new(0x560B9CE3);
        let gene = derive_gene(&mut a, GenerationMethod::Two);
        let genome = Genome::derive(&mut b, GenerationMethod::Two);
        assert_eq!(gene, genome.gene());
        assert_eq!(a.seed(), b.seed());
    }

    #[rstest]
    #[case(0)]
    #[case(3)]
    #[case(5)]
    #[case(255)]
    fn invalid_method_ids_are_rejected(#[case] id: u8) {
        assert_eq!(
            GenerationMethod::from_id(id),
            Err(GenomeError::InvalidMethod(id))
        );
    }

    #[test]
    fn valid_method_ids_round_trip() {
        for id in [1u8, 2, 4] {
            assert_eq!(GenerationMethod::from_id(id).unwrap().id(), id);
        }
    }
}
