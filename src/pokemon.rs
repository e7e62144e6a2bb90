//! The creature instance: genome, resolved traits, stat vector, and the
//! leveling/evolution state machine that mutates them over time.

use crate::catalog::SpeciesCatalog;
use crate::errors::{EngineResult, ProgressionError};
use crate::genome::{GenerationMethod, Genome};
use crate::personality::{self, Trainer};
use crate::prng::Prng;
use crate::progression::{
    experience_at_level, level_at_experience, matching_evolution, EvolutionContext,
    ProgressionEvent, MAX_LEVEL,
};
use crate::stats::{AcquiredValues, IndividualValues, NatureModifiers, PermanentStats};
use schema::{
    AbilityId, BaseStats, EvolutionTrigger, Gender, GrowthRate, ItemId, MoveId, SpeciesData,
    SpeciesId, StatType,
};
use serde::{Deserialize, Serialize};

const MOVE_SLOTS: usize = 4;

/// A living creature.
///
/// The genome and individual values are fixed at creation. Species
/// identity, level, experience, effort, and the computed stat vector change
/// over the creature's lifetime, always through the methods here so the
/// stat vector never goes stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    species: SpeciesId,
    identifier: String,
    base_stats: BaseStats,
    growth_rate: GrowthRate,
    genome: Genome,
    gender: Gender,
    ability: Option<AbilityId>,
    nature_index: u8,
    nature_modifiers: NatureModifiers,
    ivs: IndividualValues,
    evs: AcquiredValues,
    stats: PermanentStats,
    level: u8,
    exp: u32,
    happiness: u8,
    beauty: u8,
    held_item: Option<ItemId>,
    trainer: Option<Trainer>,
    moves: Vec<MoveId>,
}

impl Pokemon {
    /// Generate a fresh creature: derive a genome from the session stream,
    /// resolve its traits, and compute stats at `level` (clamped to 1..=100)
    /// with zero effort and the curve-exact experience for that level.
    pub fn generate<C: SpeciesCatalog>(
        catalog: &C,
        prng: &mut Prng,
        species: SpeciesId,
        level: u8,
        method: GenerationMethod,
    ) -> EngineResult<Self> {
        let genome = Genome::derive(prng, method);
        Self::from_genome(catalog, species, genome, level)
    }

    /// Generate with the level inferred from raw experience points. The
    /// given experience is kept as-is; the level is the highest one whose
    /// threshold it covers.
    pub fn generate_at_exp<C: SpeciesCatalog>(
        catalog: &C,
        prng: &mut Prng,
        species: SpeciesId,
        exp: u32,
        method: GenerationMethod,
    ) -> EngineResult<Self> {
        let genome = Genome::derive(prng, method);
        let growth = catalog.species(species)?.growth_rate;
        let level = level_at_experience(growth, exp);
        let mut pokemon = Self::from_genome(catalog, species, genome, level)?;
        pokemon.exp = exp;
        Ok(pokemon)
    }

    /// Build a creature around an existing genome: the capture/transfer
    /// path, where the genome is carried over rather than regenerated.
    pub fn from_genome<C: SpeciesCatalog>(
        catalog: &C,
        species: SpeciesId,
        genome: Genome,
        level: u8,
    ) -> EngineResult<Self> {
        let level = level.clamp(1, MAX_LEVEL);
        let data = catalog.species(species)?;
        let personality = genome.personality();

        let nature_index = personality::nature_index(personality);
        let nature = catalog.nature(nature_index)?;
        let nature_modifiers = NatureModifiers::from_nature(nature);

        let ivs = IndividualValues::from_gene(genome.gene());
        let evs = AcquiredValues::new();
        let stats = PermanentStats::compute(&data.base_stats, level, &ivs, &evs, &nature_modifiers);

        Ok(Pokemon {
            species,
            identifier: data.identifier.clone(),
            base_stats: data.base_stats.clone(),
            growth_rate: data.growth_rate,
            genome,
            gender: personality::gender(data.gender_ratio, personality),
            ability: resolve_ability(data, personality),
            nature_index,
            nature_modifiers,
            ivs,
            evs,
            stats,
            level,
            exp: experience_at_level(data.growth_rate, level),
            happiness: 0,
            beauty: 0,
            held_item: None,
            trainer: None,
            moves: initial_moves(data, level),
        })
    }

    pub fn species(&self) -> SpeciesId {
        self.species
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn base_stats(&self) -> &BaseStats {
        &self.base_stats
    }

    pub fn growth_rate(&self) -> GrowthRate {
        self.growth_rate
    }

    pub fn genome(&self) -> Genome {
        self.genome
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn ability(&self) -> Option<AbilityId> {
        self.ability
    }

    pub fn nature_index(&self) -> u8 {
        self.nature_index
    }

    pub fn ivs(&self) -> &IndividualValues {
        &self.ivs
    }

    pub fn evs(&self) -> &AcquiredValues {
        &self.evs
    }

    pub fn stats(&self) -> &PermanentStats {
        &self.stats
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn exp(&self) -> u32 {
        self.exp
    }

    pub fn happiness(&self) -> u8 {
        self.happiness
    }

    pub fn beauty(&self) -> u8 {
        self.beauty
    }

    pub fn held_item(&self) -> Option<ItemId> {
        self.held_item
    }

    pub fn trainer(&self) -> Option<&Trainer> {
        self.trainer.as_ref()
    }

    pub fn moves(&self) -> &[MoveId] {
        &self.moves
    }

    /// Experience still needed to reach the next level; 0 at level 100.
    pub fn exp_to_next_level(&self) -> u32 {
        if self.level >= MAX_LEVEL {
            return 0;
        }
        // Saturating: an evolution into a faster growth-rate group can leave
        // banked experience above the next threshold, which then costs 0.
        experience_at_level(self.growth_rate, self.level + 1).saturating_sub(self.exp)
    }

    pub fn is_shiny(&self) -> bool {
        personality::is_shiny(self.genome.personality(), self.trainer.as_ref())
    }

    pub fn set_trainer(&mut self, trainer: Trainer) {
        self.trainer = Some(trainer);
    }

    pub fn set_happiness(&mut self, happiness: u8) {
        self.happiness = happiness;
    }

    pub fn set_beauty(&mut self, beauty: u8) {
        self.beauty = beauty;
    }

    pub fn hold_item(&mut self, item: ItemId) {
        self.held_item = Some(item);
    }

    pub fn take_item(&mut self) -> Option<ItemId> {
        self.held_item.take()
    }

    /// Write one effort channel and recompute the stat vector. Validation
    /// is atomic: on a cap violation nothing changes, stats included.
    pub fn set_effort(&mut self, channel: StatType, value: u16) -> EngineResult<()> {
        self.evs.set(channel, value)?;
        self.recompute_stats();
        Ok(())
    }

    /// Add a battle-reward effort delta; same contract as `set_effort`.
    pub fn add_effort(&mut self, channel: StatType, delta: u16) -> EngineResult<()> {
        self.evs.add(channel, delta)?;
        self.recompute_stats();
        Ok(())
    }

    /// Award earned experience and run the leveling loop.
    ///
    /// Each level-up snaps experience to the curve threshold, recomputes
    /// stats, learns any level-up moves, and runs one evolution hop with the
    /// LevelUp trigger. Reaching level 100 stops the loop and discards the
    /// residual amount; below 100 the residual is banked as experience.
    pub fn gain_exp<C: SpeciesCatalog>(
        &mut self,
        catalog: &C,
        ctx: &EvolutionContext<'_>,
        amount: i64,
    ) -> EngineResult<Vec<ProgressionEvent>> {
        if amount < 0 {
            return Err(ProgressionError::InvalidExperience(amount).into());
        }
        let mut remaining = amount as u64;
        let mut events = Vec::new();

        while self.level < MAX_LEVEL {
            let needed = self.exp_to_next_level() as u64;
            if remaining < needed {
                break;
            }
            remaining -= needed;
            self.level_up(catalog, ctx, &mut events)?;
        }

        if self.level < MAX_LEVEL {
            self.exp += remaining as u32;
        }
        Ok(events)
    }

    /// Attempt an item-triggered evolution (evolution stones). Returns the
    /// new species id on success.
    pub fn evolve_with_item<C: SpeciesCatalog>(
        &mut self,
        catalog: &C,
        ctx: &EvolutionContext<'_>,
        item: ItemId,
    ) -> EngineResult<Option<SpeciesId>> {
        let Some(target) = self.evolution_target(catalog, ctx, EvolutionTrigger::UseItem, Some(item))?
        else {
            return Ok(None);
        };
        self.evolve_into(catalog, target)?;
        Ok(Some(target))
    }

    fn level_up<C: SpeciesCatalog>(
        &mut self,
        catalog: &C,
        ctx: &EvolutionContext<'_>,
        events: &mut Vec<ProgressionEvent>,
    ) -> EngineResult<()> {
        self.level += 1;
        self.exp = experience_at_level(self.growth_rate, self.level);
        self.recompute_stats();
        events.push(ProgressionEvent::LeveledUp { level: self.level });

        self.learn_level_moves(catalog, events)?;

        if let Some(target) =
            self.evolution_target(catalog, ctx, EvolutionTrigger::LevelUp, None)?
        {
            let from = self.species;
            self.evolve_into(catalog, target)?;
            events.push(ProgressionEvent::Evolved { from, to: target });
        }
        Ok(())
    }

    /// One evolution hop: blocker short-circuit, then first-match candidate
    /// selection in catalog order.
    fn evolution_target<C: SpeciesCatalog>(
        &self,
        catalog: &C,
        ctx: &EvolutionContext<'_>,
        trigger: EvolutionTrigger,
        used_item: Option<ItemId>,
    ) -> EngineResult<Option<SpeciesId>> {
        if let Some(item) = self.held_item {
            if catalog.blocks_evolution(item) {
                return Ok(None);
            }
        }
        let data = catalog.species(self.species)?;
        Ok(matching_evolution(self, data, trigger, ctx, used_item).map(|evo| evo.evolves_into))
    }

    /// Replace species identity and everything derived from it. The genome,
    /// individual values, effort, gender, and nature carry over unchanged.
    fn evolve_into<C: SpeciesCatalog>(
        &mut self,
        catalog: &C,
        target: SpeciesId,
    ) -> EngineResult<()> {
        let data = catalog.species(target)?;
        self.species = target;
        self.identifier = data.identifier.clone();
        self.base_stats = data.base_stats.clone();
        self.growth_rate = data.growth_rate;
        self.ability = resolve_ability(data, self.genome.personality());
        self.recompute_stats();
        Ok(())
    }

    fn learn_level_moves<C: SpeciesCatalog>(
        &mut self,
        catalog: &C,
        events: &mut Vec<ProgressionEvent>,
    ) -> EngineResult<()> {
        let data = catalog.species(self.species)?;
        let Some(new_moves) = data.learnset.learns_at_level(self.level) else {
            return Ok(());
        };
        for &move_id in new_moves {
            if self.moves.contains(&move_id) {
                continue;
            }
            if self.moves.len() == MOVE_SLOTS {
                self.moves.remove(0);
            }
            self.moves.push(move_id);
            events.push(ProgressionEvent::MoveLearned {
                level: self.level,
                move_id,
            });
        }
        Ok(())
    }

    fn recompute_stats(&mut self) {
        self.stats = PermanentStats::compute(
            &self.base_stats,
            self.level,
            &self.ivs,
            &self.evs,
            &self.nature_modifiers,
        );
    }
}

fn resolve_ability(data: &SpeciesData, personality: u32) -> Option<AbilityId> {
    if data.abilities.is_empty() {
        return None;
    }
    let slot = personality::ability_slot(personality, data.abilities.len());
    Some(data.abilities[slot])
}

/// The four most recently learnable moves at `level`, oldest first.
fn initial_moves(data: &SpeciesData, level: u8) -> Vec<MoveId> {
    let mut learned = Vec::new();
    for learn_level in 1..=level {
        if let Some(moves_at_level) = data.learnset.learns_at_level(learn_level) {
            for &move_id in moves_at_level {
                if !learned.contains(&move_id) {
                    learned.push(move_id);
                }
            }
        }
    }
    if learned.len() > MOVE_SLOTS {
        learned.split_off(learned.len() - MOVE_SLOTS)
    } else {
        learned
    }
}
