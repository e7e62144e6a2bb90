//! The stat model: individual values, effort values, nature modifiers, and
//! the permanent stat formula.
//!
//! All arithmetic is integer with floor division at each step, in the exact
//! order written. Downstream consumers compare against known reference
//! values, so there is zero tolerance for reordering or rounding changes.

use crate::errors::{StatError, StatResult};
use schema::{BaseStats, NatureData, StatType};
use serde::{Deserialize, Serialize};

pub const IV_LIMIT: u8 = 32;
pub const EV_CHANNEL_LIMIT: u16 = 255;
pub const EV_TOTAL_LIMIT: u16 = 510;

/// Storage order for the six channels, used by every per-channel loop.
pub const STAT_CHANNELS: [StatType; 6] = [
    StatType::Hp,
    StatType::Attack,
    StatType::Defense,
    StatType::SpecialAttack,
    StatType::SpecialDefense,
    StatType::Speed,
];

/// Per-channel genetic potential, fixed for the creature's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualValues {
    hp: u8,
    attack: u8,
    defense: u8,
    sp_attack: u8,
    sp_defense: u8,
    speed: u8,
}

impl IndividualValues {
    /// Build from explicit channel values, validating each against the
    /// 0..=32 range. Out-of-range values are a construction error, never
    /// clamped.
    pub fn new(
        hp: u8,
        attack: u8,
        defense: u8,
        sp_attack: u8,
        sp_defense: u8,
        speed: u8,
    ) -> StatResult<Self> {
        let values = [hp, attack, defense, sp_attack, sp_defense, speed];
        for (channel, value) in STAT_CHANNELS.iter().zip(values) {
            if value > IV_LIMIT {
                return Err(StatError::InvalidIndividualValue {
                    channel: *channel,
                    value: value as u16,
                });
            }
        }
        Ok(IndividualValues {
            hp,
            attack,
            defense,
            sp_attack,
            sp_defense,
            speed,
        })
    }

    /// Unpack the six channels from a 32-bit gene.
    ///
    /// The bit layout is non-contiguous (speed sits between defense and the
    /// special stats) and load-bearing; it must match the console layout
    /// exactly.
    pub fn from_gene(gene: u32) -> Self {
        IndividualValues {
            hp: (gene % 32) as u8,
            attack: ((gene >> 5) % 32) as u8,
            defense: ((gene >> 10) % 32) as u8,
            speed: ((gene >> 16) % 32) as u8,
            sp_attack: ((gene >> 21) % 32) as u8,
            sp_defense: ((gene >> 26) % 32) as u8,
        }
    }

    pub fn get(&self, channel: StatType) -> u8 {
        match channel {
            StatType::Hp => self.hp,
            StatType::Attack => self.attack,
            StatType::Defense => self.defense,
            StatType::SpecialAttack => self.sp_attack,
            StatType::SpecialDefense => self.sp_defense,
            StatType::Speed => self.speed,
        }
    }
}

/// Per-channel earned potential. Mutable, but every write is validated
/// against the per-channel and total caps and is atomic on failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcquiredValues {
    hp: u8,
    attack: u8,
    defense: u8,
    sp_attack: u8,
    sp_defense: u8,
    speed: u8,
}

impl AcquiredValues {
    pub fn new() -> Self {
        AcquiredValues::default()
    }

    pub fn get(&self, channel: StatType) -> u8 {
        match channel {
            StatType::Hp => self.hp,
            StatType::Attack => self.attack,
            StatType::Defense => self.defense,
            StatType::SpecialAttack => self.sp_attack,
            StatType::SpecialDefense => self.sp_defense,
            StatType::Speed => self.speed,
        }
    }

    pub fn total(&self) -> u16 {
        STAT_CHANNELS
            .iter()
            .map(|&c| self.get(c) as u16)
            .sum()
    }

    /// Set one channel, validating the state *after* substitution. On error
    /// nothing changes, and the variant tells the caller which cap was hit.
    pub fn set(&mut self, channel: StatType, value: u16) -> StatResult<()> {
        if value > EV_CHANNEL_LIMIT {
            return Err(StatError::ChannelLimitExceeded {
                channel,
                value: value as u32,
            });
        }
        let new_total = self.total() - self.get(channel) as u16 + value;
        if new_total > EV_TOTAL_LIMIT {
            return Err(StatError::TotalLimitExceeded { total: new_total });
        }
        let slot = match channel {
            StatType::Hp => &mut self.hp,
            StatType::Attack => &mut self.attack,
            StatType::Defense => &mut self.defense,
            StatType::SpecialAttack => &mut self.sp_attack,
            StatType::SpecialDefense => &mut self.sp_defense,
            StatType::Speed => &mut self.speed,
        };
        *slot = value as u8;
        Ok(())
    }

    /// Add a battle-reward delta to one channel, same validation as `set`.
    /// The sum is validated in widened arithmetic so a delta that would
    /// overflow the channel type is rejected, never wrapped.
    pub fn add(&mut self, channel: StatType, delta: u16) -> StatResult<()> {
        let value = self.get(channel) as u32 + delta as u32;
        if value > EV_CHANNEL_LIMIT as u32 {
            return Err(StatError::ChannelLimitExceeded { channel, value });
        }
        self.set(channel, value as u16)
    }
}

/// Six multiplicative nature factors: 1.1 on the favored channel, 0.9 on
/// the disfavored one, 1.0 everywhere else. HP is never touched by a
/// nature, so its factor stays 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NatureModifiers {
    factors: [f64; 6],
}

impl NatureModifiers {
    pub fn neutral() -> Self {
        NatureModifiers { factors: [1.0; 6] }
    }

    pub fn from_nature(nature: &NatureData) -> Self {
        let mut modifiers = NatureModifiers::neutral();
        if nature.is_neutral() {
            return modifiers;
        }
        if let Some(increased) = nature.increased {
            modifiers.factors[channel_index(increased)] = 1.1;
        }
        if let Some(decreased) = nature.decreased {
            modifiers.factors[channel_index(decreased)] = 0.9;
        }
        modifiers
    }

    pub fn get(&self, channel: StatType) -> f64 {
        self.factors[channel_index(channel)]
    }
}

fn channel_index(channel: StatType) -> usize {
    match channel {
        StatType::Hp => 0,
        StatType::Attack => 1,
        StatType::Defense => 2,
        StatType::SpecialAttack => 3,
        StatType::SpecialDefense => 4,
        StatType::Speed => 5,
    }
}

/// The computed six-channel stat vector. Always recomputed as a whole when
/// level, effort, or species strengths change; never patched per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermanentStats {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub sp_attack: u16,
    pub sp_defense: u16,
    pub speed: u16,
}

impl PermanentStats {
    /// Apply the permanent stat formula to all six channels.
    ///
    /// Non-HP: `((2*base + iv + ev/4) * level) / 100 + 5`, then floor of the
    /// nature-scaled value. HP: `((2*base + iv + ev/4) * level) / 100 +
    /// level + 10`, no nature. A species with base HP of exactly 1 is a
    /// fixed-HP species and always ends up with 1 HP.
    pub fn compute(
        base: &BaseStats,
        level: u8,
        ivs: &IndividualValues,
        evs: &AcquiredValues,
        nature: &NatureModifiers,
    ) -> Self {
        let channel = |stat: StatType| -> u16 {
            let core = 2 * base.get(stat) as u32
                + ivs.get(stat) as u32
                + evs.get(stat) as u32 / 4;
            let scaled = core * level as u32 / 100;
            if stat == StatType::Hp {
                (scaled + level as u32 + 10) as u16
            } else {
                let raw = scaled + 5;
                (raw as f64 * nature.get(stat)).floor() as u16
            }
        };

        let hp = if base.hp == 1 { 1 } else { channel(StatType::Hp) };

        PermanentStats {
            hp,
            attack: channel(StatType::Attack),
            defense: channel(StatType::Defense),
            sp_attack: channel(StatType::SpecialAttack),
            sp_defense: channel(StatType::SpecialDefense),
            speed: channel(StatType::Speed),
        }
    }

    pub fn get(&self, channel: StatType) -> u16 {
        match channel {
            StatType::Hp => self.hp,
            StatType::Attack => self.attack,
            StatType::Defense => self.defense,
            StatType::SpecialAttack => self.sp_attack,
            StatType::SpecialDefense => self.sp_defense,
            StatType::Speed => self.speed,
        }
    }
}
