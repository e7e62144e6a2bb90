//! The six experience-curve families.
//!
//! These are the published integer sequences from the reference growth-rate
//! tables. Every formula uses integer arithmetic with floor division in the
//! written order; the values are compared for exact equality downstream.

use schema::GrowthRate;

pub const MAX_LEVEL: u8 = 100;

/// Total experience required to be at `level` under the given growth-rate
/// group. Levels 0 and 1 map to 0 for every group.
pub fn experience_at_level(growth: GrowthRate, level: u8) -> u32 {
    if level <= 1 {
        return 0;
    }
    let n = level.min(MAX_LEVEL) as i64;
    let cubed = n * n * n;

    let total: i64 = match growth {
        GrowthRate::Erratic => match n {
            0..=49 => cubed * (100 - n) / 50,
            50..=67 => cubed * (150 - n) / 100,
            68..=97 => cubed * ((1911 - 10 * n) / 3) / 500,
            _ => cubed * (160 - n) / 100,
        },
        GrowthRate::Fast => 4 * cubed / 5,
        GrowthRate::MediumFast => cubed,
        GrowthRate::MediumSlow => 6 * cubed / 5 - 15 * n * n + 100 * n - 140,
        GrowthRate::Slow => 5 * cubed / 4,
        GrowthRate::Fluctuating => match n {
            0..=14 => cubed * ((n + 1) / 3 + 24) / 50,
            15..=35 => cubed * (n + 14) / 50,
            _ => cubed * (n / 2 + 32) / 50,
        },
    };

    total as u32
}

/// The highest level whose experience threshold does not exceed `exp`,
/// capped at 100. Used when a creature is constructed from raw experience
/// points instead of a level.
pub fn level_at_experience(growth: GrowthRate, exp: u32) -> u8 {
    let mut level = 1;
    while level < MAX_LEVEL && experience_at_level(growth, level + 1) <= exp {
        level += 1;
    }
    level
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    #[rstest]
    #[case(GrowthRate::Erratic)]
    #[case(GrowthRate::Fast)]
    #[case(GrowthRate::MediumFast)]
    #[case(GrowthRate::MediumSlow)]
    #[case(GrowthRate::Slow)]
    #[case(GrowthRate::Fluctuating)]
    fn levels_zero_and_one_cost_nothing(#[case] growth: GrowthRate) {
        assert_eq!(experience_at_level(growth, 0), 0);
        assert_eq!(experience_at_level(growth, 1), 0);
    }

    // Level-100 totals from the published tables.
    #[rstest]
    #[case(GrowthRate::Erratic, 600_000)]
    #[case(GrowthRate::Fast, 800_000)]
    #[case(GrowthRate::MediumFast, 1_000_000)]
    #[case(GrowthRate::MediumSlow, 1_059_860)]
    #[case(GrowthRate::Slow, 1_250_000)]
    #[case(GrowthRate::Fluctuating, 1_640_000)]
    fn level_100_totals(#[case] growth: GrowthRate, #[case] expected: u32) {
        assert_eq!(experience_at_level(growth, 100), expected);
    }

    // Spot values straddling each group's breakpoints.
    #[rstest]
    #[case(GrowthRate::Erratic, 49, 120_001)] // 49³ * 51 / 50, floor
    #[case(GrowthRate::Erratic, 50, 125_000)]
    #[case(GrowthRate::Erratic, 68, 257_834)]
    #[case(GrowthRate::Erratic, 98, 583_539)]
    #[case(GrowthRate::Fluctuating, 14, 1_591)] // 14³ * (5 + 24) / 50, floor
    #[case(GrowthRate::Fluctuating, 15, 1_957)]
    #[case(GrowthRate::Fluctuating, 36, 46_656)]
    #[case(GrowthRate::MediumSlow, 2, 9)]
    #[case(GrowthRate::MediumSlow, 3, 57)]
    #[case(GrowthRate::Fast, 10, 800)]
    #[case(GrowthRate::Slow, 10, 1_250)]
    #[case(GrowthRate::MediumFast, 12, 1_728)]
    fn breakpoint_spot_values(#[case] growth: GrowthRate, #[case] level: u8, #[case] expected: u32) {
        assert_eq!(experience_at_level(growth, level), expected);
    }

    #[test]
    fn curves_are_monotonic_from_level_two() {
        for growth in GrowthRate::iter() {
            for level in 2..=100u8 {
                assert!(
                    experience_at_level(growth, level) > experience_at_level(growth, level - 1),
                    "{growth} not strictly increasing at level {level}"
                );
            }
        }
    }

    #[test]
    fn level_lookup_inverts_the_curve() {
        for growth in GrowthRate::iter() {
            for level in 1..=100u8 {
                let threshold = experience_at_level(growth, level);
                assert_eq!(level_at_experience(growth, threshold), level);
                if level < 100 {
                    // One point short of the next level stays put.
                    let next = experience_at_level(growth, level + 1);
                    assert_eq!(level_at_experience(growth, next - 1), level);
                }
            }
        }
    }

    #[test]
    fn experience_beyond_the_table_caps_at_level_100() {
        assert_eq!(level_at_experience(GrowthRate::MediumFast, 5_000_000), 100);
    }

    #[test]
    fn medium_fast_reference_progression() {
        // The curve the original eevee tests were written against.
        assert_eq!(level_at_experience(GrowthRate::MediumFast, 2_000), 12);
        assert_eq!(experience_at_level(GrowthRate::MediumFast, 13) - 2_000, 197);
    }
}
