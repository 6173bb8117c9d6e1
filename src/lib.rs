pub mod common;
mod config;
mod error;
pub mod parse;
pub mod roll;
pub mod systems;

pub use config::Limits;
pub use error::{ErrorKind, LimitError, RollError};
pub use parse::{parse, parse_with_limits, Command, ParseError};
pub use roll::{Registry, RollContext, RollResult, Roller};
pub use systems::HouseSystem;

/// Parses and evaluates `input` with the default limits, rule registry and
/// [`rand::thread_rng`].
///
/// # Examples
/// ```
/// let result = fatecast::roll("2d6 + 3").unwrap();
/// assert!((5..=15).contains(&result.total()));
/// assert_eq!(result.rolls().len(), 2);
/// ```
pub fn roll(input: &str) -> Result<RollResult, RollError> {
    RollContext::with_roller(rand::thread_rng()).roll(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::{FactionRoll, VariantMetadata};
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn seeded(seed: u64) -> RollContext<rand::rngs::StdRng> {
        RollContext::with_roller(rand::rngs::StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_roll() {
        let result = roll("1d20 + 4").unwrap();
        assert!((5..=24).contains(&result.total()));
        assert_eq!(result.modifier(), 4);
        assert_eq!(result.notation(), "1d20 + 4");
    }

    #[test]
    fn test_roll_errors() {
        assert_eq!(roll("").unwrap_err().kind(), ErrorKind::Input);
        assert_eq!(roll("2d6 +").unwrap_err().kind(), ErrorKind::Semantic);
        assert_eq!(roll("1d1001").unwrap_err().kind(), ErrorKind::LimitExceeded);
        assert_eq!(roll("1d6 $").unwrap_err().kind(), ErrorKind::Syntax);
    }

    #[test]
    fn test_display() {
        let result = roll("4d1kh3").unwrap();
        assert_eq!(result.to_string(), "4d1kh3 [~1~, 1, 1, 1] = 3");
    }

    #[test]
    fn test_faction_successes() {
        let result = roll("3dMcpDef").unwrap();
        assert_eq!(result.total(), 0);
        match &result.metadata()[0].metadata {
            VariantMetadata::Faction(FactionRoll { symbols, .. }) => {
                assert!(symbols.len() >= 3);
            }
            other => panic!("expected faction metadata, got {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn test_standard_totals_in_range(count in 1..=20i64, sides in 1..=100i64, seed: u64) {
            let result = seeded(seed).roll(&format!("{}d{}", count, sides)).unwrap();
            prop_assert_eq!(result.rolls().len() as i64, count);
            prop_assert!((count..=count * sides).contains(&result.total()));
        }

        #[test]
        fn test_keep_high_never_below_keep_low(seed: u64) {
            let high = seeded(seed).roll("4d6kh3").unwrap();
            let low = seeded(seed).roll("4d6kl3").unwrap();
            prop_assert_eq!(high.rolls(), low.rolls());
            prop_assert!(high.total() >= low.total());
            prop_assert_eq!(high.dropped().len(), 1);
        }

        #[test]
        fn test_deterministic_with_seed(seed: u64) {
            let a = seeded(seed).roll("3d8! + 2dh - 4dF").unwrap();
            let b = seeded(seed).roll("3d8! + 2dh - 4dF").unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
