use super::*;
use crate::roll::result::{DualityPair, VariantMetadata};

/// Duality dice: `count` pairs of same-sided dice, primary then secondary.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct DualityRule;

impl DiceRule for DualityRule {
    fn name(&self) -> &'static str {
        "duality"
    }

    fn can_handle(&self, dice: &DiceToken) -> bool {
        dice.params.variant == Variant::Duality
    }

    fn validate(&self, dice: &DiceParams, limits: &Limits) -> RResult<()> {
        check_count(dice, limits)?;
        check_sides(dice, limits)
    }

    fn evaluate<R: Roller>(
        &self,
        dice: &DiceToken,
        roller: &mut R,
        limits: &Limits,
    ) -> RResult<RollResult> {
        let params = &dice.params;
        self.validate(params, limits)?;
        if params.explode || params.keep_drop.is_some() {
            tracing::debug!(dice = %dice.raw, "duality dice take no suffixes; ignoring them");
        }

        let sides = Int::from(params.sides.get());
        let pair_count = params.count.get() as usize;
        let mut rolls = Vec::with_capacity(pair_count * 2);
        let mut pairs = Vec::with_capacity(pair_count);
        for _ in 0..pair_count {
            let primary = roller.roll(sides)?;
            let secondary = roller.roll(sides)?;
            rolls.push(primary);
            rolls.push(secondary);
            pairs.push(DualityPair::new(primary, secondary));
        }

        let total = rolls.iter().sum();
        let pairs = NonEmpty::try_from_vec(pairs)
            .map_err(|_| RollError::internal("duality roll produced no pairs"))?;
        Ok(RollResult::new(total, rolls, Vec::new(), dice.raw.as_str())
            .with_metadata(VariantMetadata::Duality(pairs)))
    }
}
