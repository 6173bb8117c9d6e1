use super::select::{dropped_indices, kept_total};
use super::*;
use crate::roll::result::VariantMetadata;

/// Fate/Fudge dice: three-sided dice read as -1, 0 or +1.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct FudgeRule;

impl DiceRule for FudgeRule {
    fn name(&self) -> &'static str {
        "fudge"
    }

    fn can_handle(&self, dice: &DiceToken) -> bool {
        dice.params.variant == Variant::Fudge
    }

    fn evaluate<R: Roller>(
        &self,
        dice: &DiceToken,
        roller: &mut R,
        limits: &Limits,
    ) -> RResult<RollResult> {
        let params = &dice.params;
        self.validate(params, limits)?;
        if params.explode {
            tracing::debug!(dice = %dice.raw, "fudge dice do not explode; ignoring '!'");
        }

        let mut rolls = Vec::with_capacity(params.count.get() as usize);
        for _ in 0..params.count.get() {
            let raw = roller.roll(3)?;
            rolls.push(raw - 2);
        }

        let dropped = dropped_indices(&rolls, params.keep_drop.as_ref());
        let total = kept_total(&rolls, &dropped);
        Ok(RollResult::new(total, rolls, dropped, dice.raw.as_str())
            .with_metadata(VariantMetadata::Fudge))
    }
}
