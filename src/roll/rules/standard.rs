use super::select::{dropped_indices, kept_total};
use super::*;

/// Polyhedral dice with optional exploding and keep/drop.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct StandardRule;

impl DiceRule for StandardRule {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn can_handle(&self, dice: &DiceToken) -> bool {
        dice.params.variant == Variant::Standard
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

        let sides = Int::from(params.sides.get());
        let mut rolls = Vec::with_capacity(params.count.get() as usize);
        for _ in 0..params.count.get() {
            // One chain per die; the depth cap also bounds a d1 that always explodes.
            let mut chain = 0;
            loop {
                let value = roller.roll(sides)?;
                rolls.push(value);
                chain += 1;
                if !(params.explode && value == sides && chain < limits.max_explode_depth) {
                    break;
                }
            }
        }

        let dropped = dropped_indices(&rolls, params.keep_drop.as_ref());
        let total = kept_total(&rolls, &dropped);
        Ok(RollResult::new(total, rolls, dropped, dice.raw.as_str()))
    }
}
