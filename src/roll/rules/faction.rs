use super::*;
use crate::roll::result::{FactionProfile, FactionRoll, FactionSymbol, VariantMetadata};

/// Faction-symbol dice: eight-sided dice read through a per-profile symbol table.
///
/// Each crit on a requested die adds exactly one bonus die; bonus crits add nothing.
/// The numeric total is always zero.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct FactionRule;

impl FactionRule {
    pub fn symbol(profile: FactionProfile, face: Int) -> FactionSymbol {
        use FactionSymbol::*;
        match (profile, face) {
            (_, 8) => Crit,
            (_, 7) => Wild,
            (FactionProfile::Attack, 5..=6) => Hit,
            (FactionProfile::Defense, 6) => Block,
            _ => Blank,
        }
    }
}

impl DiceRule for FactionRule {
    fn name(&self) -> &'static str {
        "faction"
    }

    fn can_handle(&self, dice: &DiceToken) -> bool {
        matches!(
            dice.params.variant,
            Variant::FactionAttack | Variant::FactionDefense
        )
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
            tracing::debug!(dice = %dice.raw, "faction dice take no suffixes; ignoring them");
        }

        let profile = match params.variant {
            Variant::FactionAttack => FactionProfile::Attack,
            _ => FactionProfile::Defense,
        };
        let sides = Int::from(params.sides.get());
        let base = params.count.get() as usize;

        let mut rolls = Vec::with_capacity(base);
        let mut symbols = Vec::with_capacity(base);
        for _ in 0..base {
            let face = roller.roll(sides)?;
            rolls.push(face);
            symbols.push(Self::symbol(profile, face));
        }

        let crits = symbols.iter().filter(|&&s| s == FactionSymbol::Crit).count();
        for _ in 0..crits {
            let face = roller.roll(sides)?;
            rolls.push(face);
            symbols.push(Self::symbol(profile, face));
        }

        let symbols = NonEmpty::try_from_vec(symbols)
            .map_err(|_| RollError::internal("faction roll produced no symbols"))?;
        Ok(RollResult::new(0, rolls, Vec::new(), dice.raw.as_str())
            .with_metadata(VariantMetadata::Faction(FactionRoll {
                profile,
                symbols,
                base,
            })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::roller::ScriptedRoller;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use FactionSymbol::*;

    fn faction(result: &RollResult) -> FactionRoll {
        match &result.metadata()[0].metadata {
            VariantMetadata::Faction(roll) => roll.clone(),
            other => panic!("expected faction metadata, got {:?}", other),
        }
    }

    fn eval(raw: &str, draws: Vec<Int>) -> (RollResult, ScriptedRoller) {
        let token: DiceToken = raw.parse().unwrap();
        let mut roller = ScriptedRoller::new(draws);
        let result = FactionRule
            .evaluate(&token, &mut roller, &Limits::default())
            .unwrap();
        (result, roller)
    }

    #[test]
    fn test_symbol_tables() {
        let attack: Vec<_> = (1..=8)
            .map(|f| FactionRule::symbol(FactionProfile::Attack, f))
            .collect();
        assert_eq!(attack, vec![Blank, Blank, Blank, Blank, Hit, Hit, Wild, Crit]);
        let defense: Vec<_> = (1..=8)
            .map(|f| FactionRule::symbol(FactionProfile::Defense, f))
            .collect();
        assert_eq!(defense, vec![Blank, Blank, Blank, Blank, Blank, Block, Wild, Crit]);
    }

    #[test]
    fn test_attack_roll() {
        let (result, roller) = eval("3dMcpAtk", vec![5, 7, 2]);
        let roll = faction(&result);
        assert_eq!(result.total(), 0);
        assert_eq!(result.rolls(), &[5, 7, 2]);
        assert_eq!(roll.symbols.to_vec(), vec![Hit, Wild, Blank]);
        assert_eq!(roll.successes(), 2);
        assert_eq!(roller.requested, vec![8, 8, 8]);
    }

    #[test]
    fn test_crit_bonus_is_one_level_deep() {
        // two crits -> two bonus dice; the bonus crit adds nothing further
        let (result, roller) = eval("3dMcpDef", vec![8, 6, 8, 8, 1]);
        let roll = faction(&result);
        assert_eq!(roller.calls(), 5);
        assert_eq!(result.rolls(), &[8, 6, 8, 8, 1]);
        assert_eq!(roll.symbols.to_vec(), vec![Crit, Block, Crit, Crit, Blank]);
        assert_eq!(roll.base, 3);
        assert_eq!(roll.bonus(), &[Crit, Blank]);
    }

    proptest! {
        #[test]
        fn test_bonus_draws_match_crits(n in 1..=40u32, seed: u64, attack: bool) {
            let raw = format!("{}dMcp{}", n, if attack { "Atk" } else { "Def" });
            let token: DiceToken = raw.parse().unwrap();
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            let result = FactionRule.evaluate(&token, &mut rng, &Limits::default()).unwrap();
            let roll = faction(&result);

            let crits = roll.symbols[..roll.base].iter().filter(|&&s| s == Crit).count();
            prop_assert_eq!(roll.base, n as usize);
            prop_assert_eq!(roll.symbols.len(), roll.base + crits);
            prop_assert_eq!(result.rolls().len(), roll.symbols.len());
            let allowed = if attack {
                [Hit, Crit, Wild, Blank]
            } else {
                [Block, Crit, Wild, Blank]
            };
            prop_assert!(roll.symbols.iter().all(|s| allowed.contains(s)));
        }
    }
}
