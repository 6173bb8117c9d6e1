mod duality;
mod faction;
mod fudge;
mod select;
mod standard;

pub use duality::DualityRule;
pub use faction::FactionRule;
pub use fudge::FudgeRule;
pub use standard::StandardRule;

use super::{RResult, RollResult, Roller};
use crate::common::*;
use crate::error::LimitError;
use crate::parse::DiceToken;
use crate::{Limits, RollError};

/// A dice-system handler.
#[enum_dispatch::enum_dispatch]
pub trait DiceRule {
    fn name(&self) -> &'static str;

    fn can_handle(&self, dice: &DiceToken) -> bool;

    /// Checks the dice against the configured ceilings. Never draws.
    fn validate(&self, dice: &DiceParams, limits: &Limits) -> RResult<()> {
        check_count(dice, limits)
    }

    /// Rolls the dice. Implementations call [`DiceRule::validate`] before the first draw.
    fn evaluate<R: Roller>(
        &self,
        dice: &DiceToken,
        roller: &mut R,
        limits: &Limits,
    ) -> RResult<RollResult>;
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[enum_dispatch::enum_dispatch(DiceRule)]
pub enum Rule {
    Duality(DualityRule),
    Fudge(FudgeRule),
    Faction(FactionRule),
    Standard(StandardRule),
}

/// Ordered set of dice rules. The first rule that can handle a dice token wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    rules: Vec<Rule>,
}

impl Registry {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn with(mut self, rule: impl Into<Rule>) -> Self {
        self.rules.push(rule.into());
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// # Errors
    /// Returns [`RollError::Internal`] when no rule accepts the token.
    pub fn resolve(&self, dice: &DiceToken) -> RResult<&Rule> {
        self.rules
            .iter()
            .find(|rule| rule.can_handle(dice))
            .ok_or_else(|| RollError::internal(format!("no dice rule can handle {:?}", dice.raw)))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::empty()
            .with(DualityRule)
            .with(FudgeRule)
            .with(FactionRule)
            .with(StandardRule)
    }
}

fn check_count(dice: &DiceParams, limits: &Limits) -> RResult<()> {
    let count = dice.count.get();
    if count > limits.max_dice {
        return Err(LimitError::DiceCount {
            count,
            max: limits.max_dice,
        }
        .into());
    }
    Ok(())
}

fn check_sides(dice: &DiceParams, limits: &Limits) -> RResult<()> {
    let sides = dice.sides.get();
    if sides > limits.max_sides {
        return Err(LimitError::Sides {
            sides,
            max: limits.max_sides,
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::test_utils::*;

    fn token(raw: &str) -> DiceToken {
        raw.parse().unwrap()
    }

    #[test]
    fn test_default_registry_resolves_every_variant() {
        let registry = Registry::default();
        assert_eq!(registry.resolve(&token("2d6")).unwrap().name(), "standard");
        assert_eq!(registry.resolve(&token("4dF")).unwrap().name(), "fudge");
        assert_eq!(registry.resolve(&token("dh")).unwrap().name(), "duality");
        assert_eq!(registry.resolve(&token("3dMcpAtk")).unwrap().name(), "faction");
        assert_eq!(registry.resolve(&token("3dMcpDef")).unwrap().name(), "faction");
    }

    #[test]
    fn test_missing_rule_is_internal() {
        let registry = Registry::empty().with(StandardRule);
        assert!(matches!(
            registry.resolve(&token("4dF")),
            Err(RollError::Internal(_))
        ));
    }

    #[test]
    fn test_count_ceiling() {
        let limits = Limits::default();
        assert!(check_count(&dice(500, 6), &limits).is_ok());
        assert_eq!(
            check_count(&dice(501, 6), &limits),
            Err(RollError::LimitExceeded(LimitError::DiceCount { count: 501, max: 500 }))
        );
        assert_eq!(
            check_sides(&dice(1, 1001), &limits),
            Err(RollError::LimitExceeded(LimitError::Sides { sides: 1001, max: 1000 }))
        );
    }
}
