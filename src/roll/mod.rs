mod ctx;
mod result;
mod roller;
pub mod rules;

use crate::RollError;

type RResult<T> = Result<T, RollError>;

pub use ctx::{DefaultRoller, RollContext};
pub use result::{
    DualityOutcome, DualityPair, FactionProfile, FactionRoll, FactionSymbol, RollResult,
    VariantDetail, VariantMetadata,
};
pub use roller::Roller;
pub use rules::{DiceRule, Registry, Rule};

#[cfg(test)]
pub(crate) use roller::ScriptedRoller;
