use super::RResult;
use crate::common::*;
use crate::error::LimitError;
use crate::RollError;
use std::fmt::{self, Write};

/// The outcome of evaluating a dice literal, a constant, or a combination of two results.
///
/// `rolls` holds every elementary draw in roll order. Dropped dice stay in `rolls`
/// and are only listed by index in `dropped`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollResult {
    total: Int,
    rolls: Vec<Int>,
    dropped: Vec<usize>,
    modifier: Int,
    notation: String,
    details: Vec<VariantDetail>,
}

impl RollResult {
    /// `dropped` must be sorted, without duplicates, and index into `rolls`.
    pub(crate) fn new(
        total: Int,
        rolls: Vec<Int>,
        dropped: Vec<usize>,
        notation: impl Into<String>,
    ) -> Self {
        debug_assert!(dropped.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(dropped.iter().all(|&i| i < rolls.len()));
        Self {
            total,
            rolls,
            dropped,
            modifier: 0,
            notation: notation.into(),
            details: Vec::new(),
        }
    }

    pub(crate) fn constant(value: Int) -> Self {
        Self {
            total: value,
            rolls: Vec::new(),
            dropped: Vec::new(),
            modifier: value,
            notation: value.to_string(),
            details: Vec::new(),
        }
    }

    pub(crate) fn with_metadata(mut self, metadata: VariantMetadata) -> Self {
        self.details.push(VariantDetail { offset: 0, metadata });
        self
    }

    pub(crate) fn with_notation(mut self, notation: impl Into<String>) -> Self {
        self.notation = notation.into();
        self
    }

    /// Builds a new result from `left op right`. Neither child is modified.
    pub(crate) fn combine(left: &Self, op: Operator, right: &Self) -> RResult<Self> {
        let (l, r) = (left.total, right.total);
        let total = match op {
            Operator::Add => l.checked_add(r),
            Operator::Sub => l.checked_sub(r),
            Operator::Mul => l.checked_mul(r),
            Operator::Div if r == 0 => return Err(RollError::ZeroDivision),
            Operator::Div => l.checked_div(r),
        }
        .ok_or(LimitError::Overflow)?;

        let modifier = match op {
            Operator::Add => left.modifier.checked_add(right.modifier),
            Operator::Sub => left.modifier.checked_sub(right.modifier),
            Operator::Mul | Operator::Div => Some(0),
        }
        .ok_or(LimitError::Overflow)?;

        let shift = left.rolls.len();
        let rolls = left.rolls.iter().chain(&right.rolls).copied().collect();
        let dropped = left
            .dropped
            .iter()
            .copied()
            .chain(right.dropped.iter().map(|&i| i + shift))
            .collect();
        let details = left
            .details
            .iter()
            .cloned()
            .chain(right.details.iter().map(|d| VariantDetail {
                offset: d.offset + shift,
                metadata: d.metadata.clone(),
            }))
            .collect();

        Ok(Self {
            total,
            rolls,
            dropped,
            modifier,
            notation: format!("({} {} {})", left.notation, op, right.notation),
            details,
        })
    }

    pub fn total(&self) -> Int {
        self.total
    }

    pub fn rolls(&self) -> &[Int] {
        &self.rolls
    }

    pub fn dropped(&self) -> &[usize] {
        &self.dropped
    }

    pub fn is_dropped(&self, index: usize) -> bool {
        self.dropped.binary_search(&index).is_ok()
    }

    /// Net constant contribution from `+`/`-` combination.
    pub fn modifier(&self) -> Int {
        self.modifier
    }

    pub fn notation(&self) -> &str {
        &self.notation
    }

    /// System-specific detail for each dice group that produced any, in roll order.
    pub fn metadata(&self) -> &[VariantDetail] {
        &self.details
    }
}

impl fmt::Display for RollResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.notation)?;
        let mut dropped = self.dropped.iter().peekable();
        for (i, value) in self.rolls.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if dropped.next_if_eq(&&i).is_some() {
                write!(f, "~{}~", value)?;
            } else {
                write!(f, "{}", value)?;
            }
        }
        write!(f, "] = {}", self.total)?;
        for detail in &self.details {
            write!(f, " {}", detail.metadata)?;
        }
        Ok(())
    }
}

/// Variant metadata for one dice group. `offset` is the index of the group's first roll.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantDetail {
    pub offset: usize,
    pub metadata: VariantMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VariantMetadata {
    Fudge,
    Duality(NonEmpty<DualityPair>),
    Faction(FactionRoll),
}

impl fmt::Display for VariantMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fudge => f.write_str("{fudge}"),
            Self::Duality(pairs) => {
                f.write_char('{')?;
                for (i, pair) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", pair)?;
                }
                f.write_char('}')
            }
            Self::Faction(roll) => write!(f, "{}", roll),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DualityOutcome {
    Primary,
    Secondary,
    Tie,
}

impl DualityOutcome {
    pub fn of(primary: Int, secondary: Int) -> Self {
        use std::cmp::Ordering::*;
        match primary.cmp(&secondary) {
            Greater => Self::Primary,
            Less => Self::Secondary,
            Equal => Self::Tie,
        }
    }
}

impl fmt::Display for DualityOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Primary => "PRIMARY",
            Self::Secondary => "SECONDARY",
            Self::Tie => "TIE",
        })
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DualityPair {
    pub primary: Int,
    pub secondary: Int,
    pub outcome: DualityOutcome,
}

impl DualityPair {
    pub fn new(primary: Int, secondary: Int) -> Self {
        Self {
            primary,
            secondary,
            outcome: DualityOutcome::of(primary, secondary),
        }
    }
}

impl fmt::Display for DualityPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}: {}", self.primary, self.secondary, self.outcome)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FactionProfile {
    Attack,
    Defense,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FactionSymbol {
    Crit,
    Wild,
    Hit,
    Block,
    Blank,
}

impl FactionSymbol {
    pub const fn is_success(self) -> bool {
        !matches!(self, Self::Blank)
    }
}

impl fmt::Display for FactionSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Crit => "crit",
            Self::Wild => "wild",
            Self::Hit => "hit",
            Self::Block => "block",
            Self::Blank => "blank",
        })
    }
}

/// Symbols of a faction-symbol roll, aligned with the group's rolls.
///
/// The first `base` symbols come from the requested dice, the rest are crit bonus draws.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FactionRoll {
    pub profile: FactionProfile,
    pub symbols: NonEmpty<FactionSymbol>,
    pub base: usize,
}

impl FactionRoll {
    pub fn successes(&self) -> usize {
        self.symbols.iter().filter(|s| s.is_success()).count()
    }

    pub fn bonus(&self) -> &[FactionSymbol] {
        &self.symbols[self.base..]
    }
}

impl fmt::Display for FactionRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbols = self
            .symbols
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{{{} ({} successes)}}", symbols, self.successes())
    }
}
