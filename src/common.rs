use std::fmt::{self, Write};
use std::num::NonZeroU32;
pub use vec1::vec1;

pub type Int = i64;
pub type UInt = u32;
pub type NonZeroUInt = NonZeroU32;

pub type NonEmpty<T> = vec1::Vec1<T>;

/// A binary arithmetic operator. All four are left-associative.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    pub const fn from_char(c: char) -> Option<Self> {
        Some(match c {
            '+' => Self::Add,
            '-' => Self::Sub,
            '*' => Self::Mul,
            '/' => Self::Div,
            _ => return None,
        })
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.as_char())
    }
}

/// The dice system a dice literal belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    Standard,
    Fudge,
    Duality,
    FactionAttack,
    FactionDefense,
}

impl Variant {
    /// Resolves a system tag (the part after `d`) to its variant, case-insensitively.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Some(match tag.to_ascii_lowercase().as_str() {
            "f" => Self::Fudge,
            "h" => Self::Duality,
            "mcpatk" => Self::FactionAttack,
            "mcpdef" => Self::FactionDefense,
            _ => return None,
        })
    }

    /// The implied face count of a tagged system; `None` for standard dice.
    pub fn fixed_sides(self) -> Option<NonZeroUInt> {
        let sides = match self {
            Self::Standard => return None,
            Self::Fudge => 3,
            Self::Duality => 12,
            Self::FactionAttack | Self::FactionDefense => 8,
        };
        NonZeroUInt::new(sides)
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Standard => "",
            Self::Fudge => "F",
            Self::Duality => "h",
            Self::FactionAttack => "McpAtk",
            Self::FactionDefense => "McpDef",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeepDropMode {
    Keep,
    Drop,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    High,
    Low,
}

/// A keep/drop suffix such as `kh1` or `dl2`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeepDrop {
    pub mode: KeepDropMode,
    pub direction: Direction,
    pub n: NonZeroUInt,
}

impl KeepDrop {
    /// Builds a spec, defaulting the direction to high for keep and low for drop.
    pub fn new(mode: KeepDropMode, direction: Option<Direction>, n: NonZeroUInt) -> Self {
        let direction = direction.unwrap_or(match mode {
            KeepDropMode::Keep => Direction::High,
            KeepDropMode::Drop => Direction::Low,
        });
        Self { mode, direction, n }
    }

    pub fn keep_high(n: NonZeroUInt) -> Self {
        Self::new(KeepDropMode::Keep, Some(Direction::High), n)
    }

    pub fn keep_low(n: NonZeroUInt) -> Self {
        Self::new(KeepDropMode::Keep, Some(Direction::Low), n)
    }

    pub fn drop_high(n: NonZeroUInt) -> Self {
        Self::new(KeepDropMode::Drop, Some(Direction::High), n)
    }

    pub fn drop_low(n: NonZeroUInt) -> Self {
        Self::new(KeepDropMode::Drop, Some(Direction::Low), n)
    }
}

impl fmt::Display for KeepDrop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match self.mode {
            KeepDropMode::Keep => 'k',
            KeepDropMode::Drop => 'd',
        };
        let direction = match self.direction {
            Direction::High => 'h',
            Direction::Low => 'l',
        };
        write!(f, "{}{}{}", mode, direction, self.n)
    }
}

/// Parsed parameters of a dice literal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiceParams {
    pub count: NonZeroUInt,
    pub sides: NonZeroUInt,
    pub variant: Variant,
    pub explode: bool,
    pub keep_drop: Option<KeepDrop>,
}

impl DiceParams {
    pub const fn new(count: NonZeroUInt, sides: NonZeroUInt, variant: Variant) -> Self {
        Self {
            count,
            sides,
            variant,
            explode: false,
            keep_drop: None,
        }
    }

    pub fn exploding(mut self) -> Self {
        self.explode = true;
        self
    }

    pub fn with_keep_drop(mut self, keep_drop: KeepDrop) -> Self {
        self.keep_drop = Some(keep_drop);
        self
    }
}

impl fmt::Display for DiceParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d", self.count)?;
        match self.variant {
            Variant::Standard => write!(f, "{}", self.sides)?,
            tagged => f.write_str(tagged.tag())?,
        }
        if self.explode {
            f.write_char('!')?;
        }
        if let Some(kd) = &self.keep_drop {
            write!(f, "{}", kd)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    pub use super::*;

    pub fn nz(x: UInt) -> NonZeroUInt {
        NonZeroUInt::new(x).unwrap()
    }

    pub fn dice(count: UInt, sides: UInt) -> DiceParams {
        DiceParams::new(nz(count), nz(sides), Variant::Standard)
    }

    pub fn tagged(count: UInt, variant: Variant) -> DiceParams {
        DiceParams::new(nz(count), variant.fixed_sides().unwrap(), variant)
    }
}
