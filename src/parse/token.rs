use crate::common::*;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Token {
    Number(Int),
    Dice(DiceToken),
    Operator(Operator),
    LeftParen,
    RightParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(x) => fmt::Display::fmt(x, f),
            Self::Dice(d) => f.write_str(&d.raw),
            Self::Operator(op) => fmt::Display::fmt(op, f),
            Self::LeftParen => f.write_str("("),
            Self::RightParen => f.write_str(")"),
        }
    }
}

/// A dice literal: the text it was matched from plus its parsed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiceToken {
    pub raw: String,
    pub params: DiceParams,
}

impl DiceToken {
    pub fn new(raw: impl Into<String>, params: DiceParams) -> Self {
        Self {
            raw: raw.into(),
            params,
        }
    }
}

impl std::str::FromStr for DiceToken {
    type Err = ParseDiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_dice(s).map(|params| Self::new(s, params))
    }
}

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum ParseDiceError {
    #[error("cannot parse string as dice without 'd' delimiter")]
    NoDelimiter,
    #[error("invalid dice count {0:?}")]
    InvalidCount(String),
    #[error("invalid dice sides {0:?}")]
    InvalidSides(String),
    #[error("invalid keep/drop suffix {0:?}")]
    InvalidKeepDrop(String),
}

/// Parses `[count]d(<sides>|%|<tag>)[!][<k|d>[h|l]<n>]`.
///
/// Digit runs too large for [`UInt`] saturate, so they always trip the configured ceilings.
fn parse_dice(s: &str) -> Result<DiceParams, ParseDiceError> {
    let (count, rest) = s
        .split_once(|c: char| c == 'd' || c == 'D')
        .ok_or(ParseDiceError::NoDelimiter)?;
    let count = if count.is_empty() {
        1
    } else {
        parse_saturating(count).ok_or_else(|| ParseDiceError::InvalidCount(count.into()))?
    };
    let count = NonZeroUInt::new(count).ok_or_else(|| ParseDiceError::InvalidCount("0".into()))?;

    let (sides, mut rest) = split_sides(rest);

    let (variant, sides) = match sides {
        "%" => (Variant::Standard, 100),
        s if s.starts_with(|c: char| c.is_ascii_digit()) => {
            let n = parse_saturating(s).ok_or_else(|| ParseDiceError::InvalidSides(s.into()))?;
            (Variant::Standard, n)
        }
        tag => {
            let variant =
                Variant::from_tag(tag).ok_or_else(|| ParseDiceError::InvalidSides(tag.into()))?;
            let sides = variant
                .fixed_sides()
                .ok_or_else(|| ParseDiceError::InvalidSides(tag.into()))?;
            (variant, sides.get())
        }
    };
    let sides = NonZeroUInt::new(sides).ok_or_else(|| ParseDiceError::InvalidSides("0".into()))?;

    let mut params = DiceParams::new(count, sides, variant);
    if let Some(stripped) = rest.strip_prefix('!') {
        params.explode = true;
        rest = stripped;
    }
    if !rest.is_empty() {
        params.keep_drop = Some(parse_keep_drop(rest)?);
    }
    Ok(params)
}

/// Splits the sides part from the suffixes. Unknown tags run to the next `!` or the end.
fn split_sides(rest: &str) -> (&str, &str) {
    let end = if rest.starts_with('%') {
        1
    } else if rest.starts_with(|c: char| c.is_ascii_digit()) {
        rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len())
    } else {
        let lower = rest.to_ascii_lowercase();
        ["mcpatk", "mcpdef", "f", "h"]
            .iter()
            .find(|tag| lower.starts_with(*tag))
            .map_or_else(|| rest.find('!').unwrap_or(rest.len()), |tag| tag.len())
    };
    rest.split_at(end)
}

fn parse_keep_drop(s: &str) -> Result<KeepDrop, ParseDiceError> {
    let invalid = || ParseDiceError::InvalidKeepDrop(s.into());
    let mut chars = s.chars();
    let mode = match chars.next().map(|c| c.to_ascii_lowercase()) {
        Some('k') => KeepDropMode::Keep,
        Some('d') => KeepDropMode::Drop,
        _ => return Err(invalid()),
    };
    let rest = chars.as_str();
    let (direction, digits) = match rest.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('h') => (Some(Direction::High), &rest[1..]),
        Some('l') => (Some(Direction::Low), &rest[1..]),
        _ => (None, rest),
    };
    let n = parse_saturating(digits)
        .and_then(NonZeroUInt::new)
        .ok_or_else(invalid)?;
    Ok(KeepDrop::new(mode, direction, n))
}

fn parse_saturating(digits: &str) -> Option<UInt> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits.parse().unwrap_or(UInt::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::test_utils::*;

    fn check(s: &str, expected: DiceParams) {
        let token: DiceToken = s.parse().unwrap();
        assert_eq!(token.raw, s);
        assert_eq!(token.params, expected);
    }

    #[test]
    fn test_dice_from_str() {
        check("1d20", dice(1, 20));
        check("d20", dice(1, 20));
        check("14d4", dice(14, 4));
        check("2d%", dice(2, 100));
        check("1d6!", dice(1, 6).exploding());
        let kh3 = KeepDrop::keep_high(nz(3));
        check("4d6!kh3", dice(4, 6).exploding().with_keep_drop(kh3));
        check("2d20k1", dice(2, 20).with_keep_drop(KeepDrop::keep_high(nz(1))));
        check("4d6d1", dice(4, 6).with_keep_drop(KeepDrop::drop_low(nz(1))));
        check("4d6dh1", dice(4, 6).with_keep_drop(KeepDrop::drop_high(nz(1))));
        check("3D8KL2", dice(3, 8).with_keep_drop(KeepDrop::keep_low(nz(2))));
    }

    #[test]
    fn test_tagged_dice_from_str() {
        check("dh", tagged(1, Variant::Duality));
        check("4dF", tagged(4, Variant::Fudge));
        let kh2 = KeepDrop::keep_high(nz(2));
        check("4dFkh2", tagged(4, Variant::Fudge).with_keep_drop(kh2));
        check("5dMcpDef", tagged(5, Variant::FactionDefense));
        check("3dmcpatk", tagged(3, Variant::FactionAttack));
    }

    #[test]
    fn test_dice_from_str_errors() {
        assert_eq!("1".parse::<DiceToken>(), Err(ParseDiceError::NoDelimiter));
        assert_eq!(
            "2dx".parse::<DiceToken>(),
            Err(ParseDiceError::InvalidSides("x".into()))
        );
        assert_eq!(
            "0d6".parse::<DiceToken>(),
            Err(ParseDiceError::InvalidCount("0".into()))
        );
        assert_eq!(
            "2d6k".parse::<DiceToken>(),
            Err(ParseDiceError::InvalidKeepDrop("k".into()))
        );
    }

    #[test]
    fn test_oversized_digits_saturate() {
        let token: DiceToken = "99999999999d6".parse().unwrap();
        assert_eq!(token.params.count.get(), UInt::MAX);
    }
}
