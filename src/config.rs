use crate::common::{Int, UInt};

/// Hard ceilings that bound the work done for a single expression.
///
/// Every ceiling is checked before any randomness is drawn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Limits {
    /// Input is truncated to this many characters after trimming.
    pub max_input_len: usize,
    /// Maximum `count` of a single dice literal.
    pub max_dice: UInt,
    /// Maximum face count of a standard die.
    pub max_sides: UInt,
    /// Maximum magnitude of a numeric constant.
    pub max_modifier: Int,
    /// Maximum number of draws in one exploding die's chain.
    pub max_explode_depth: UInt,
}

impl Limits {
    pub const DEFAULT: Self = Self {
        max_input_len: 50,
        max_dice: 500,
        max_sides: 1000,
        max_modifier: 1000,
        max_explode_depth: 50,
    };
}

impl Default for Limits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.max_dice, 500);
        assert_eq!(limits.max_sides, 1000);
        assert_eq!(limits.max_modifier, 1000);
        assert_eq!(limits.max_input_len, 50);
        assert_eq!(limits.max_explode_depth, 50);
    }
}
