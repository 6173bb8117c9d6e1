use crate::common::{Int, UInt};
use crate::parse::ParseError;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RollError {
    #[error("{0}")]
    Input(String),
    #[error("{0}")]
    Syntax(#[from] ParseError),
    #[error("{0}")]
    LimitExceeded(#[from] LimitError),
    #[error("cannot divide by zero")]
    ZeroDivision,
    #[error("malformed expression: {0}")]
    Semantic(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl RollError {
    pub fn input(msg: impl ToString) -> Self {
        Self::Input(msg.to_string())
    }

    pub fn semantic(msg: impl ToString) -> Self {
        Self::Semantic(msg.to_string())
    }

    pub fn internal(msg: impl ToString) -> Self {
        Self::Internal(msg.to_string())
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Input(_) => ErrorKind::Input,
            Self::Syntax(_) => ErrorKind::Syntax,
            Self::LimitExceeded(_) => ErrorKind::LimitExceeded,
            Self::ZeroDivision | Self::Semantic(_) => ErrorKind::Semantic,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }
}

/// Coarse classification of a [`RollError`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    Input,
    Syntax,
    LimitExceeded,
    Semantic,
    Internal,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LimitError {
    #[error("dice count ({count}) exceeds limit of {max}")]
    DiceCount { count: UInt, max: UInt },
    #[error("dice sides ({sides}) exceeds limit of {max}")]
    Sides { sides: UInt, max: UInt },
    #[error("modifier ({value}) exceeds limit of {max}")]
    Modifier { value: Int, max: Int },
    #[error("arithmetic overflow")]
    Overflow,
}
