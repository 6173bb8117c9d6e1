mod error;
mod lexer;
mod parser;
mod token;

pub use error::ParseError;
pub use lexer::{tokenize, TokenKind};
pub use parser::Parser;
pub use token::{DiceToken, ParseDiceError, Token};

use crate::{Limits, RollError};

/// A parsed expression: its postfix token sequence and the (trimmed, truncated) input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Command {
    postfix: Vec<Token>,
    original: String,
}

impl Command {
    pub fn postfix(&self) -> &[Token] {
        &self.postfix
    }

    pub fn original(&self) -> &str {
        &self.original
    }
}

pub fn parse(s: &str) -> Result<Command, RollError> {
    parse_with_limits(s, &Limits::default())
}

/// Trims and truncates `s` to `limits.max_input_len` characters, then tokenizes it and
/// converts it to postfix form.
pub fn parse_with_limits(s: &str, limits: &Limits) -> Result<Command, RollError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(RollError::input("input must be a non-empty string"));
    }

    let original = match trimmed.char_indices().nth(limits.max_input_len) {
        Some((end, _)) => {
            tracing::debug!(max = limits.max_input_len, "input truncated");
            trimmed[..end].trim_end()
        }
        None => trimmed,
    };

    let tokens = tokenize(original)?;
    let postfix = Parser::new().to_postfix(tokens)?;
    Ok(Command {
        postfix,
        original: original.to_string(),
    })
}
