use super::token::{DiceToken, Token};
use super::ParseError;
use crate::common::*;
use crate::RollError;
use logos::Logos;
use std::fmt;

/// Raw token classes. Every pattern is anchored at the lexer's cursor, and the
/// longest match wins, so a dice literal is preferred over its leading digit run.
#[derive(Logos, Debug, Copy, Clone, PartialEq)]
pub enum TokenKind {
    #[regex(r"([1-9][0-9]*)?[dD]([1-9][0-9]*|%|[hH]|[fF]|[mM][cC][pP][aA][tT][kK]|[mM][cC][pP][dD][eE][fF])!?([kKdD][hHlL]?[1-9][0-9]*)?")]
    Dice,
    #[regex(r"[0-9]+")]
    Number,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,

    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    #[error]
    Error,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        use TokenKind::*;

        match self {
            Dice => "<dice>",
            Number => "<number>",
            Plus => "'+'",
            Minus => "'-'",
            Star => "'*'",
            Slash => "'/'",
            LeftParen => "'('",
            RightParen => "')'",
            Error => "<error>",
        }
    }

    pub fn as_operator(&self) -> Option<Operator> {
        use Operator::*;
        Some(match self {
            Self::Plus => Add,
            Self::Minus => Sub,
            Self::Star => Mul,
            Self::Slash => Div,
            _ => return None,
        })
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Turns already trimmed and truncated input into a token sequence.
///
/// Fails on the first character no pattern matches, reporting its character index.
pub fn tokenize(s: &str) -> Result<Vec<Token>, RollError> {
    let mut lexer = TokenKind::lexer(s);
    let mut tokens = Vec::new();

    while let Some(kind) = lexer.next() {
        let slice = lexer.slice();
        let token = match kind {
            TokenKind::Dice => {
                let dice: DiceToken = slice.parse().map_err(|why| {
                    RollError::internal(format!(
                        "failed to re-parse dice literal {:?}: {}",
                        slice, why
                    ))
                })?;
                Token::Dice(dice)
            }
            // Out-of-range constants saturate and are rejected by the modifier ceiling.
            TokenKind::Number => Token::Number(slice.parse().unwrap_or(Int::MAX)),
            TokenKind::LeftParen => Token::LeftParen,
            TokenKind::RightParen => Token::RightParen,
            TokenKind::Error => return Err(unexpected_char(s, lexer.span().start).into()),
            op => match op.as_operator() {
                Some(op) => Token::Operator(op),
                None => return Err(RollError::internal(format!("unhandled token {}", op))),
            },
        };
        tokens.push(token);
    }

    tracing::trace!(count = tokens.len(), "tokenized {:?}", s);
    Ok(tokens)
}

fn unexpected_char(s: &str, byte_offset: usize) -> ParseError {
    ParseError::UnexpectedChar {
        found: s[byte_offset..].chars().next().unwrap_or_default(),
        position: s[..byte_offset].chars().count(),
    }
}
