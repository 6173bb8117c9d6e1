use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected character at index {position}: {found:?}")]
    UnexpectedChar { found: char, position: usize },
    #[error("mismatched parentheses")]
    MismatchedParens,
}
