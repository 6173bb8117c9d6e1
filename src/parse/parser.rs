use super::token::Token;
use super::ParseError;
use crate::common::Operator;

/// Operator-stack entry. Only `(` and operators are ever stacked.
#[derive(Debug, Copy, Clone, PartialEq)]
enum Pending {
    Operator(Operator),
    LeftParen,
}

/// Reorders an infix token sequence into postfix form (shunting-yard).
pub struct Parser {
    output: Vec<Token>,
    operators: Vec<Pending>,
}

impl Parser {
    pub fn new() -> Self {
        Self {
            output: Vec::new(),
            operators: Vec::new(),
        }
    }

    pub fn to_postfix(mut self, tokens: Vec<Token>) -> Result<Vec<Token>, ParseError> {
        self.output.reserve(tokens.len());

        for token in tokens {
            match token {
                Token::Number(_) | Token::Dice(_) => self.output.push(token),
                Token::Operator(op) => self.push_operator(op),
                Token::LeftParen => self.operators.push(Pending::LeftParen),
                Token::RightParen => self.close_paren()?,
            }
        }

        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::Operator(op) => self.output.push(Token::Operator(op)),
                Pending::LeftParen => return Err(ParseError::MismatchedParens),
            }
        }

        tracing::trace!(
            "postfix: {}",
            self.output
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        );
        Ok(self.output)
    }

    fn push_operator(&mut self, op: Operator) {
        while let Some(&Pending::Operator(top)) = self.operators.last() {
            if top.precedence() < op.precedence() {
                break;
            }
            self.operators.pop();
            self.output.push(Token::Operator(top));
        }
        self.operators.push(Pending::Operator(op));
    }

    fn close_paren(&mut self) -> Result<(), ParseError> {
        loop {
            match self.operators.pop() {
                Some(Pending::Operator(op)) => self.output.push(Token::Operator(op)),
                Some(Pending::LeftParen) => return Ok(()),
                None => return Err(ParseError::MismatchedParens),
            }
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
