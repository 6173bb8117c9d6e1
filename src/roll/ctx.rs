use super::rules::{DiceRule, Registry};
use super::{RResult, RollResult, Roller};
use crate::error::LimitError;
use crate::parse::{self, Command, Token};
use crate::{Limits, RollError};

pub type DefaultRoller = rand::prelude::ThreadRng;

/// Evaluates postfix commands with an explicit operand stack.
pub struct RollContext<R = DefaultRoller> {
    roller: R,
    registry: Registry,
    limits: Limits,
}

impl<R: Roller> RollContext<R> {
    pub fn new(roller: R, registry: Registry, limits: Limits) -> Self {
        Self {
            roller,
            registry,
            limits,
        }
    }

    pub fn with_roller(roller: R) -> Self {
        Self::new(roller, Registry::default(), Limits::default())
    }

    pub fn roller(&self) -> &R {
        &self.roller
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn into_roller(self) -> R {
        self.roller
    }

    /// Parses `input` under this context's limits and evaluates it.
    pub fn roll(&mut self, input: &str) -> RResult<RollResult> {
        let command = parse::parse_with_limits(input, &self.limits)?;
        self.eval(&command)
    }

    pub fn eval(&mut self, command: &Command) -> RResult<RollResult> {
        self.preflight(command)?;

        let mut stack: Vec<RollResult> = Vec::new();
        for token in command.postfix() {
            match token {
                Token::Number(x) => stack.push(RollResult::constant(*x)),
                Token::Dice(dice) => {
                    let rule = self.registry.resolve(dice)?;
                    tracing::debug!(rule = rule.name(), dice = %dice.raw, "rolling");
                    let result = rule.evaluate(dice, &mut self.roller, &self.limits)?;
                    stack.push(result);
                }
                Token::Operator(op) => {
                    let (right, left) = match (stack.pop(), stack.pop()) {
                        (Some(right), Some(left)) => (right, left),
                        _ => {
                            return Err(RollError::semantic(format!(
                                "operator '{}' is missing an operand",
                                op
                            )));
                        }
                    };
                    stack.push(RollResult::combine(&left, *op, &right)?);
                }
                Token::LeftParen | Token::RightParen => {
                    return Err(RollError::semantic("parenthesis in postfix sequence"));
                }
            }
        }

        match (stack.pop(), stack.is_empty()) {
            (Some(result), true) => Ok(result.with_notation(command.original())),
            _ => Err(RollError::semantic(
                "expression does not reduce to a single value",
            )),
        }
    }

    /// Rejects the whole command before any draw: limit violations, unknown dice
    /// systems and unbalanced operand/operator counts.
    fn preflight(&self, command: &Command) -> RResult<()> {
        let mut depth = 0usize;
        for token in command.postfix() {
            match token {
                Token::Number(x) => {
                    if x.unsigned_abs() > self.limits.max_modifier.unsigned_abs() {
                        return Err(LimitError::Modifier {
                            value: *x,
                            max: self.limits.max_modifier,
                        }
                        .into());
                    }
                    depth += 1;
                }
                Token::Dice(dice) => {
                    self.registry.resolve(dice)?.validate(&dice.params, &self.limits)?;
                    depth += 1;
                }
                Token::Operator(op) => {
                    if depth < 2 {
                        return Err(RollError::semantic(format!(
                            "operator '{}' is missing an operand",
                            op
                        )));
                    }
                    depth -= 1;
                }
                Token::LeftParen | Token::RightParen => {
                    return Err(RollError::semantic("parenthesis in postfix sequence"));
                }
            }
        }
        if depth != 1 {
            return Err(RollError::semantic(
                "expression does not reduce to a single value",
            ));
        }
        Ok(())
    }
}

impl Default for RollContext {
    fn default() -> Self {
        Self::with_roller(rand::thread_rng())
    }
}
