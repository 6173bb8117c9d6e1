use super::RResult;
use crate::common::Int;
use crate::RollError;
use rand::Rng;

/// A source of uniformly distributed die faces.
///
/// Called exactly once per elementary die face; implementations must not batch draws.
pub trait Roller {
    /// Draws a value in `1..=sides`.
    ///
    /// # Errors
    /// Returns [`RollError::Input`] if `sides < 1`.
    fn roll(&mut self, sides: Int) -> RResult<Int>;
}

impl<R: Rng> Roller for R {
    fn roll(&mut self, sides: Int) -> RResult<Int> {
        check_sides(sides)?;
        Ok(self.gen_range(1..=sides))
    }
}

pub(crate) fn check_sides(sides: Int) -> RResult<()> {
    if sides < 1 {
        Err(RollError::input("dice must have at least 1 side"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
pub(crate) use scripted::ScriptedRoller;

#[cfg(test)]
mod scripted {
    use super::*;
    use std::collections::VecDeque;

    /// Replays a fixed list of draws and records every requested side count.
    pub(crate) struct ScriptedRoller {
        draws: VecDeque<Int>,
        pub requested: Vec<Int>,
    }

    impl ScriptedRoller {
        pub fn new(draws: impl IntoIterator<Item = Int>) -> Self {
            Self {
                draws: draws.into_iter().collect(),
                requested: Vec::new(),
            }
        }

        pub fn calls(&self) -> usize {
            self.requested.len()
        }
    }

    impl Roller for ScriptedRoller {
        fn roll(&mut self, sides: Int) -> RResult<Int> {
            check_sides(sides)?;
            self.requested.push(sides);
            let value = self.draws.pop_front().expect("scripted roller ran out of draws");
            assert!(
                (1..=sides).contains(&value),
                "scripted draw {} is not a face of a d{}",
                value,
                sides
            );
            Ok(value)
        }
    }
}
