/// Ants walking on a rod: earliest and latest time until every ant falls off
///
/// Two ants bouncing off each other is indistinguishable from them passing
/// through, so each ant can be treated independently.
use crate::input::{InputError, Tokens};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AntsError {
    #[error("ant {ant} at position {position} is outside the rod [0, {length}]")]
    PositionOutOfRange {
        ant: usize,
        position: u64,
        length: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AntsCase {
    pub length: u64,
    pub positions: Vec<u64>,
}

impl AntsCase {
    /// Returns `(earliest, latest)` time for the rod to be empty
    pub fn times(&self) -> Result<(u64, u64), AntsError> {
        let mut earliest = 0;
        let mut latest = 0;
        for (ant, &pos) in self.positions.iter().enumerate() {
            let to_far_end = self
                .length
                .checked_sub(pos)
                .ok_or(AntsError::PositionOutOfRange {
                    ant,
                    position: pos,
                    length: self.length,
                })?;
            earliest = earliest.max(pos.min(to_far_end));
            latest = latest.max(pos.max(to_far_end));
        }
        Ok((earliest, latest))
    }
}

/// Parse `cases`, then per case `length count` followed by `count` positions
pub fn parse_cases(text: &str) -> Result<Vec<AntsCase>, InputError> {
    let mut tokens = Tokens::new(text);
    let cases: usize = tokens.read("case count")?;
    (0..cases)
        .map(|_| {
            let length = tokens.read::<u64>("rod length")?;
            let count = tokens.read::<usize>("ant count")?;
            let positions = (0..count)
                .map(|_| tokens.read::<u64>("ant position"))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(AntsCase { length, positions })
        })
        .collect()
}
