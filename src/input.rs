/// Whitespace-separated integer input for the zero-sum problem
///
/// Format: `n m`, then `n` amounts, then `m` pairs of entity indices that
/// must end up in the same group. Line breaks carry no meaning.
use crate::union_find::{ForestError, UnionFind};
use crate::verify::{self, Imbalance, Value, Verdict, VerifyError};
use log::debug;
use std::io::Read;
use std::str::{FromStr, SplitAsciiWhitespace};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("unexpected end of input while reading {what}")]
    UnexpectedEof { what: &'static str },

    #[error("malformed {what} at token {position}: {token:?}")]
    Malformed {
        what: &'static str,
        position: usize,
        token: String,
    },

    #[error(transparent)]
    Forest(#[from] ForestError),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Sequential reader over whitespace-separated tokens
pub struct Tokens<'a> {
    inner: SplitAsciiWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(text: &'a str) -> Self {
        Tokens {
            inner: text.split_ascii_whitespace(),
            position: 0,
        }
    }

    pub fn read<T: FromStr>(&mut self, what: &'static str) -> Result<T, InputError> {
        let token = self
            .inner
            .next()
            .ok_or(InputError::UnexpectedEof { what })?;
        self.position += 1;
        token.parse().map_err(|_| InputError::Malformed {
            what,
            position: self.position,
            token: token.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub values: Vec<Value>,
    pub friendships: Vec<(i64, i64)>,
}

impl Problem {
    pub fn parse(text: &str) -> Result<Self, InputError> {
        let mut tokens = Tokens::new(text);

        let n: i64 = tokens.read("entity count")?;
        if n < 0 {
            return Err(ForestError::InvalidSize { requested: n }.into());
        }
        let m: usize = tokens.read("friendship count")?;

        let values = (0..n)
            .map(|_| tokens.read::<Value>("amount"))
            .collect::<Result<Vec<_>, _>>()?;
        let friendships = (0..m)
            .map(|_| {
                let a = tokens.read::<i64>("entity index")?;
                let b = tokens.read::<i64>("entity index")?;
                Ok((a, b))
            })
            .collect::<Result<Vec<_>, InputError>>()?;

        debug!(
            "parsed {} amounts and {} friendships",
            values.len(),
            friendships.len()
        );
        Ok(Problem {
            values,
            friendships,
        })
    }

    pub fn read_from<R: Read>(mut reader: R) -> Result<Self, InputError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    /// Build the forest and apply every friendship in order
    ///
    /// Indices are validated against the forest here, so negative ones
    /// surface as `IndexOutOfRange` like any other bad index.
    pub fn forest(&self) -> Result<UnionFind, ForestError> {
        let mut forest = UnionFind::new(self.values.len());
        for &(a, b) in &self.friendships {
            let (a, b) = (forest.index(a)?, forest.index(b)?);
            forest.union(a, b)?;
        }
        Ok(forest)
    }

    pub fn solve(&self) -> Result<Verdict, VerifyError> {
        let mut forest = self.forest()?;
        verify::verify(&mut forest, &self.values)
    }

    pub fn imbalances(&self) -> Result<Vec<Imbalance>, VerifyError> {
        let mut forest = self.forest()?;
        verify::imbalances(&mut forest, &self.values)
    }
}
