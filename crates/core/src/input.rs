use serde::{Deserialize, Serialize};
use std::io::Read;
use std::str::{FromStr, SplitWhitespace};
use tracing::debug;

use crate::error::{Error, Result};
use crate::finder::{Pair, find_pair};

/// One parsed input: the sequence to scan and the target sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub nums: Vec<i64>,
    pub target: i64,
}

impl Problem {
    pub fn new(nums: Vec<i64>, target: i64) -> Self {
        Self { nums, target }
    }

    /// Parse `n`, then `n` integers, then the target, all whitespace-separated.
    pub fn parse(input: &str) -> Result<Self> {
        let mut tokens = Tokens::new(input);

        let count: usize = tokens.next_value("element count")?;
        debug!("Reading {} values", count);

        let mut nums = Vec::with_capacity(count.min(1 << 16));
        for i in 0..count {
            nums.push(tokens.next_value_or_eof(|| format!("value {} of {}", i + 1, count))?);
        }

        let target = tokens.next_value("target")?;

        let trailing = tokens.remaining();
        if trailing > 0 {
            debug!("Ignoring {} trailing tokens after target", trailing);
        }

        Ok(Self { nums, target })
    }

    pub fn read_from<R: Read>(mut reader: R) -> Result<Self> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Self::parse(&input)
    }

    pub fn solve(&self) -> Option<Pair> {
        find_pair(&self.nums, self.target)
    }
}

impl FromStr for Problem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_whitespace(),
            position: 0,
        }
    }

    fn next_value<T: FromStr>(&mut self, expected: &'static str) -> Result<T> {
        self.next_value_or_eof(|| expected.to_string())
    }

    fn next_value_or_eof<T, F>(&mut self, describe: F) -> Result<T>
    where
        T: FromStr,
        F: FnOnce() -> String,
    {
        let token = self.inner.next().ok_or_else(|| Error::UnexpectedEof {
            expected: describe(),
        })?;
        let position = self.position;
        self.position += 1;

        token.parse().map_err(|_| Error::InvalidToken {
            position,
            token: token.to_string(),
            expected: std::any::type_name::<T>(),
        })
    }

    fn remaining(self) -> usize {
        self.inner.count()
    }
}
