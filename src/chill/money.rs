use crate::Result;

use std::fmt;

use thiserror::Error;

use serde::{Deserialize, Serialize};

#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1} and {2}")]
    Overflow(&'static str, Money, Money),

    #[error("Underflow error while applying {0} operation on {1} and {2}")]
    Underflow(&'static str, Money, Money),

    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// Amount of CHILL, in whole units
#[derive(
    Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);

    pub fn parse(string: &str) -> Result<Self> {
        let trimmed = string.trim();

        if trimmed.is_empty() {
            Err(MoneyError::Parse("Empty amount", string.to_string()))?
        }

        let value: i64 = trimmed
            .parse()
            .map_err(|_| MoneyError::Parse("Not a whole number", string.to_string()))?;

        Ok(Money(value))
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds `other` in place. On overflow the value is left untouched.
    pub fn add(&mut self, other: &Self) -> Result {
        let sum = self.0.checked_add(other.0).ok_or_else(|| {
            if other.0 > 0 {
                MoneyError::Overflow("add", *self, *other)
            } else {
                MoneyError::Underflow("add", *self, *other)
            }
        })?;

        self.0 = sum;

        Ok(())
    }

    pub fn sub(&mut self, other: &Self) -> Result {
        let diff = self.0.checked_sub(other.0).ok_or_else(|| {
            if other.0 < 0 {
                MoneyError::Overflow("sub", *self, *other)
            } else {
                MoneyError::Underflow("sub", *self, *other)
            }
        })?;

        self.0 = diff;

        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} CHILL", self.0)
    }
}
