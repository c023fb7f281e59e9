//! Share selection strategy used by a combine

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TssError};

/// Which shares to use when more than the threshold are supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectBy {
    /// The first `threshold` shares in supplied order
    #[default]
    First,
    /// A uniformly random subset of `threshold` shares
    Sample,
    /// Every `threshold` sized subset until one verifies against its digest
    Combinations,
}

impl fmt::Display for SelectBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::First => "first",
            Self::Sample => "sample",
            Self::Combinations => "combinations",
        })
    }
}

impl FromStr for SelectBy {
    type Err = TssError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "first" => Ok(Self::First),
            "sample" => Ok(Self::Sample),
            "combinations" => Ok(Self::Combinations),
            _ => Err(TssError::argument(format!(
                "select_by must be one of first, sample, combinations (got '{s}')"
            ))),
        }
    }
}
