//! Output format of generated shares

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TssError};

/// How shares are emitted by a split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `tss~v1~{identifier}~{threshold}~{base64url}` text
    #[default]
    Human,
    /// Raw header, index and payload octets
    Binary,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Human => "human",
            Self::Binary => "binary",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = TssError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "binary" => Ok(Self::Binary),
            _ => Err(TssError::argument(format!(
                "format must be one of human, binary (got '{s}')"
            ))),
        }
    }
}
