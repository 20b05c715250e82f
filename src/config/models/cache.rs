//! Cache configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What gets recorded for a streamed answer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CachePolicy {
    /// Store the concatenated answer once the stream completes successfully
    #[default]
    FullAnswer,
    /// Store every fragment as it arrives, leaving the last one cached
    LastFragment,
}

impl fmt::Display for CachePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FullAnswer => write!(f, "full_answer"),
            Self::LastFragment => write!(f, "last_fragment"),
        }
    }
}

impl FromStr for CachePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full_answer" => Ok(Self::FullAnswer),
            "last_fragment" => Ok(Self::LastFragment),
            other => Err(format!(
                "Unknown cache policy '{}', expected full_answer or last_fragment",
                other
            )),
        }
    }
}

/// Cache configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Enable answer caching
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub policy: CachePolicy,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            policy: CachePolicy::default(),
        }
    }
}
