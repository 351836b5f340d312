//! Check categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HocrError;

/// A category of checks that can be skipped as a whole.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    Attributes,
    Classes,
    Metadata,
    Properties,
}

impl CheckKind {
    /// Every category, in run order.
    pub const ALL: [CheckKind; 4] = [
        CheckKind::Attributes,
        CheckKind::Classes,
        CheckKind::Metadata,
        CheckKind::Properties,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CheckKind::Attributes => "attributes",
            CheckKind::Classes => "classes",
            CheckKind::Metadata => "metadata",
            CheckKind::Properties => "properties",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckKind {
    type Err = HocrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CheckKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| HocrError::UnknownCheck { name: s.to_string() })
    }
}
