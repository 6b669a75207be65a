use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::validation::ValidationError;

/// The closed set of answers a voter may pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteOption {
    No,
    Aws,
    Other,
}

impl VoteOption {
    pub const ALL: [VoteOption; 3] = [VoteOption::No, VoteOption::Aws, VoteOption::Other];

    pub const fn as_str(self) -> &'static str {
        match self {
            VoteOption::No => "no",
            VoteOption::Aws => "aws",
            VoteOption::Other => "other",
        }
    }
}

impl fmt::Display for VoteOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoteOption {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VoteOption::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidOption(s.to_string()))
    }
}

/// One stored vote. Records are never mutated after the write.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VoteRecord {
    pub id: Uuid,
    pub option: VoteOption,
    pub session_id: String,
}

impl VoteRecord {
    pub fn new(option: VoteOption, session_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            option,
            session_id: session_id.into(),
        }
    }
}

/// Body of `POST /vote`. Both fields are optional on the wire so that a
/// missing value surfaces as a validation error instead of a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastVoteRequest {
    #[serde(default)]
    pub vote: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl MessageResponse {
    pub fn ack(message: impl Into<String>) -> Self {
        Self { message: message.into(), status: None }
    }

    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self { message: message.into(), status: Some(status) }
    }
}
