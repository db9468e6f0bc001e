//! Acting user identity as supplied by the authentication collaborator.

use crate::model::record::ParseEnumError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Identity stamped into `reported_by` / `approved_by`.
pub type UserId = String;

/// Display role of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Approver,
    DataEntry,
    BasicUser,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Approver => "approver",
            Self::DataEntry => "data_entry",
            Self::BasicUser => "basic_user",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Approver => "Approver",
            Self::DataEntry => "Data Entry",
            Self::BasicUser => "User",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "approver" => Ok(Self::Approver),
            "data_entry" => Ok(Self::DataEntry),
            "basic_user" => Ok(Self::BasicUser),
            other => Err(ParseEnumError::new("role", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub location: Option<String>,
}
