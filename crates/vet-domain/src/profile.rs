//! Profile enumerations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Employee gender as stored on a profile.
///
/// Wire format: `female | male | not-specified`. Legacy PascalCase spellings
/// are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    #[serde(alias = "Female")]
    Female,
    #[serde(alias = "Male")]
    Male,
    #[serde(alias = "NotSpecified")]
    NotSpecified,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
            Self::NotSpecified => "not-specified",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "female" | "Female" => Ok(Self::Female),
            "male" | "Male" => Ok(Self::Male),
            "not-specified" | "NotSpecified" => Ok(Self::NotSpecified),
            other => Err(UnknownVariant(other.to_owned())),
        }
    }
}

/// Role names a profile may carry.
///
/// Wire format: `employee | super-admin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmployeeRole {
    #[serde(alias = "Employee")]
    Employee,
    #[serde(alias = "SuperAdmin")]
    SuperAdmin,
}

impl EmployeeRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::SuperAdmin => "super-admin",
        }
    }
}

impl fmt::Display for EmployeeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmployeeRole {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "employee" | "Employee" => Ok(Self::Employee),
            "super-admin" | "SuperAdmin" => Ok(Self::SuperAdmin),
            other => Err(UnknownVariant(other.to_owned())),
        }
    }
}

/// A stored string that does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown variant `{0}`")]
pub struct UnknownVariant(pub String);
