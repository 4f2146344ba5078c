//! Marketplace roles.

use super::ParseUserRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a session user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    /// Platform operator managing every request.
    Operator,
    /// Aircraft owner or operator ordering services.
    Client,
    /// Detailing company carrying out services.
    Provider,
}

impl UserRole {
    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Operator => "Operator",
            Self::Client => "Client",
            Self::Provider => "Provider",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for UserRole {
    type Error = ParseUserRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "operator" => Ok(Self::Operator),
            "client" => Ok(Self::Client),
            "provider" => Ok(Self::Provider),
            _ => Err(ParseUserRoleError(value.to_owned())),
        }
    }
}
