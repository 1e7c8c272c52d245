use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The role tag granting full control
pub const ADMIN: &str = "admin";

/// The role tag granting read access
pub const CLIENT: &str = "client";

/// The role recorded for an identity.
///
/// Only `admin` and `client` carry meaning for the permission policy. Any
/// other label can be assigned and is stored verbatim, but permits nothing.
/// Labels are case sensitive: `Admin` is a custom label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// May assign roles, write and read
    Admin,
    /// May read
    Client,
    /// An application-defined label
    Custom(String),
}

impl Role {
    /// Interpret a stored or supplied role label
    pub fn parse(label: &str) -> Self {
        match label {
            ADMIN => Role::Admin,
            CLIENT => Role::Client,
            other => Role::Custom(other.to_owned()),
        }
    }

    /// Interpret the bytes of a role record. Bytes that are not UTF-8 can
    /// only ever form a custom label.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::parse(&String::from_utf8_lossy(bytes))
    }

    /// The label under which this role is stored
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => ADMIN,
            Role::Client => CLIENT,
            Role::Custom(label) => label,
        }
    }
}

impl FromStr for Role {
    type Err = Infallible;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(label))
    }
}

impl From<&str> for Role {
    fn from(label: &str) -> Self {
        Self::parse(label)
    }
}

impl From<String> for Role {
    fn from(label: String) -> Self {
        match label.as_str() {
            ADMIN => Role::Admin,
            CLIENT => Role::Client,
            _ => Role::Custom(label),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Custom(label) => label,
            known => known.as_str().to_owned(),
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
