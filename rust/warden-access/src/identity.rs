use std::fmt::{Display, Formatter};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::WardenAccessError;

/// Anything able to present the raw credential of the party behind an
/// invocation (for example a serialized certificate).
pub trait Principal {
    /// The raw credential bytes, or [WardenAccessError::IdentityUnavailable]
    /// if the execution platform cannot provide them.
    fn credential(&self) -> Result<Vec<u8>, WardenAccessError>;
}

/// The string form of a caller's credential.
///
/// An [Identity] is the standard (padded) base64 encoding of the raw
/// credential bytes, so the same credential always yields the same identity
/// and distinct credentials yield distinct identities. Identities double as
/// role record keys and as the value of the owner record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Derive the identity of a raw credential
    pub fn resolve(credential: &[u8]) -> Self {
        Self(STANDARD.encode(credential))
    }

    /// Derive the identity of whoever stands behind `principal`
    pub fn of<P>(principal: &P) -> Result<Self, WardenAccessError>
    where
        P: Principal + ?Sized,
    {
        Ok(Self::resolve(&principal.credential()?))
    }

    /// The identity as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Recover the raw credential this identity was derived from
    pub fn credential(&self) -> Result<Vec<u8>, WardenAccessError> {
        STANDARD
            .decode(&self.0)
            .map_err(|error| WardenAccessError::InvalidIdentity(format!("{}: {error}", self.0)))
    }
}

/// Shorthand for [Identity::resolve]
pub fn resolve(credential: &[u8]) -> Identity {
    Identity::resolve(credential)
}

/// Identities arriving as invocation arguments are already encoded
impl From<String> for Identity {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Identity {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<Identity> for String {
    fn from(value: Identity) -> Self {
        value.0
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Identity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
