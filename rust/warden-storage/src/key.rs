use std::fmt::{Display, Formatter};

/// Prefix of every role record key
pub const ROLE_PREFIX: &str = "role:";

/// Prefix of every application data key
pub const DATA_PREFIX: &str = "data:";

/// The single key holding the owner record
pub const OWNER_KEY: &str = "meta:owner";

/// A key in one of the ledger's logical key spaces.
///
/// Every key space gets its own reserved prefix, so an application key that
/// happens to equal an identity (or the word `owner`) lands somewhere else
/// than the role and owner records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKey<'a> {
    /// The role record of the identity
    Role(&'a str),
    /// The owner record
    Owner,
    /// An application data record
    Data(&'a str),
}

impl StateKey<'_> {
    /// The string key under which this record is stored
    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl Display for StateKey<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StateKey::Role(identity) => write!(f, "{ROLE_PREFIX}{identity}"),
            StateKey::Owner => f.write_str(OWNER_KEY),
            StateKey::Data(key) => write!(f, "{DATA_PREFIX}{key}"),
        }
    }
}
