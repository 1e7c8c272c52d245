use warden_access::{Identity, Role};

use crate::WardenChaincodeError;

/// Name of the role assignment operation
pub const ASSIGN_ROLE: &str = "role-assign";

/// Older name of the role assignment operation, still accepted
pub const ASSIGN_ROLE_ALIAS: &str = "chmod";

/// Name of the data write operation
pub const SAVE: &str = "save";

/// Name of the data read operation
pub const QUERY: &str = "query";

/// A parsed invocation. Names and arities are checked once, here; handlers
/// match on the variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Record `role` for `target`
    AssignRole {
        /// The identity whose role changes
        target: Identity,
        /// The new role
        role: Role,
    },
    /// Store `value` under the application key `key`
    Save {
        /// The application key
        key: String,
        /// The value to store
        value: Vec<u8>,
    },
    /// Read the value stored under the application key `key`
    Query {
        /// The application key
        key: String,
    },
    /// A name that matches no operation
    Unrecognized {
        /// The name as invoked
        name: String,
    },
}

impl Operation {
    /// Resolve `function` and check that `args` has the right arity for it.
    ///
    /// Unknown names are not an error at this stage; they become
    /// [Operation::Unrecognized].
    pub fn parse(function: &str, args: &[String]) -> Result<Self, WardenChaincodeError> {
        Ok(match function {
            ASSIGN_ROLE | ASSIGN_ROLE_ALIAS => {
                let [target, role] = arguments(function, args)?;
                Operation::AssignRole {
                    target: Identity::from(target),
                    role: Role::from(role),
                }
            }
            SAVE => {
                let [key, value] = arguments(function, args)?;
                Operation::Save {
                    key,
                    value: value.into_bytes(),
                }
            }
            QUERY => {
                let [key] = arguments(function, args)?;
                Operation::Query { key }
            }
            name => Operation::Unrecognized {
                name: name.to_owned(),
            },
        })
    }

    /// The canonical name of this operation
    pub fn name(&self) -> &str {
        match self {
            Operation::AssignRole { .. } => ASSIGN_ROLE,
            Operation::Save { .. } => SAVE,
            Operation::Query { .. } => QUERY,
            Operation::Unrecognized { name } => name,
        }
    }
}

fn arguments<const N: usize>(
    operation: &str,
    args: &[String],
) -> Result<[String; N], WardenChaincodeError> {
    <[String; N]>::try_from(args.to_vec()).map_err(|args: Vec<String>| {
        WardenChaincodeError::InvalidArgumentCount {
            operation: operation.to_owned(),
            expected: N,
            actual: args.len(),
        }
    })
}
