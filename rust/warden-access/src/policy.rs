//! Pure permission decisions.
//!
//! Every function here looks only at its arguments. A caller without a role
//! record is passed as `None` and is denied everything a role is needed for.

use std::fmt::{Display, Formatter};

use crate::{Identity, Role};

/// Whether `role` may assign roles to other identities
pub fn can_assign_roles(role: Option<&Role>) -> bool {
    matches!(role, Some(Role::Admin))
}

/// Whether `role` may write application data
pub fn can_write(role: Option<&Role>) -> bool {
    matches!(role, Some(Role::Admin))
}

/// Whether `role` may read application data
pub fn can_read(role: Option<&Role>) -> bool {
    matches!(role, Some(Role::Admin | Role::Client))
}

/// Whether `target` is shielded from role assignment because it is the owner
pub fn is_protected_target(target: &Identity, owner: Option<&Identity>) -> bool {
    owner.is_some_and(|owner| owner == target)
}

/// Something a caller may attempt on the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Change the role of another identity
    AssignRole,
    /// Save a data record
    Write,
    /// Query a data record
    Read,
}

impl Action {
    /// Whether `role` permits this action
    pub fn permitted_for(self, role: Option<&Role>) -> bool {
        match self {
            Action::AssignRole => can_assign_roles(role),
            Action::Write => can_write(role),
            Action::Read => can_read(role),
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Action::AssignRole => "assign roles",
            Action::Write => "write data",
            Action::Read => "read data",
        })
    }
}
