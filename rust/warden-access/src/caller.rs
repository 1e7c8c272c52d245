use crate::{Action, Identity, Role, WardenAccessError};

/// A resolved caller: who they are and the role recorded for them, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    /// The caller's identity
    pub identity: Identity,
    /// The caller's role record, if one exists
    pub role: Option<Role>,
}

impl Caller {
    /// Pair an identity with its role
    pub fn new(identity: Identity, role: Option<Role>) -> Self {
        Self { identity, role }
    }

    /// Succeeds if this caller's role permits `action`, otherwise fails with
    /// [WardenAccessError::PermissionDenied]
    pub fn require(&self, action: Action) -> Result<(), WardenAccessError> {
        if action.permitted_for(self.role.as_ref()) {
            Ok(())
        } else {
            tracing::warn!(
                identity = %self.identity,
                role = ?self.role,
                %action,
                "Permission denied"
            );
            Err(WardenAccessError::PermissionDenied {
                identity: self.identity.clone(),
                action,
            })
        }
    }
}
