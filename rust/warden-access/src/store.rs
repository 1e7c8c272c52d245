use warden_storage::{LedgerState, StateKey};

use crate::{Action, Caller, Identity, Role, WardenAccessError, policy};

/// The role records and the owner record of a ledger.
///
/// A [RoleStore] wraps any [LedgerState] (usually a `&mut` borrow of the
/// invocation's ledger). Its plain accessors do no gating at all; use
/// [RoleStore::assign_role] to change a role on behalf of a caller.
#[derive(Debug)]
pub struct RoleStore<Ledger>
where
    Ledger: LedgerState,
{
    ledger: Ledger,
}

impl<Ledger> RoleStore<Ledger>
where
    Ledger: LedgerState,
{
    /// Wrap `ledger`
    pub fn new(ledger: Ledger) -> Self {
        Self { ledger }
    }

    /// The role recorded for `identity`, or `None` if it was never granted one
    pub async fn get_role(&self, identity: &Identity) -> Result<Option<Role>, WardenAccessError> {
        let record = self
            .ledger
            .get_state(&StateKey::Role(identity.as_str()).encode())
            .await?;
        Ok(record.map(|bytes| Role::from_bytes(&bytes)))
    }

    /// Record `role` for `identity`, replacing any previous role
    pub async fn set_role(&mut self, identity: &Identity, role: &Role) -> Result<(), WardenAccessError> {
        tracing::debug!(%identity, %role, "Writing role record");
        self.ledger
            .put_state(
                &StateKey::Role(identity.as_str()).encode(),
                role.as_str().as_bytes().to_vec(),
            )
            .await?;
        Ok(())
    }

    /// The owner's identity, or `None` before the ledger is bootstrapped
    pub async fn get_owner(&self) -> Result<Option<Identity>, WardenAccessError> {
        match self.ledger.get_state(&StateKey::Owner.encode()).await? {
            Some(bytes) => String::from_utf8(bytes)
                .map(|owner| Some(Identity::from(owner)))
                .map_err(|error| WardenAccessError::InvalidIdentity(format!("{error}"))),
            None => Ok(None),
        }
    }

    /// Make `identity` an admin and record it as the owner.
    ///
    /// This writes unconditionally; calling it on a bootstrapped ledger
    /// hands ownership to `identity`. Callers must check [RoleStore::get_owner]
    /// first.
    pub async fn bootstrap_owner(&mut self, identity: &Identity) -> Result<(), WardenAccessError> {
        self.set_role(identity, &Role::Admin).await?;
        self.ledger
            .put_state(
                &StateKey::Owner.encode(),
                identity.as_str().as_bytes().to_vec(),
            )
            .await?;
        tracing::info!(owner = %identity, "Bootstrapped ledger owner");
        Ok(())
    }

    /// Look up the role of `identity` and pair the two
    pub async fn caller(&self, identity: Identity) -> Result<Caller, WardenAccessError> {
        let role = self.get_role(&identity).await?;
        Ok(Caller::new(identity, role))
    }

    /// Record `role` for `target` on behalf of `caller`.
    ///
    /// Fails with [WardenAccessError::CannotModifyOwner] when `target` is the
    /// owner, whatever the caller's role, and otherwise with
    /// [WardenAccessError::PermissionDenied] unless the caller is an admin.
    pub async fn assign_role(
        &mut self,
        caller: &Caller,
        target: &Identity,
        role: Role,
    ) -> Result<(), WardenAccessError> {
        let owner = self.get_owner().await?;
        if policy::is_protected_target(target, owner.as_ref()) {
            tracing::warn!(caller = %caller.identity, %target, "Refused to modify the owner's role");
            return Err(WardenAccessError::CannotModifyOwner);
        }

        caller.require(Action::AssignRole)?;

        self.set_role(target, &role).await?;
        tracing::info!(caller = %caller.identity, %target, %role, "Assigned role");
        Ok(())
    }
}
