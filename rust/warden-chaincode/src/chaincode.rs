use warden_access::{Identity, Principal, RoleStore};

use crate::{
    ChaincodeSettings, Context, DataStore, Invocation, Operation, Response, WardenChaincodeError,
};

/// The permissioned key-value chaincode. See the crate documentation for
/// the operations it answers.
#[derive(Debug, Clone, Default)]
pub struct Chaincode {
    settings: ChaincodeSettings,
}

impl Chaincode {
    /// A chaincode configured by `settings`
    pub fn new(settings: ChaincodeSettings) -> Self {
        Self { settings }
    }

    /// Make the invoking identity the owner and an admin of the ledger. The
    /// payload of a success is the caller's raw credential.
    ///
    /// Fails with [WardenChaincodeError::AlreadyInitialized] if the ledger
    /// already has an owner.
    #[tracing::instrument(skip_all)]
    pub async fn init<C>(&self, context: &mut C) -> Response
    where
        C: Context,
    {
        let response = Response::from(self.bootstrap(context).await);
        if let Response::Error { message } = &response {
            tracing::warn!(reason = %message, "Init failed");
        }
        response
    }

    /// Run `invocation` on behalf of the context's caller
    #[tracing::instrument(skip_all, fields(function = %invocation.function))]
    pub async fn invoke<C>(&self, context: &mut C, invocation: &Invocation) -> Response
    where
        C: Context,
    {
        let response = Response::from(self.dispatch(context, invocation).await);
        if let Response::Error { message } = &response {
            tracing::warn!(reason = %message, "Invocation failed");
        }
        response
    }

    async fn bootstrap<C>(&self, context: &mut C) -> Result<Vec<u8>, WardenChaincodeError>
    where
        C: Context,
    {
        let credential = context.credential()?;
        let identity = Identity::resolve(&credential);

        let mut roles = RoleStore::new(context.ledger());
        if let Some(owner) = roles.get_owner().await? {
            return Err(WardenChaincodeError::AlreadyInitialized { owner });
        }
        roles.bootstrap_owner(&identity).await?;

        Ok(credential)
    }

    async fn dispatch<C>(
        &self,
        context: &mut C,
        invocation: &Invocation,
    ) -> Result<Vec<u8>, WardenChaincodeError>
    where
        C: Context,
    {
        let operation = Operation::parse(&invocation.function, &invocation.args)?;

        if let Operation::Unrecognized { name } = &operation {
            if self.settings.strict_operations {
                return Err(WardenChaincodeError::UnknownOperation(name.clone()));
            }
            tracing::warn!(name = %name, "Ignoring unrecognized operation");
            return Ok(Vec::new());
        }

        let identity = Identity::of(&*context)?;
        let caller = RoleStore::new(context.ledger()).caller(identity).await?;
        tracing::debug!(
            caller = %caller.identity,
            role = ?caller.role,
            operation = operation.name(),
            "Resolved caller"
        );

        match operation {
            Operation::AssignRole { target, role } => {
                RoleStore::new(context.ledger())
                    .assign_role(&caller, &target, role)
                    .await?;
                Ok(Vec::new())
            }
            Operation::Save { key, value } => {
                DataStore::new(context.ledger())
                    .save(&caller, &key, value)
                    .await?;
                Ok(Vec::new())
            }
            Operation::Query { key } => DataStore::new(context.ledger()).query(&caller, &key).await,
            Operation::Unrecognized { .. } => Ok(Vec::new()),
        }
    }
}
