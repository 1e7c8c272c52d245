use anyhow::Result;
use pretty_assertions::assert_eq;
use warden_access::{Role, RoleStore, resolve};
use warden_chaincode::{Chaincode, Engine, Invocation, Response};
use warden_storage::{FileSystemLedger, MeasuredLedger, MemoryLedger};

fn creator(name: &str) -> Option<Vec<u8>> {
    Some(name.as_bytes().to_vec())
}

fn identity(name: &str) -> String {
    resolve(name.as_bytes()).to_string()
}

fn empty() -> Response {
    Response::success(Vec::new())
}

async fn bootstrapped(owner: &str) -> (Engine<MemoryLedger>, MemoryLedger) {
    let ledger = MemoryLedger::default();
    let engine = Engine::new(Chaincode::default(), ledger.clone());
    assert_eq!(
        engine.init(creator(owner)).await,
        Response::success(owner.as_bytes().to_vec())
    );
    (engine, ledger)
}

#[tokio::test]
async fn it_enforces_the_owner_admin_client_hierarchy() -> Result<()> {
    let (engine, _ledger) = bootstrapped("A").await;

    assert_eq!(
        engine
            .invoke(
                creator("A"),
                &Invocation::new("role-assign", [identity("B"), "client".into()])
            )
            .await,
        empty()
    );

    let denied = engine
        .invoke(creator("B"), &Invocation::new("save", ["k", "v"]))
        .await;
    assert_eq!(
        denied.message(),
        Some(format!("Permission denied: {} may not write data", identity("B")).as_str())
    );

    assert_eq!(
        engine
            .invoke(creator("A"), &Invocation::new("save", ["k", "v"]))
            .await,
        empty()
    );

    assert_eq!(
        engine
            .invoke(creator("B"), &Invocation::new("query", ["k"]))
            .await,
        Response::success(b"v".to_vec())
    );

    assert_eq!(
        engine
            .invoke(
                creator("B"),
                &Invocation::new("role-assign", [identity("A"), "client".into()])
            )
            .await
            .message(),
        Some("Cannot modify the role of the owner")
    );

    Ok(())
}

#[tokio::test]
async fn it_never_changes_the_owner_role() -> Result<()> {
    let (engine, ledger) = bootstrapped("A").await;
    engine
        .invoke(
            creator("A"),
            &Invocation::new("role-assign", [identity("C"), "admin".into()]),
        )
        .await;

    for caller in ["A", "C", "stranger"] {
        for role in ["client", "admin", "auditor"] {
            let response = engine
                .invoke(
                    creator(caller),
                    &Invocation::new("chmod", [identity("A"), role.into()]),
                )
                .await;
            assert_eq!(response.message(), Some("Cannot modify the role of the owner"));
        }
    }

    let roles = RoleStore::new(ledger);
    assert_eq!(roles.get_role(&resolve(b"A")).await?, Some(Role::Admin));
    assert_eq!(roles.get_owner().await?, Some(resolve(b"A")));
    Ok(())
}

#[tokio::test]
async fn it_lets_admins_assign_any_label() -> Result<()> {
    let (engine, ledger) = bootstrapped("A").await;

    for (target, role) in [("B", "client"), ("C", "admin"), ("D", "auditor"), ("B", "admin")] {
        assert_eq!(
            engine
                .invoke(
                    creator("A"),
                    &Invocation::new("role-assign", [identity(target), role.into()])
                )
                .await,
            empty()
        );
        let roles = RoleStore::new(ledger.clone());
        assert_eq!(
            roles.get_role(&resolve(target.as_bytes())).await?,
            Some(Role::parse(role))
        );
    }

    // A promoted admin may assign roles too
    assert_eq!(
        engine
            .invoke(
                creator("C"),
                &Invocation::new("role-assign", [identity("E"), "client".into()])
            )
            .await,
        empty()
    );
    Ok(())
}

#[tokio::test]
async fn it_denies_writes_to_clients_and_strangers() -> Result<()> {
    let (engine, ledger) = bootstrapped("A").await;
    engine
        .invoke(
            creator("A"),
            &Invocation::new("role-assign", [identity("B"), "client".into()]),
        )
        .await;
    let before = ledger.snapshot().await;

    for caller in ["B", "stranger"] {
        let save = engine
            .invoke(creator(caller), &Invocation::new("save", ["k", "v"]))
            .await;
        assert!(save.message().is_some_and(|m| m.starts_with("Permission denied")));

        let assign = engine
            .invoke(
                creator(caller),
                &Invocation::new("role-assign", [identity(caller), "admin".into()]),
            )
            .await;
        assert!(assign.message().is_some_and(|m| m.starts_with("Permission denied")));
    }

    let query = engine
        .invoke(creator("stranger"), &Invocation::new("query", ["k"]))
        .await;
    assert!(query.message().is_some_and(|m| m.starts_with("Permission denied")));

    assert_eq!(ledger.snapshot().await, before);
    Ok(())
}

#[tokio::test]
async fn it_keeps_the_last_write_and_reads_missing_keys_as_empty() -> Result<()> {
    let (engine, _ledger) = bootstrapped("A").await;

    for value in ["v1", "v2"] {
        engine
            .invoke(creator("A"), &Invocation::new("save", ["k", value]))
            .await;
    }

    assert_eq!(
        engine
            .invoke(creator("A"), &Invocation::new("query", ["k"]))
            .await,
        Response::success(b"v2".to_vec())
    );
    assert_eq!(
        engine
            .invoke(creator("A"), &Invocation::new("query", ["never-written"]))
            .await,
        empty()
    );
    Ok(())
}

#[tokio::test]
async fn it_rejects_wrong_arities_without_touching_storage() -> Result<()> {
    let ledger = MeasuredLedger::new(MemoryLedger::default());
    let engine = Engine::new(Chaincode::default(), ledger.clone());
    engine.init(creator("A")).await;
    let (reads, writes) = (ledger.reads(), ledger.writes());

    let invocations = [
        Invocation::new("role-assign", [identity("B")]),
        Invocation::new("chmod", Vec::<String>::new()),
        Invocation::new("save", ["k", "v", "extra"]),
        Invocation::new("save", ["k"]),
        Invocation::new("query", Vec::<String>::new()),
        Invocation::new("query", ["k", "v"]),
    ];

    for invocation in &invocations {
        let response = engine.invoke(creator("A"), invocation).await;
        assert!(
            response
                .message()
                .is_some_and(|m| m.starts_with("Incorrect number of arguments")),
            "{invocation:?}"
        );
    }

    assert_eq!((ledger.reads(), ledger.writes()), (reads, writes));
    Ok(())
}

#[tokio::test]
async fn it_keeps_data_keys_apart_from_role_records() -> Result<()> {
    let (engine, ledger) = bootstrapped("A").await;
    let owner = identity("A");

    for key in [owner.as_str(), "owner", "OWNER", "meta:owner", "role:x"] {
        assert_eq!(
            engine
                .invoke(creator("A"), &Invocation::new("save", [key, "client"]))
                .await,
            empty()
        );
    }

    let roles = RoleStore::new(ledger);
    assert_eq!(roles.get_role(&resolve(b"A")).await?, Some(Role::Admin));
    assert_eq!(roles.get_owner().await?, Some(resolve(b"A")));
    assert_eq!(
        engine
            .invoke(creator("A"), &Invocation::new("query", [owner.as_str()]))
            .await,
        Response::success(b"client".to_vec())
    );
    Ok(())
}

#[tokio::test]
async fn it_fails_every_operation_for_an_unidentified_caller() -> Result<()> {
    let (engine, ledger) = bootstrapped("A").await;
    let before = ledger.snapshot().await;

    for invocation in [
        Invocation::new("save", ["k", "v"]),
        Invocation::new("query", ["k"]),
        Invocation::new("role-assign", [identity("B"), "admin".into()]),
    ] {
        let response = engine.invoke(None, &invocation).await;
        assert!(
            response
                .message()
                .is_some_and(|m| m.starts_with("Identity unavailable"))
        );
    }

    assert_eq!(ledger.snapshot().await, before);
    Ok(())
}

#[tokio::test]
async fn it_persists_state_across_engines() -> Result<()> {
    let root = tempfile::tempdir()?;

    let engine = Engine::new(
        Chaincode::default(),
        FileSystemLedger::new(root.path()).await?,
    );
    engine.init(creator("A")).await;
    engine
        .invoke(creator("A"), &Invocation::new("save", ["k", "v"]))
        .await;
    drop(engine);

    let engine = Engine::new(
        Chaincode::default(),
        FileSystemLedger::new(root.path()).await?,
    );
    assert_eq!(
        engine
            .invoke(creator("A"), &Invocation::new("query", ["k"]))
            .await,
        Response::success(b"v".to_vec())
    );
    assert!(!engine.init(creator("B")).await.is_success());
    Ok(())
}

#[tokio::test]
async fn it_serves_certificate_sized_callers_and_long_keys_from_disk() -> Result<()> {
    let root = tempfile::tempdir()?;
    let engine = Engine::new(
        Chaincode::default(),
        FileSystemLedger::new(root.path()).await?,
    );
    let certificate = vec![b'M'; 800];
    let auditor = vec![b'Q'; 900];
    let key = "k".repeat(300);

    assert_eq!(
        engine.init(Some(certificate.clone())).await,
        Response::success(certificate.clone())
    );
    assert_eq!(
        engine
            .invoke(
                Some(certificate.clone()),
                &Invocation::new("role-assign", [resolve(&auditor).to_string(), "client".into()])
            )
            .await,
        empty()
    );
    assert_eq!(
        engine
            .invoke(
                Some(certificate.clone()),
                &Invocation::new("save", [key.clone(), "v".into()])
            )
            .await,
        empty()
    );
    assert_eq!(
        engine
            .invoke(Some(auditor), &Invocation::new("query", [key]))
            .await,
        Response::success(b"v".to_vec())
    );
    Ok(())
}
