//! clean

use crate::common::*;
use aclstore::{AclBuilder, KvStore, MemoryStore};
use std::sync::Arc;

#[tokio::test]
async fn test_clean_empty_store() {
    let acl = memory_backend();
    assert_eq!(acl.clean().await.unwrap(), 0);
}

#[tokio::test]
async fn test_clean_removes_every_bucket() {
    let acl = memory_backend();

    let mut tx = acl.begin();
    acl.add(&mut tx, "roles", "admin", "read");
    acl.add(&mut tx, "users", "bob", "admin");
    acl.add(&mut tx, "meta", "users", "bob");
    acl.end(tx).await.unwrap();

    assert_eq!(acl.clean().await.unwrap(), 3);
    assert!(acl.store().is_empty());
    assert!(acl.get("users", "bob").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_clean_leaves_foreign_records() {
    init_tracing();
    let store = Arc::new(MemoryStore::new());
    store.put("unrelated", b"keep".to_vec()).await.unwrap();
    store.put("acl", b"keep".to_vec()).await.unwrap();

    let acl = AclBuilder::new().open(Arc::clone(&store));
    let perm = AclBuilder::new().prefix("perm").open(Arc::clone(&store));

    for backend in [&acl, &perm] {
        let mut tx = backend.begin();
        backend.add(&mut tx, "b", "k", "v");
        backend.end(tx).await.unwrap();
    }

    assert_eq!(acl.clean().await.unwrap(), 1);
    assert_eq!(
        store.keys(),
        vec!["acl".to_string(), "perm_b@k".to_string(), "unrelated".to_string()]
    );
    assert_eq!(perm.get("b", "k").await.unwrap(), ["v"]);
}

#[tokio::test]
async fn test_clean_stops_at_first_delete_error() {
    let (store, acl) = failing_backend();

    let mut tx = acl.begin();
    for k in ["a", "b", "c"] {
        acl.add(&mut tx, "x", k, "v");
    }
    acl.end(tx).await.unwrap();

    store.fail(FailOn::Delete, "@b");
    assert!(acl.clean().await.is_err());

    assert!(!store.inner().contains("acl_x@a"));
    assert!(store.inner().contains("acl_x@b"));
    assert!(store.inner().contains("acl_x@c"));
}
