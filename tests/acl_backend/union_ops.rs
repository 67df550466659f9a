//! union

use crate::common::*;
use aclstore::ValueSet;

async fn seed(acl: &aclstore::AclBackend<aclstore::MemoryStore>) {
    let mut tx = acl.begin();
    acl.add(&mut tx, "role", "editor", ["read", "write"]);
    acl.add(&mut tx, "role", "admin", ["write", "delete", "read"]);
    acl.add(&mut tx, "role", "guest", ["read"]);
    acl.end(tx).await.unwrap();
}

#[tokio::test]
async fn test_union_overlapping_sets() {
    let acl = memory_backend();
    seed(&acl).await;

    let union = acl.union("role", ["editor", "admin"]).await.unwrap();
    assert_eq!(union, ["read", "write", "delete"]);
}

#[tokio::test]
async fn test_union_equals_dedup_concat_of_gets() {
    let acl = memory_backend();
    seed(&acl).await;

    let mut expected = acl.get("role", "admin").await.unwrap().into_vec();
    expected.extend(acl.get("role", "guest").await.unwrap());
    let expected: ValueSet = expected.into_iter().collect();

    assert_eq!(acl.union("role", ["admin", "guest"]).await.unwrap(), expected);
}

#[tokio::test]
async fn test_union_order_follows_key_order() {
    let acl = memory_backend();
    seed(&acl).await;

    let union = acl.union("role", ["admin", "editor"]).await.unwrap();
    assert_eq!(union, ["write", "delete", "read"]);
}

#[tokio::test]
async fn test_union_with_missing_keys() {
    let acl = memory_backend();
    seed(&acl).await;

    let union = acl.union("role", ["nobody", "guest", "ghost"]).await.unwrap();
    assert_eq!(union, ["read"]);
}

#[tokio::test]
async fn test_union_of_nothing() {
    let acl = memory_backend();
    let union = acl.union("role", Vec::<String>::new()).await.unwrap();
    assert!(union.is_empty());
    assert_eq!(acl.store().op_counts().gets, 0);
}

#[tokio::test]
async fn test_union_single_key() {
    let acl = memory_backend();
    seed(&acl).await;
    assert_eq!(acl.union("role", "guest").await.unwrap(), ["read"]);
}

#[tokio::test]
async fn test_union_fetches_sequentially_and_fails_fast() {
    let (store, acl) = failing_backend();
    store.fail(FailOn::Get, "@b");

    let err = acl.union("x", ["a", "b", "c"]).await.unwrap_err();
    assert!(err.is_store_error());
    assert_eq!(
        store.calls(),
        vec![
            Call::Get("acl_x@a".to_string()),
            Call::Get("acl_x@b".to_string())
        ]
    );
}
