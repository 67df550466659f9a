//! Set-algebra properties over random member lists

use crate::common::*;
use aclstore::ValueSet;
use proptest::prelude::*;
use std::collections::HashSet;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime")
}

fn members() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-f]{0,2}", 0..12)
}

fn as_set(values: &ValueSet) -> HashSet<String> {
    values.iter().map(str::to_string).collect()
}

fn expected_set(lists: &[&Vec<String>]) -> HashSet<String> {
    lists
        .iter()
        .flat_map(|l| l.iter())
        .filter(|v| !v.is_empty())
        .cloned()
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_separate_adds_union(v1 in members(), v2 in members()) {
        let acl = memory_backend();
        let got = runtime().block_on(async {
            let mut tx = acl.begin();
            acl.add(&mut tx, "b", "k", v1.clone());
            acl.end(tx).await.unwrap();

            let mut tx = acl.begin();
            acl.add(&mut tx, "b", "k", v2.clone());
            acl.end(tx).await.unwrap();

            acl.get("b", "k").await.unwrap()
        });

        prop_assert_eq!(as_set(&got), expected_set(&[&v1, &v2]));
        prop_assert_eq!(got.len(), as_set(&got).len());
    }

    #[test]
    fn prop_remove_is_set_difference(stored in members(), removed in members()) {
        let acl = memory_backend();
        let got = runtime().block_on(async {
            let mut tx = acl.begin();
            acl.add(&mut tx, "b", "k", stored.clone());
            acl.end(tx).await.unwrap();

            let mut tx = acl.begin();
            acl.remove(&mut tx, "b", "k", removed.clone());
            acl.end(tx).await.unwrap();

            acl.get("b", "k").await.unwrap()
        });

        let removed: HashSet<String> = removed.into_iter().collect();
        let expected: HashSet<String> = expected_set(&[&stored])
            .difference(&removed)
            .cloned()
            .collect();
        prop_assert_eq!(as_set(&got), expected);
    }

    #[test]
    fn prop_union_is_dedup_concat(v1 in members(), v2 in members()) {
        let acl = memory_backend();
        let (union, g1, g2) = runtime().block_on(async {
            let mut tx = acl.begin();
            acl.add(&mut tx, "b", "k1", v1.clone());
            acl.add(&mut tx, "b", "k2", v2.clone());
            acl.end(tx).await.unwrap();

            (
                acl.union("b", ["k1", "k2"]).await.unwrap(),
                acl.get("b", "k1").await.unwrap(),
                acl.get("b", "k2").await.unwrap(),
            )
        });

        let expected: ValueSet = g1.into_iter().chain(g2).collect();
        prop_assert_eq!(union, expected);
    }

    #[test]
    fn prop_del_empties_all_keys(keys in proptest::collection::vec("[a-z]{1,4}", 1..6)) {
        let acl = memory_backend();
        let leftovers = runtime().block_on(async {
            let mut tx = acl.begin();
            for k in &keys {
                acl.add(&mut tx, "b", k, "member");
            }
            acl.end(tx).await.unwrap();

            let mut tx = acl.begin();
            acl.del(&mut tx, "b", keys.clone());
            acl.end(tx).await.unwrap();

            let mut leftovers = 0;
            for k in &keys {
                leftovers += acl.get("b", k).await.unwrap().len();
            }
            leftovers
        });

        prop_assert_eq!(leftovers, 0);
        prop_assert!(acl.store().is_empty());
    }
}
