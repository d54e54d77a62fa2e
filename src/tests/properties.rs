use crate::btree::BTree;
use crate::key_generator::{KeyOrder, RandomKeys, SequentialKeys};
use crate::order::Order;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::collections::BTreeSet;

const ORDERS: [usize; 4] = [4, 6, 8, 32];

fn helper_assert_matches(tree: &BTree<i64>, model: &BTreeSet<i64>) {
    assert_eq!(tree.validate(), Ok(()), "{:?}", tree);
    assert_eq!(tree.len(), model.len());
    assert!(tree.iter().eq(model.iter()));
}

/// Insert every key, checking the tree against the model after each step
fn helper_fill<I>(order: Order, keys: I) -> (BTree<i64>, BTreeSet<i64>)
where
    I: Iterator<Item = i64>,
{
    let mut tree = BTree::with_order(order);
    let mut model = BTreeSet::new();
    for key in keys {
        assert_eq!(tree.insert(key), model.insert(key));
        helper_assert_matches(&tree, &model);
    }
    (tree, model)
}

#[test]
fn random_inserts() {
    for &m in ORDERS.iter() {
        for seed in 0..10 {
            helper_fill(Order::new(m).unwrap(), RandomKeys::new(300, 500, seed));
        }
    }
}

#[test]
fn sequential_inserts() {
    for &m in ORDERS.iter() {
        for &key_order in [KeyOrder::Ascending, KeyOrder::Descending].iter() {
            helper_fill(Order::new(m).unwrap(), SequentialKeys::new(500, key_order));
        }
    }
}

#[test]
fn random_deletes() {
    for &m in ORDERS.iter() {
        for seed in 0..10 {
            let order = Order::new(m).unwrap();
            let (mut tree, mut model) = helper_fill(order, RandomKeys::new(300, 1_000, seed));

            // Delete a random half of the present keys, mixed with absent ones
            let mut rng = Pcg64::seed_from_u64(seed);
            let mut victims: Vec<i64> = model.iter().cloned().collect();
            victims.shuffle(&mut rng);
            victims.truncate(victims.len() / 2);
            victims.extend(vec![-1, 1_000, 5_000]);
            victims.shuffle(&mut rng);

            for key in victims {
                assert_eq!(tree.delete(&key), model.remove(&key));
                helper_assert_matches(&tree, &model);
            }

            // Search agrees with the remaining keys
            for key in -5..1_005 {
                assert_eq!(tree.contains(&key), model.contains(&key));
            }
        }
    }
}

#[test]
fn delete_everything() {
    for &m in ORDERS.iter() {
        for seed in 0..5 {
            let order = Order::new(m).unwrap();
            let (mut tree, model) = helper_fill(order, RandomKeys::new(200, 10_000, seed));
            let mut keys: Vec<i64> = model.into_iter().collect();
            keys.shuffle(&mut Pcg64::seed_from_u64(seed + 100));
            for key in keys {
                assert!(tree.delete(&key));
                assert_eq!(tree.validate(), Ok(()));
            }
            assert!(tree.is_empty());
            assert!(tree.root().is_none());
        }
    }
}

#[test]
fn absent_delete_is_idempotent() {
    for &m in ORDERS.iter() {
        let order = Order::new(m).unwrap();
        let (mut tree, _) = helper_fill(order, RandomKeys::new(200, 1_000, 3));
        let absent = (0..1_000).find(|key| !tree.contains(key)).unwrap();

        let before = tree.clone();
        assert!(!tree.delete(&absent));
        assert_eq!(tree, before);
        assert!(!tree.delete(&absent));
        assert_eq!(tree, before);
    }
}

#[test]
fn duplicate_insert_is_ignored() {
    for &m in ORDERS.iter() {
        let order = Order::new(m).unwrap();
        let (mut tree, model) = helper_fill(order, RandomKeys::new(200, 1_000, 5));
        let before = tree.clone();
        for key in model.iter() {
            assert!(!tree.insert(*key));
        }
        assert_eq!(tree, before);
    }
}

#[test]
fn interleaved_operations() {
    let order = Order::default();
    let mut rng = Pcg64::seed_from_u64(42);
    let mut tree = BTree::with_order(order);
    let mut model = BTreeSet::new();
    let keys: Vec<i64> = RandomKeys::new(2_000, 200, 42).collect();
    for (i, key) in keys.into_iter().enumerate() {
        // Roughly one delete every three operations keeps the tree growing slowly
        if i % 3 == 2 {
            let present: Vec<i64> = model.iter().cloned().collect();
            if let Some(&victim) = present.choose(&mut rng) {
                assert!(tree.delete(&victim));
                model.remove(&victim);
            }
        } else {
            assert_eq!(tree.insert(key), model.insert(key));
        }
        helper_assert_matches(&tree, &model);
    }
}
