//! Store-level invariants under random mutation.

use proptest::prelude::*;

use seqkit::contracts::check_array_spare_slots;
use seqkit::{ArrayStore, ListStore};

#[derive(Debug, Clone)]
enum StoreOp {
    Append(i32),
    Prepend(i32),
    InsertAt(i32, usize),
    Remove(usize),
}

fn store_op() -> impl Strategy<Value = StoreOp> {
    prop_oneof![
        any::<i32>().prop_map(StoreOp::Append),
        any::<i32>().prop_map(StoreOp::Prepend),
        (any::<i32>(), 0usize..16).prop_map(|(v, i)| StoreOp::InsertAt(v, i)),
        (0usize..16).prop_map(StoreOp::Remove),
    ]
}

proptest! {
    /// The chain stays well formed (ends, count, no leaked slots) whatever
    /// sequence of relinks produced it.
    #[test]
    fn prop_list_store_verifies(ops in prop::collection::vec(store_op(), 0..60)) {
        let mut store = ListStore::new();
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                StoreOp::Append(v) => {
                    store.append(v);
                    model.push(v);
                }
                StoreOp::Prepend(v) => {
                    store.prepend(v);
                    model.insert(0, v);
                }
                StoreOp::InsertAt(v, i) => {
                    if store.insert_at(v, i).is_ok() {
                        model.insert(i, v);
                    } else {
                        prop_assert!(i > model.len());
                    }
                }
                StoreOp::Remove(i) => {
                    if let Ok(v) = store.remove(i) {
                        prop_assert_eq!(v, model.remove(i));
                    } else {
                        prop_assert!(i >= model.len());
                    }
                }
            }
            prop_assert!(store.verify().is_ok());
            prop_assert_eq!(store.len(), model.len());
        }

        let items: Vec<i32> = store.iter().copied().collect();
        prop_assert_eq!(items, model.clone());
        prop_assert!(store.clone().verify().is_ok());
        prop_assert_eq!(store.last().ok(), model.last());
    }

    /// Resizes and removals keep the slots past the end at the default.
    #[test]
    fn prop_array_store_spare_slots(
        items in prop::collection::vec(1i32..100, 0..20),
        lens in prop::collection::vec(0usize..30, 0..10),
        removals in prop::collection::vec(0usize..30, 0..10),
    ) {
        let mut store = ArrayStore::from_slice(&items);
        for len in lens {
            store.resize(len).unwrap();
            prop_assert!(store.len() <= store.capacity());
            prop_assert!(check_array_spare_slots(&store).is_ok());
        }
        for index in removals {
            let _ = store.remove(index);
            prop_assert!(check_array_spare_slots(&store).is_ok());
        }
    }
}
