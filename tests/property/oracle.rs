//! Differential testing against a `Vec` oracle.

use proptest::prelude::*;

use super::common::{
    all_kinds, int_sequence, items_strategy, oracle_apply, script_op_strategy, sequence_apply,
};
use seqkit::Mutability;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every step agrees with the oracle on contents or on the error kind.
    #[test]
    fn prop_scripts_match_vec(
        initial in items_strategy(),
        ops in prop::collection::vec(script_op_strategy(), 0..40),
        which in 0usize..4,
    ) {
        let kind = all_kinds()[which];
        let mut model = initial.clone();
        let mut seq = int_sequence(kind, &initial);

        for op in &ops {
            let before = seq.to_vec();
            match (sequence_apply(&seq, op), oracle_apply(&model, op)) {
                (Ok(returned), Ok(expected)) => {
                    prop_assert_eq!(returned.to_vec(), expected.clone(), "{:?} on {}", op, kind);
                    prop_assert_eq!(returned.kind(), kind);
                    if kind.mutability == Mutability::Immutable {
                        prop_assert_eq!(seq.to_vec(), before, "receiver changed");
                    }
                    model = expected;
                    seq = returned;
                }
                (Err(err), Err(code)) => {
                    prop_assert_eq!(err.code(), code, "{:?} on {}", op, kind);
                    prop_assert_eq!(seq.to_vec(), before, "failed op changed receiver");
                }
                (got, want) => {
                    let got = got.map(|s| s.to_vec());
                    prop_assert!(false, "{:?}: got {:?}, oracle {:?}", op, got, want);
                }
            }

            prop_assert_eq!(seq.size(), model.len());
            if let Some(capacity) = seq.capacity() {
                prop_assert!(seq.size() <= capacity);
            }
        }
    }

    /// Mutable and immutable variants end in the same place; only the
    /// receivers differ along the way.
    #[test]
    fn prop_variants_agree(
        initial in items_strategy(),
        ops in prop::collection::vec(script_op_strategy(), 0..30),
    ) {
        let results: Vec<Vec<i64>> = all_kinds()
            .into_iter()
            .map(|kind| {
                let mut seq = int_sequence(kind, &initial);
                for op in &ops {
                    if let Ok(next) = sequence_apply(&seq, op) {
                        seq = next;
                    }
                }
                seq.to_vec()
            })
            .collect();

        for result in &results[1..] {
            prop_assert_eq!(result, &results[0]);
        }
    }
}
