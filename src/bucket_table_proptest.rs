#![cfg(test)]

// Property tests for BucketTable kept inside the crate so they can reach
// the chain iterator directly.

use crate::bucket_table::BucketTable;
use crate::hash::{hash, N};
use crate::word::Word;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Insert(usize),
    Contains(String),
    ContainsPool(usize, bool),
    Clear,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<Op>)> {
    proptest::collection::vec("[a-zA-Z']{1,8}", 1..=10).prop_flat_map(|pool| {
        let idx = 0..pool.len();
        let op = prop_oneof![
            4 => idx.clone().prop_map(Op::Insert),
            2 => (idx.clone(), any::<bool>()).prop_map(|(i, up)| Op::ContainsPool(i, up)),
            2 => "[a-zA-Z]{1,8}".prop_map(Op::Contains),
            1 => Just(Op::Clear),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

fn model_contains(model: &[String], q: &str) -> bool {
    model.iter().any(|w| w.eq_ignore_ascii_case(q))
}

// Property: state-machine equivalence against a Vec multiset.
// - `len` equals the number of inserts since the last clear.
// - `contains` agrees with a linear case-insensitive scan of the model.
// - every stored word sits in `hash(word)` and buckets hold nothing else.
// - each chain lists its words newest first.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_matches_model((pool, ops) in arb_scenario()) {
        let mut sut = BucketTable::new();
        let mut model: Vec<String> = Vec::new();

        for op in ops {
            match op {
                Op::Insert(i) => {
                    let w = Word::new(&pool[i]).unwrap();
                    let b = sut.insert(w).unwrap();
                    prop_assert_eq!(b, hash(&pool[i]));
                    model.push(pool[i].clone());
                }
                Op::ContainsPool(i, upper) => {
                    let q = if upper { pool[i].to_ascii_uppercase() } else { pool[i].to_ascii_lowercase() };
                    prop_assert_eq!(sut.contains(&q), model_contains(&model, &q));
                }
                Op::Contains(q) => {
                    prop_assert_eq!(sut.contains(&q), model_contains(&model, &q));
                }
                Op::Clear => {
                    sut.clear();
                    model.clear();
                }
            }
            prop_assert_eq!(sut.len(), model.len());
        }

        for (b, w) in sut.iter() {
            prop_assert_eq!(b, hash(w.as_str()));
        }

        // Chain order: newest first, i.e. the model filtered by bucket, reversed.
        for b in 0..N {
            let chain: Vec<&str> = sut.chain(b).map(Word::as_str).collect();
            if chain.is_empty() {
                continue;
            }
            let expected: Vec<&str> = model
                .iter()
                .rev()
                .filter(|w| hash(w) == b)
                .map(String::as_str)
                .collect();
            prop_assert_eq!(chain, expected);
        }

        let occupied = (0..N).filter(|&b| sut.chain(b).next().is_some()).count();
        prop_assert_eq!(sut.occupied_buckets(), occupied);
    }
}
