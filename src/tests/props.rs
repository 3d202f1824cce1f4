//! Property tests: random operation sequences against a `BTreeMap` oracle.

use std::collections::BTreeMap;

use proptest::prelude::*;

use crate::MaximaMap;

/// Brute-force maxima from argument-sorted pairs.
fn expected_maxima(pairs: &[(i32, i32)]) -> Vec<(i32, i32)> {
    let mut out: Vec<(i32, i32)> = pairs
        .iter()
        .enumerate()
        .filter(|(i, (_, v))| {
            let left_ok = *i == 0 || *v >= pairs[i - 1].1;
            let right_ok = i + 1 == pairs.len() || *v >= pairs[i + 1].1;
            left_ok && right_ok
        })
        .map(|(_, pair)| *pair)
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    out
}

proptest! {
    /// Domain and maxima agree with the oracle after every step of a
    /// random set/erase sequence over a small key space (collisions and
    /// plateaus are frequent on purpose).
    #[test]
    fn matches_oracle(ops in prop::collection::vec((any::<bool>(), 0_i32..16, 0_i32..6), 1..120)) {
        let mut map = MaximaMap::new();
        let mut oracle = BTreeMap::new();

        for (is_set, a, v) in ops {
            if is_set {
                map.set_value(a, v).unwrap();
                oracle.insert(a, v);
            } else {
                map.erase(&a).unwrap();
                oracle.remove(&a);
            }

            let pairs: Vec<(i32, i32)> = map.iter().map(|p| (*p.argument(), *p.value())).collect();
            let expected: Vec<(i32, i32)> = oracle.iter().map(|(a, v)| (*a, *v)).collect();
            prop_assert_eq!(&pairs, &expected);

            let maxima: Vec<(i32, i32)> =
                map.maxima().map(|p| (*p.argument(), *p.value())).collect();
            prop_assert_eq!(maxima, expected_maxima(&pairs));

            for (a, v) in &pairs {
                prop_assert_eq!(map.value_at(a).unwrap(), v);
            }
        }
    }

    /// A clone taken mid-sequence is unaffected by later edits.
    #[test]
    fn clone_snapshot_survives(ops in prop::collection::vec((0_i32..8, 0_i32..4), 1..40)) {
        let mut map = MaximaMap::new();
        for (a, v) in &ops {
            map.set_value(*a, *v).unwrap();
        }
        let frozen = map.clone();
        let before: Vec<(i32, i32)> = frozen.iter().map(|p| (*p.argument(), *p.value())).collect();

        for (a, v) in &ops {
            map.set_value(*a, v + 100).unwrap();
        }
        map.erase(&ops[0].0).unwrap();

        let after: Vec<(i32, i32)> = frozen.iter().map(|p| (*p.argument(), *p.value())).collect();
        prop_assert_eq!(before, after);
    }
}
