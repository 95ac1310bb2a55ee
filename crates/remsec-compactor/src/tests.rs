use crate::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn compact_each<T: Clone>(input: &[T]) -> Vec<(Strategy, Vec<T>)> {
    Strategy::ALL
        .iter()
        .map(|s| {
            let mut v = input.to_vec();
            s.apply(&mut v);
            (*s, v)
        })
        .collect()
}

/// Reference: the elements at even positions, built by filtering.
fn even_positions<T: Clone>(input: &[T]) -> Vec<T> {
    input.iter().step_by(2).cloned().collect()
}

// ========== compacted_len ==========

#[test]
fn test_len_small() {
    assert_eq!(compacted_len(0), 0);
    assert_eq!(compacted_len(1), 1);
    assert_eq!(compacted_len(2), 1);
    assert_eq!(compacted_len(3), 2);
    assert_eq!(compacted_len(6), 3);
}

#[test]
fn test_len_at_usize_max() {
    assert_eq!(compacted_len(usize::MAX), usize::MAX / 2 + 1);
    assert_eq!(compacted_len(usize::MAX - 1), usize::MAX / 2);
}

#[test]
fn test_len_matches_ceil_half() {
    for n in 0..1000usize {
        assert_eq!(compacted_len(n), n / 2 + n % 2);
        assert_eq!(compacted_len(n), (n + 1) / 2);
    }
}

// ========== Scenarios ==========

#[test]
fn test_scenarios_all_strategies() {
    let cases: [(&[u32], &[u32]); 6] = [
        (&[], &[]),
        (&[1, 2], &[1]),
        (&[1, 2, 3], &[1, 3]),
        (&[1, 2, 3, 4], &[1, 3]),
        (&[1, 2, 3, 4, 5], &[1, 3, 5]),
        (&[1, 2, 3, 4, 5, 6], &[1, 3, 5]),
    ];
    for (input, expected) in cases {
        for (strategy, out) in compact_each(input) {
            assert_eq!(out, expected, "{strategy} on {input:?}");
        }
    }
}

#[test]
fn test_single_element_unchanged() {
    for (strategy, out) in compact_each(&[42u8]) {
        assert_eq!(out, vec![42], "{strategy}");
    }
}

#[test]
fn test_output_len_every_strategy() {
    for n in 0..200usize {
        let input: Vec<usize> = (0..n).collect();
        for (strategy, out) in compact_each(&input) {
            assert_eq!(out.len(), compacted_len(n), "{strategy} at n={n}");
        }
    }
}

#[test]
fn test_order_preserved() {
    let input: Vec<usize> = (0..101).collect();
    for (strategy, out) in compact_each(&input) {
        assert!(out.iter().all(|x| x % 2 == 0), "{strategy}");
        assert!(out.windows(2).all(|w| w[0] + 2 == w[1]), "{strategy}");
    }
}

// ========== Agreement ==========

#[test]
fn test_parity_ignores_values() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..50 {
        let n = rng.gen_range(0..500);
        let input: Vec<u64> = (0..n).map(|_| rng.gen_range(0..4)).collect();
        let expected = even_positions(&input);
        for (strategy, out) in compact_each(&input) {
            assert_eq!(out, expected, "{strategy} at n={n}");
        }
    }
}

#[test]
fn test_strategies_agree_large() {
    let input: Vec<u64> = (1..=100_001).collect();
    let results = compact_each(&input);
    let (_, reference) = &results[0];
    for (strategy, out) in &results[1..] {
        assert_eq!(out, reference, "{strategy}");
    }
}

#[test]
fn test_non_clone_elements() {
    let make = || (0..7).map(|i| Box::new(i.to_string())).collect::<Vec<_>>();
    for strategy in Strategy::ALL {
        let mut v = make();
        strategy.apply(&mut v);
        let got: Vec<&str> = v.iter().map(|b| b.as_str()).collect();
        assert_eq!(got, ["0", "2", "4", "6"], "{strategy}");
    }
}

#[test]
fn test_not_idempotent() {
    let input: Vec<u32> = (0..9).collect();
    for strategy in Strategy::ALL {
        let mut v = input.clone();
        strategy.apply(&mut v);
        assert_eq!(v, [0, 2, 4, 6, 8]);
        strategy.apply(&mut v);
        assert_eq!(v, [0, 4, 8], "{strategy}");
    }
}

// ========== Registry ==========

#[test]
fn test_names_unique() {
    let names: std::collections::HashSet<_> = Strategy::ALL.iter().map(|s| s.name()).collect();
    assert_eq!(names.len(), Strategy::ALL.len());
}

#[test]
fn test_display_is_name() {
    assert_eq!(Strategy::RetainParity.to_string(), "retain_parity");
}

#[test]
fn test_compact_fn_matches_apply() {
    for strategy in Strategy::ALL {
        let f: fn(&mut Vec<i64>) = strategy.compact_fn();
        let mut a = vec![-1, -2, -3];
        let mut b = a.clone();
        f(&mut a);
        strategy.apply(&mut b);
        assert_eq!(a, b);
    }
}
