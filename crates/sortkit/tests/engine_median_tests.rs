//! Tests for the order-statistics engines.
//!
//! These tests verify every `MedianFinder` strategy against the shared
//! contract:
//! - k-th smallest with 1-indexed ranks
//! - Minimum, maximum and (lower) median convenience queries
//! - Validation order and the fixed error messages
//!
//! ## Test Organization
//!
//! 1. **Basic Queries** - Fixed scenarios on integers and strings
//! 2. **Validation** - Empty input, unsupported types, rank bounds
//! 3. **Duplicates and Even Lengths** - Tie handling and lower median
//! 4. **Cross-Strategy Agreement** - Randomized inputs against a reference

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use sortkit::prelude::*;
use sortkit::{Selector, Strategy};

// ============================================================================
// Helpers
// ============================================================================

const ALL_STRATEGIES: [Strategy; 3] = [BruteForce, PriorityQueue, QuickSelect];

fn selector(strategy: Strategy) -> Selector {
    Median::new().strategy(strategy).build().unwrap()
}

// ============================================================================
// Basic Query Tests
// ============================================================================

/// Test the median of an odd-length integer slice.
///
/// Verifies `[3, 1, 2, 5, 4]` has median 3 for every strategy.
#[test]
fn test_median_odd_integers() {
    for strategy in ALL_STRATEGIES {
        let median = selector(strategy).find_median(&[3, 1, 2, 5, 4]).unwrap();
        assert_eq!(median, 3, "{strategy:?}");
    }
}

/// Test the median of strings.
///
/// Verifies lexicographic order: the median of `E A B D C` is `C`.
#[test]
fn test_median_strings() {
    for strategy in ALL_STRATEGIES {
        let finder = selector(strategy);
        assert_eq!(finder.find_median(&["E", "A", "B", "D", "C"]).unwrap(), "C");

        let owned: Vec<String> = ["kiwi", "apple", "mango"].iter().map(|s| s.to_string()).collect();
        assert_eq!(finder.find_median(&owned).unwrap(), "kiwi");
    }
}

/// Test k-th smallest on the reference slice.
///
/// Verifies every rank from 1 to length.
#[test]
fn test_kth_smallest_every_rank() {
    let data = [3, 1, 2, 5, 4];
    for strategy in ALL_STRATEGIES {
        let finder = selector(strategy);
        for k in 1..=5 {
            assert_eq!(
                finder.find_kth_smallest(&data, k).unwrap(),
                k as i32,
                "{strategy:?} rank {k}"
            );
        }
    }
}

/// Test minimum and maximum.
///
/// Verifies they match ranks 1 and length.
#[test]
fn test_minimum_and_maximum() {
    let data = [12, -4, 7, 0, 33, 7];
    for strategy in ALL_STRATEGIES {
        let finder = selector(strategy);
        assert_eq!(finder.find_minimum(&data).unwrap(), -4);
        assert_eq!(finder.find_maximum(&data).unwrap(), 33);
    }
}

/// Test a single-element slice.
///
/// Verifies median, minimum and maximum all return the element.
#[test]
fn test_singleton_queries() {
    for strategy in ALL_STRATEGIES {
        let finder = selector(strategy);
        assert_eq!(finder.find_median(&[9]).unwrap(), 9);
        assert_eq!(finder.find_minimum(&[9]).unwrap(), 9);
        assert_eq!(finder.find_maximum(&[9]).unwrap(), 9);
    }
}

/// Test that the input is left untouched.
///
/// Verifies the engines work on their own copy.
#[test]
fn test_input_not_modified() {
    let data = vec![5, 3, 9, 1, 7];
    for strategy in ALL_STRATEGIES {
        selector(strategy).find_kth_smallest(&data, 2).unwrap();
        assert_eq!(data, vec![5, 3, 9, 1, 7]);
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test an empty slice.
///
/// Verifies "Array is empty" for every query.
#[test]
fn test_empty_input() {
    let empty: [i32; 0] = [];
    for strategy in ALL_STRATEGIES {
        let finder = selector(strategy);
        for err in [
            finder.find_median(&empty).unwrap_err(),
            finder.find_minimum(&empty).unwrap_err(),
            finder.find_maximum(&empty).unwrap_err(),
            finder.find_kth_smallest(&empty, 1).unwrap_err(),
        ] {
            assert_eq!(err, SortkitError::EmptyInput);
            assert_eq!(err.to_string(), "Array is empty");
        }
    }
}

/// Test floating point input.
///
/// Verifies floats are declined with the unsupported-type message.
#[test]
fn test_unsupported_float_type() {
    for strategy in ALL_STRATEGIES {
        let err = selector(strategy).find_median(&[1.0, 2.0]).unwrap_err();
        assert_eq!(err.to_string(), "Input has data-type which is not supported yet");
        assert!(matches!(err, SortkitError::UnsupportedType { .. }));

        let err = selector(strategy).find_minimum(&[1.0f32]).unwrap_err();
        assert!(matches!(err, SortkitError::UnsupportedType { .. }));
    }
}

/// Test that emptiness is reported before the type.
///
/// Verifies an empty float slice yields "Array is empty".
#[test]
fn test_empty_checked_before_type() {
    let empty: [f64; 0] = [];
    let err = selector(QuickSelect).find_median(&empty).unwrap_err();
    assert_eq!(err, SortkitError::EmptyInput);
}

/// Test rank 2 on a single-element slice.
///
/// Verifies the singleton-specific message.
#[test]
fn test_singleton_rank_message() {
    for strategy in ALL_STRATEGIES {
        let err = selector(strategy).find_kth_smallest(&[1], 2).unwrap_err();
        assert_eq!(err, SortkitError::SingletonRank { k: 2 });
        assert_eq!(err.to_string(), "k can only be 1 for a single-element array");
    }
}

/// Test rank zero.
///
/// Verifies "k must be at least 1".
#[test]
fn test_rank_zero() {
    for strategy in ALL_STRATEGIES {
        let err = selector(strategy).find_kth_smallest(&[4, 5, 6], 0).unwrap_err();
        assert_eq!(err, SortkitError::RankTooSmall);
        assert_eq!(err.to_string(), "k must be at least 1");
    }
}

/// Test rank above the length.
///
/// Verifies "k is higher than the highest index".
#[test]
fn test_rank_out_of_range() {
    for strategy in ALL_STRATEGIES {
        let err = selector(strategy).find_kth_smallest(&[4, 5, 6], 4).unwrap_err();
        assert_eq!(err, SortkitError::RankOutOfRange { k: 4, len: 3 });
        assert_eq!(err.to_string(), "k is higher than the highest index");
    }
}

// ============================================================================
// Duplicates and Even Length Tests
// ============================================================================

/// Test the median of an even-length slice.
///
/// Verifies every strategy returns the lower of the two central elements.
#[test]
fn test_even_length_lower_median() {
    for strategy in ALL_STRATEGIES {
        let median = selector(strategy).find_median(&[8, 2, 6, 4]).unwrap();
        assert_eq!(median, 4, "{strategy:?}");
    }
}

/// Test ranks over duplicated values.
///
/// Verifies duplicates occupy consecutive ranks.
#[test]
fn test_duplicates_ranked_consecutively() {
    let data = [2, 7, 2, 7, 2, 1];
    let expected = [1, 2, 2, 2, 7, 7];
    for strategy in ALL_STRATEGIES {
        let finder = selector(strategy);
        for (k, &value) in (1..).zip(expected.iter()) {
            assert_eq!(finder.find_kth_smallest(&data, k).unwrap(), value, "{strategy:?} rank {k}");
        }
    }
}

/// Test all-equal input.
///
/// Verifies every rank returns the shared value.
#[test]
fn test_all_equal_values() {
    let data = vec![5u8; 33];
    for strategy in ALL_STRATEGIES {
        let finder = selector(strategy);
        assert_eq!(finder.find_median(&data).unwrap(), 5);
        assert_eq!(finder.find_kth_smallest(&data, 33).unwrap(), 5);
    }
}

// ============================================================================
// Cross-Strategy Agreement Tests
// ============================================================================

/// Test every strategy against a sorted reference.
///
/// Verifies agreement on random data with heavy duplication.
#[test]
fn test_strategies_agree_with_reference() {
    let mut rng = StdRng::seed_from_u64(42);

    for len in [1, 2, 5, 16, 101, 1000] {
        let data: Vec<i64> = (0..len).map(|_| rng.random_range(-20..20)).collect();
        let mut sorted = data.clone();
        sorted.sort();

        for _ in 0..10 {
            let k = rng.random_range(1..=len);
            for strategy in ALL_STRATEGIES {
                let value = selector(strategy).find_kth_smallest(&data, k).unwrap();
                assert_eq!(value, sorted[k - 1], "{strategy:?} len {len} rank {k}");
            }
        }
    }
}

/// Test quickselect on sorted and reverse-sorted input.
///
/// Verifies adversarial layouts across several seeds.
#[test]
fn test_quickselect_adversarial_layouts() {
    let ascending: Vec<i32> = (1..=20_000).collect();
    let descending: Vec<i32> = ascending.iter().rev().copied().collect();

    for seed in [0, 9, 1234] {
        let finder = QuickSelectMedianFinder::with_seed(seed);
        assert_eq!(finder.find_median(&ascending).unwrap(), 10_000);
        assert_eq!(finder.find_median(&descending).unwrap(), 10_000);
        assert_eq!(finder.find_kth_smallest(&descending, 1).unwrap(), 1);
    }
}

/// Test strategy names.
///
/// Verifies each selector reports its strategy.
#[test]
fn test_strategy_names() {
    assert_eq!(MedianFinder::<i32>::name(&selector(BruteForce)), "BruteForce");
    assert_eq!(MedianFinder::<i32>::name(&selector(PriorityQueue)), "PriorityQueue");
    assert_eq!(MedianFinder::<i32>::name(&selector(QuickSelect)), "QuickSelect");
    assert_eq!(MedianFinder::<i32>::name(&PQMedianFinder), "PriorityQueue");
    assert_eq!(MedianFinder::<i32>::name(&BruteForceMedianFinder), "BruteForce");
}
