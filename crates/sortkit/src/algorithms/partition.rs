//! Pivot selection and three-way partitioning.
//!
//! Shared by quicksort and quickselect. Pivots are drawn at random; for
//! longer slices the median of three random samples is used, which keeps
//! sorted, reverse-sorted and duplicate-heavy inputs at O(n log n)
//! expected cost. The three-way partition groups every element equal to
//! the pivot together, so runs of duplicates are finished in one pass.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::rng::PivotRng;

/// Slices at least this long use median-of-three random sampling.
pub const MEDIAN_OF_THREE_THRESHOLD: usize = 32;

/// Choose a pivot index in `0..v.len()`. `v` must be non-empty.
pub fn choose_pivot<T, F>(v: &[T], rng: &mut PivotRng, compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < MEDIAN_OF_THREE_THRESHOLD {
        return rng.index(len);
    }
    let (a, b, c) = (rng.index(len), rng.index(len), rng.index(len));
    median_of_three(v, a, b, c, compare)
}

fn median_of_three<T, F>(v: &[T], a: usize, b: usize, c: usize, compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let ab = compare(&v[a], &v[b]) == Ordering::Less;
    let bc = compare(&v[b], &v[c]) == Ordering::Less;
    let ac = compare(&v[a], &v[c]) == Ordering::Less;
    if ab == bc {
        b
    } else if ab == ac {
        c
    } else {
        a
    }
}

/// Partition `v` around `v[pivot]` into less, equal and greater regions.
///
/// Returns `(lt, gt)` such that `v[..lt] < pivot`, `v[lt..gt] == pivot`
/// and `v[gt..] > pivot`. The equal region always holds at least the pivot.
pub fn partition_three_way<T, F>(v: &mut [T], pivot: usize, compare: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    v.swap(0, pivot);
    let Some((pivot_value, rest)) = v.split_first_mut() else {
        return (0, 0);
    };

    let (mut lt, mut i, mut gt) = (0, 0, rest.len());
    while i < gt {
        match compare(&rest[i], pivot_value) {
            Ordering::Less => {
                rest.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                rest.swap(i, gt);
            }
            Ordering::Equal => i += 1,
        }
    }

    // `rest[k]` is `v[k + 1]`; move the pivot between the less and equal regions.
    v.swap(0, lt);
    (lt, gt + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(not(feature = "std"))]
    use alloc::vec;

    #[test]
    fn median_of_three_picks_middle_value() {
        let v = [10, 20, 30];
        let mut cmp = i32::cmp;
        for (a, b, c) in [(0, 1, 2), (0, 2, 1), (1, 0, 2), (1, 2, 0), (2, 0, 1), (2, 1, 0)] {
            assert_eq!(v[median_of_three(&v, a, b, c, &mut cmp)], 20);
        }
    }

    #[test]
    fn partition_groups_around_pivot() {
        let mut v = vec![5, 1, 5, 9, 3, 5, 7, 0];
        let (lt, gt) = partition_three_way(&mut v, 0, &mut i32::cmp);
        assert!(v[..lt].iter().all(|&x| x < 5));
        assert!(v[lt..gt].iter().all(|&x| x == 5));
        assert!(v[gt..].iter().all(|&x| x > 5));
        assert_eq!(gt - lt, 3);
    }

    #[test]
    fn partition_single_element() {
        let mut v = vec![42];
        assert_eq!(partition_three_way(&mut v, 0, &mut i32::cmp), (0, 1));
    }
}
