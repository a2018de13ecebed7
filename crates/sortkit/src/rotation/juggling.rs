//! Cycle-following rotation.
//!
//! A left rotation by `k` moves position `i + k` to `i`. Those moves form
//! `gcd(n, k)` disjoint cycles; each cycle is walked once, carrying the
//! displaced element along with swaps.

/// Rotate left by `k`. Requires `k < v.len()` or `v` empty.
pub fn juggle_left<T>(v: &mut [T], k: usize) {
    let len = v.len();
    if len == 0 || k == 0 {
        return;
    }
    for start in 0..gcd(len, k) {
        let mut current = start;
        loop {
            let next = (current + k) % len;
            if next == start {
                break;
            }
            v.swap(current, next);
            current = next;
        }
    }
}

/// Greatest common divisor by Euclid's algorithm.
pub fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_values() {
        assert_eq!(gcd(12, 8), 4);
        assert_eq!(gcd(7, 3), 1);
        assert_eq!(gcd(6, 0), 6);
    }
}
