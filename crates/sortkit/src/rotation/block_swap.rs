//! Block-swap rotation.
//!
//! With `v = A B` and `|A| = k`, the shorter block is swapped with the far
//! end of the longer one, which puts it in its final place and leaves a
//! smaller instance of the same problem. Iterative, O(n) swaps.

/// Rotate left by `k`. Requires `k <= v.len()`.
pub fn block_swap_left<T>(v: &mut [T], k: usize) {
    let len = v.len();
    if k == 0 || k == len {
        return;
    }
    // `a` and `b` are the lengths of the unresolved left and right blocks.
    let (mut a, mut b) = (k, len - k);
    while a != b {
        if a < b {
            swap_blocks(v, k - a, k + b - a, a);
            b -= a;
        } else {
            swap_blocks(v, k - a, k, b);
            a -= b;
        }
    }
    swap_blocks(v, k - a, k, a);
}

fn swap_blocks<T>(v: &mut [T], first: usize, second: usize, len: usize) {
    for offset in 0..len {
        v.swap(first + offset, second + offset);
    }
}
