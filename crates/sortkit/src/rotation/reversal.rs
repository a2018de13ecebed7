//! Three-reversal rotation.
//!
//! Rotating `AB` to `BA` is `reverse(reverse(A) reverse(B))`.

/// Rotate left by `k`. Requires `k <= v.len()`.
pub fn reverse_left<T>(v: &mut [T], k: usize) {
    v[..k].reverse();
    v[k..].reverse();
    v.reverse();
}

/// Rotate right by `k`. Requires `k <= v.len()`.
pub fn reverse_right<T>(v: &mut [T], k: usize) {
    let split = v.len() - k;
    reverse_left(v, split);
}
