//! Element-by-element shifting.

/// Rotate left by `k`, one position at a time.
pub fn shift_left<T>(v: &mut [T], k: usize) {
    for _ in 0..k {
        for i in 1..v.len() {
            v.swap(i - 1, i);
        }
    }
}

/// Rotate right by `k`, one position at a time.
pub fn shift_right<T>(v: &mut [T], k: usize) {
    for _ in 0..k {
        for i in (1..v.len()).rev() {
            v.swap(i - 1, i);
        }
    }
}
