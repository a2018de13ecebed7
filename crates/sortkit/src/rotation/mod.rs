//! Layer 4: Rotation
//!
//! # Purpose
//!
//! This layer provides in-place slice rotation strategies. All functions
//! assume the amount has already been reduced modulo the slice length;
//! `k == 0` and empty slices are no-ops.
//!
//! - **Shift**: one-step shifts repeated `k` times. O(n·k).
//! - **Reversal** (Doug McIlroy): three reversals. O(n).
//! - **Juggling** (Jon Bentley): follows `gcd(n, k)` cycles. O(n).
//! - **Block swap** (Gries-Mills): swaps equal-length blocks. O(n).
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Rotation ← You are here
//!   ↓
//! Layer 3: Statistics
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Element-by-element shifting.
pub mod shift;

/// Three-reversal rotation.
pub mod reversal;

/// Cycle-following rotation.
pub mod juggling;

/// Block-swap rotation.
pub mod block_swap;

/// Direction in which elements move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// `[1, 2, 3, 4]` rotated left by 1 is `[2, 3, 4, 1]`.
    #[default]
    Left,

    /// `[1, 2, 3, 4]` rotated right by 1 is `[4, 1, 2, 3]`.
    Right,
}

impl Direction {
    /// Human-readable operation name, used in error messages.
    pub fn operation(self) -> &'static str {
        match self {
            Self::Left => "Left rotation",
            Self::Right => "Right rotation",
        }
    }
}
