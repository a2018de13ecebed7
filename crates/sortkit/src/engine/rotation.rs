//! Rotation strategies behind a common contract.
//!
//! ## Purpose
//!
//! This module defines [`RotationEngine`] and its four strategies. The
//! amount is reduced modulo the slice length before the algorithm runs.
//!
//! ## Design notes
//!
//! * **Direction support**: Juggling and block swap are defined for left
//!   rotation only and refuse right rotation with
//!   [`SortkitError::UnsupportedOperation`] instead of rotating the wrong way.
//! * **Lists**: No strategy rotates linked lists; `rotate_list` always fails
//!   and leaves the list untouched.

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::SortkitError;
use crate::primitives::list::Link;
use crate::rotation::Direction;
use crate::rotation::block_swap::block_swap_left;
use crate::rotation::juggling::juggle_left;
use crate::rotation::reversal::{reverse_left, reverse_right};
use crate::rotation::shift::{shift_left, shift_right};

/// Operation name reported when a list is passed to a rotation strategy.
pub const LIST_ROTATION: &str = "Linked-list rotation";

// ============================================================================
// Contract
// ============================================================================

/// A rotation algorithm.
pub trait RotationEngine<T> {
    /// Short algorithm name.
    fn name(&self) -> &'static str;

    /// Whether the strategy can rotate in `direction`.
    fn supports(&self, direction: Direction) -> bool;

    /// Rotate `data` by `k` positions in `direction`.
    ///
    /// `k` is reduced modulo `data.len()`; empty input is a no-op.
    fn rotate(&self, data: &mut [T], k: usize, direction: Direction) -> Result<(), SortkitError>;

    /// Linked lists cannot be rotated by any strategy.
    fn rotate_list(&self, _head: &mut Link<T>, _k: usize, _direction: Direction) -> Result<(), SortkitError> {
        Err(SortkitError::UnsupportedOperation {
            algorithm: self.name(),
            operation: LIST_ROTATION,
        })
    }
}

// Check direction support, reduce `k`, and run `kernel` unless nothing moves.
fn run_kernel<T, E, K>(
    engine: &E,
    data: &mut [T],
    k: usize,
    direction: Direction,
    kernel: K,
) -> Result<(), SortkitError>
where
    E: RotationEngine<T>,
    K: FnOnce(&mut [T], usize),
{
    Validator::validate_direction(engine.name(), direction, engine.supports(direction))?;
    let k = Validator::reduce_rotation(data.len(), k);
    if k != 0 {
        kernel(data, k);
    }
    Ok(())
}

// ============================================================================
// Strategies
// ============================================================================

/// Brute force: shift by one position, `k` times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShiftRotation;

impl<T> RotationEngine<T> for ShiftRotation {
    fn name(&self) -> &'static str {
        "Shift"
    }

    fn supports(&self, _direction: Direction) -> bool {
        true
    }

    fn rotate(&self, data: &mut [T], k: usize, direction: Direction) -> Result<(), SortkitError> {
        run_kernel(self, data, k, direction, |data, k| match direction {
            Direction::Left => shift_left(data, k),
            Direction::Right => shift_right(data, k),
        })
    }
}

/// Doug McIlroy's three-reversal rotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReversalRotation;

impl<T> RotationEngine<T> for ReversalRotation {
    fn name(&self) -> &'static str {
        "Reversal"
    }

    fn supports(&self, _direction: Direction) -> bool {
        true
    }

    fn rotate(&self, data: &mut [T], k: usize, direction: Direction) -> Result<(), SortkitError> {
        run_kernel(self, data, k, direction, |data, k| match direction {
            Direction::Left => reverse_left(data, k),
            Direction::Right => reverse_right(data, k),
        })
    }
}

/// Jon Bentley's juggling rotation. Left only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JugglingRotation;

impl<T> RotationEngine<T> for JugglingRotation {
    fn name(&self) -> &'static str {
        "Juggling"
    }

    fn supports(&self, direction: Direction) -> bool {
        direction == Direction::Left
    }

    fn rotate(&self, data: &mut [T], k: usize, direction: Direction) -> Result<(), SortkitError> {
        run_kernel(self, data, k, direction, juggle_left)
    }
}

/// Gries-Mills block-swap rotation. Left only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockSwapRotation;

impl<T> RotationEngine<T> for BlockSwapRotation {
    fn name(&self) -> &'static str {
        "BlockSwap"
    }

    fn supports(&self, direction: Direction) -> bool {
        direction == Direction::Left
    }

    fn rotate(&self, data: &mut [T], k: usize, direction: Direction) -> Result<(), SortkitError> {
        run_kernel(self, data, k, direction, block_swap_left)
    }
}
