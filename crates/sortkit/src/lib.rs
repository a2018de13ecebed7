//! # sortkit: Classical Sorting, Order Statistics and Rotation for Rust
//!
//! A small library of textbook algorithms behind uniform contracts. Each
//! family exposes several interchangeable strategies that accept the same
//! input, honor the same edge-case policy and report failures with the same
//! fixed messages.
//!
//! ## Engines
//!
//! - **Sorting** ([`SortingEngine`](prelude::SortingEngine)): bubble,
//!   selection, insertion, top-down merge, bottom-up merge, quicksort and
//!   heapsort. Every strategy sorts a slice in place and a singly-linked
//!   list by relinking its nodes.
//! - **Order statistics** ([`MedianFinder`](prelude::MedianFinder)):
//!   brute force, bounded priority queue and quickselect for k-th smallest,
//!   minimum, maximum and median queries.
//! - **Rotation** ([`RotationEngine`](prelude::RotationEngine)): shift,
//!   reversal, juggling and block swap.
//!
//! ## Quick Start
//!
//! ### Sorting
//!
//! ```rust
//! use sortkit::prelude::*;
//!
//! let mut data = vec![10, 7, 3, 1, 2, 11];
//!
//! let sorter = Sort::new().algorithm(Quick).seed(42).build()?;
//! sorter.sort(&mut data);
//! assert_eq!(data, vec![1, 2, 3, 7, 10, 11]);
//!
//! // Lists are sorted by relinking; the new head is handed back.
//! let head = ListNode::chain([10, 7, 3, 1, 2, 11]);
//! let head = Sort::new().algorithm(BottomUpMerge).build()?.sort_list(head)?;
//! assert_eq!(head.to_string(), "1 -> 2 -> 3 -> 7 -> 10 -> 11");
//! # Result::<(), SortkitError>::Ok(())
//! ```
//!
//! ### Order Statistics
//!
//! ```rust
//! use sortkit::prelude::*;
//!
//! let finder = Median::new().strategy(PriorityQueue).build()?;
//!
//! assert_eq!(finder.find_median(&[3, 1, 2, 5, 4])?, 3);
//! assert_eq!(finder.find_kth_smallest(&[3, 1, 2, 5, 4], 2)?, 2);
//! assert_eq!(finder.find_median(&["E", "A", "B", "D", "C"])?, "C");
//! # Result::<(), SortkitError>::Ok(())
//! ```
//!
//! ### Rotation
//!
//! ```rust
//! use sortkit::prelude::*;
//!
//! let mut data = [1, 2, 3, 4, 5, 6, 7];
//! let rotator = Rotate::new().method(Juggling).build()?;
//!
//! rotator.rotate(&mut data, 9, Left)?; // 9 mod 7 == 2
//! assert_eq!(data, [3, 4, 5, 6, 7, 1, 2]);
//! # Result::<(), SortkitError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Fallible operations return `Result<_, SortkitError>`. The `Display` text of
//! each error is stable and may be compared verbatim:
//!
//! ```rust
//! use sortkit::prelude::*;
//!
//! let finder = Median::new().build()?;
//!
//! match finder.find_kth_smallest(&[1], 2) {
//!     Ok(value) => println!("k-th smallest: {value}"),
//!     Err(e) => assert_eq!(e.to_string(), "k can only be 1 for a single-element array"),
//! }
//!
//! let err = finder.find_median(&[1.0, 2.0]).unwrap_err();
//! assert_eq!(err.to_string(), "Input has data-type which is not supported yet");
//! # Result::<(), SortkitError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments with `alloc`. Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! sortkit = { version = "0.3", default-features = false }
//! ```
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - errors, element model, list nodes and pivot RNG.
mod primitives;

// Layer 2: Algorithms - sorting algorithms and partitioning.
mod algorithms;

// Layer 3: Statistics - k-th smallest selection strategies.
mod statistics;

// Layer 4: Rotation - in-place rotation strategies.
mod rotation;

// Layer 5: Engine - validation and the engine contracts.
mod engine;

// High-level fluent API for choosing engines.
mod api;

pub use api::*;

// Standard sortkit prelude.
pub mod prelude {
    pub use crate::api::{
        Algorithm::{Bubble, BottomUpMerge, Heap, Insertion, Quick, Selection, TopDownMerge},
        BottomUpMergeSort, BruteForceMedianFinder, BubbleSort, Direction,
        Direction::{Left, Right},
        Element, ElementKind, HeapOrientation,
        HeapOrientation::{Max, Min},
        HeapSort, InsertionSort, JugglingRotation, LinkedList, ListNode, MedianBuilder as Median,
        MedianFinder, PQMedianFinder, QuickSelectMedianFinder, QuickSort, ReversalRotation,
        RotationBuilder as Rotate, RotationEngine,
        RotationMethod::{BlockSwap, Juggling, Reversal, Shift},
        SelectionSort, ShiftRotation, SortBuilder as Sort, SortingEngine, SortkitError,
        Strategy::{BruteForce, PriorityQueue, QuickSelect},
        TopDownMergeSort, BlockSwapRotation,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod statistics {
        pub use crate::statistics::*;
    }
    pub mod rotation {
        pub use crate::rotation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
