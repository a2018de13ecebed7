//! sortkit Demonstration
//!
//! This example walks through the three engine families:
//! - Sorting slices and linked lists with every algorithm
//! - Heap orientation for descending output
//! - Order statistics (k-th smallest, median) with each strategy
//! - Rotation, including the fixed errors for unsupported operations
//! - A small timing comparison on a long list
//!
//! Each scenario includes the expected output as comments.

#[cfg(feature = "std")]
use sortkit::prelude::*;
#[cfg(feature = "std")]
use sortkit::{Algorithm, Link, RotationMethod, Strategy};
#[cfg(feature = "std")]
use std::time::Instant;

#[cfg(feature = "std")]
fn main() -> Result<(), SortkitError> {
    println!("{}", "=".repeat(72));
    println!("sortkit - Sorting, Order Statistics and Rotation");
    println!("{}", "=".repeat(72));
    println!();

    example_1_sort_slices()?;
    example_2_sort_lists()?;
    example_3_heap_orientation()?;
    example_4_order_statistics()?;
    example_5_rotation()?;
    example_6_long_list_timing()?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
const ALGORITHMS: [Algorithm; 7] = [
    Bubble,
    Selection,
    Insertion,
    TopDownMerge,
    BottomUpMerge,
    Quick,
    Heap,
];

#[cfg(feature = "std")]
/// Example 1: Sorting Slices
/// Every algorithm sorts the same input in place
fn example_1_sort_slices() -> Result<(), SortkitError> {
    println!("Example 1: Sorting Slices");
    println!("{}", "-".repeat(72));

    for algorithm in ALGORITHMS {
        let sorter = Sort::new().algorithm(algorithm).build()?;
        let mut data = vec![10, 7, 3, 1, 2, 11];
        sorter.sort(&mut data);
        println!(
            "  {:<14} stable={:<5} {:?}",
            SortingEngine::<i32>::name(&sorter),
            SortingEngine::<i32>::is_stable(&sorter),
            data
        );
    }

    /* Expected Output:
      Bubble         stable=true  [1, 2, 3, 7, 10, 11]
      Selection      stable=false [1, 2, 3, 7, 10, 11]
      Insertion      stable=true  [1, 2, 3, 7, 10, 11]
      TopDownMerge   stable=true  [1, 2, 3, 7, 10, 11]
      BottomUpMerge  stable=true  [1, 2, 3, 7, 10, 11]
      Quick          stable=false [1, 2, 3, 7, 10, 11]
      Heap           stable=false [1, 2, 3, 7, 10, 11]
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Sorting Linked Lists
/// Lists are relinked and the new head is returned; null and empty lists are errors
fn example_2_sort_lists() -> Result<(), SortkitError> {
    println!("Example 2: Sorting Linked Lists");
    println!("{}", "-".repeat(72));

    let sorter = Sort::new().algorithm(TopDownMerge).build()?;
    let head = sorter.sort_list(ListNode::chain(["pear", "fig", "apple", "kiwi"]))?;
    println!("  Sorted list: {head}");

    let mut list: LinkedList<i32> = LinkedList::new();
    match sorter.sort_linked_list(&mut list) {
        Ok(()) => println!("  Unexpected success"),
        Err(e) => println!("  Empty list:  {e}"),
    }
    let null: Link<i32> = None;
    match sorter.sort_list(null) {
        Ok(_) => println!("  Unexpected success"),
        Err(e) => println!("  Null head:   {e}"),
    }

    /* Expected Output:
      Sorted list: apple -> fig -> kiwi -> pear
      Empty list:  List is empty
      Null head:   List head is null
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Heap Orientation
/// A min-heap exposes its natural extraction order, which is descending
fn example_3_heap_orientation() -> Result<(), SortkitError> {
    println!("Example 3: Heap Orientation");
    println!("{}", "-".repeat(72));

    for orientation in [Max, Min] {
        let sorter = Sort::new().algorithm(Heap).orientation(orientation).build()?;
        let mut data = vec![4, 8, 1, 9, 3];
        sorter.sort(&mut data);
        println!("  {orientation:?}: {data:?}");
    }

    /* Expected Output:
      Max: [1, 3, 4, 8, 9]
      Min: [9, 8, 4, 3, 1]
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 4: Order Statistics
/// All strategies agree; even lengths return the lower median
fn example_4_order_statistics() -> Result<(), SortkitError> {
    println!("Example 4: Order Statistics");
    println!("{}", "-".repeat(72));

    let numbers = [3, 1, 2, 5, 4, 6];
    let letters = ["E", "A", "B", "D", "C"];

    for strategy in [Strategy::BruteForce, Strategy::PriorityQueue, Strategy::QuickSelect] {
        let finder = Median::new().strategy(strategy).build()?;
        println!(
            "  {:<14} median={} 2nd={} min={} max={} letters={}",
            MedianFinder::<i32>::name(&finder),
            finder.find_median(&numbers)?,
            finder.find_kth_smallest(&numbers, 2)?,
            finder.find_minimum(&numbers)?,
            finder.find_maximum(&numbers)?,
            finder.find_median(&letters)?,
        );
    }

    let finder = Median::new().build()?;
    for err in [
        finder.find_median(&[] as &[i32]).unwrap_err(),
        finder.find_median(&[1.0, 2.0]).unwrap_err(),
        finder.find_kth_smallest(&[1], 2).unwrap_err(),
        finder.find_kth_smallest(&[1, 2, 3], 7).unwrap_err(),
    ] {
        println!("  Error: {err}");
    }

    /* Expected Output:
      BruteForce     median=3 2nd=2 min=1 max=6 letters=C
      PriorityQueue  median=3 2nd=2 min=1 max=6 letters=C
      QuickSelect    median=3 2nd=2 min=1 max=6 letters=C
      Error: Array is empty
      Error: Input has data-type which is not supported yet
      Error: k can only be 1 for a single-element array
      Error: k is higher than the highest index
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 5: Rotation
/// Amounts are reduced modulo the length; unsupported operations fail cleanly
fn example_5_rotation() -> Result<(), SortkitError> {
    println!("Example 5: Rotation");
    println!("{}", "-".repeat(72));

    for method in [
        RotationMethod::Shift,
        RotationMethod::Reversal,
        RotationMethod::Juggling,
        RotationMethod::BlockSwap,
    ] {
        let rotator = Rotate::new().method(method).build()?;
        let mut data = [1, 2, 3, 4, 5, 6, 7];
        rotator.rotate(&mut data, 9, Left)?;
        println!("  {method:?} left by 9: {data:?}");
    }

    let juggling = Rotate::new().method(Juggling).build()?;
    if let Err(e) = juggling.rotate(&mut [1, 2, 3], 1, Right) {
        println!("  Error: {e}");
    }
    let mut head = ListNode::chain([1, 2, 3]);
    if let Err(e) = juggling.rotate_list(&mut head, 1, Left) {
        println!("  Error: {e}");
    }

    /* Expected Output:
      Shift left by 9: [3, 4, 5, 6, 7, 1, 2]
      Reversal left by 9: [3, 4, 5, 6, 7, 1, 2]
      Juggling left by 9: [3, 4, 5, 6, 7, 1, 2]
      BlockSwap left by 9: [3, 4, 5, 6, 7, 1, 2]
      Error: Right rotation is not supported by the Juggling algorithm
      Error: Linked-list rotation is not supported by the Juggling algorithm
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 6: Long List Timing
/// The O(n log n) engines on a 200,000-node descending list
fn example_6_long_list_timing() -> Result<(), SortkitError> {
    println!("Example 6: Long List Timing");
    println!("{}", "-".repeat(72));

    let size = 200_000;
    for algorithm in [TopDownMerge, BottomUpMerge, Quick, Heap] {
        let sorter = Sort::new().algorithm(algorithm).build()?;
        let head = ListNode::chain((0..size).rev());

        let start = Instant::now();
        let sorted = sorter.sort_list(head)?;
        let elapsed = start.elapsed();

        println!(
            "  {:<14} {} nodes in {:>8.2?} (sorted: {})",
            SortingEngine::<i32>::name(&sorter),
            sorted.len(),
            elapsed,
            sorted.is_sorted()
        );
    }

    /* Expected Output (timings vary):
      TopDownMerge   200000 nodes in  12.34ms (sorted: true)
      BottomUpMerge  200000 nodes in  15.67ms (sorted: true)
      Quick          200000 nodes in   9.87ms (sorted: true)
      Heap           200000 nodes in  20.12ms (sorted: true)
    */

    println!();
    Ok(())
}
