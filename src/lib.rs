#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// The error returned when a table has no free slot left.
pub mod error;

pub mod hasher;

/// A fixed-capacity linear probing hash table with backward-shift deletion.
///
/// This module provides the [`ProbingHashTable`] itself, its [`Slot`] array
/// element, and the iterators over its entries.
pub mod probing_table;

pub use error::TableFull;
#[cfg(any(feature = "foldhash", feature = "std"))]
pub use hasher::DefaultHashBuilder;
pub use hasher::ProbeHasher;
pub use probing_table::ProbingHashTable;
pub use probing_table::Slot;
