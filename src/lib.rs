//! # Chain Table
//!
//! A string-keyed hash table using separate chaining with automatic,
//! load-factor driven rehashing.
//!
//! Colliding keys share a bucket as a singly linked chain of owned nodes.
//! The capacity doubles when the load factor climbs past 0.7 and halves when
//! it falls below 0.2, never dropping under 8 slots. Keys are placed with one
//! of two configurable digests: DJB2 (the default) or 64-bit FNV-1.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chaintable::ChainTable;
//!
//! // Create a new table
//! let mut table = ChainTable::new();
//!
//! // Insert values
//! table.insert("apple".to_string(), 1);
//! table.insert("banana".to_string(), 2);
//!
//! // Retrieve values
//! assert_eq!(table.get("apple"), Some(&1));
//!
//! // Overwrites return the previous value
//! assert_eq!(table.insert("apple".to_string(), 10), Some(1));
//!
//! // Remove values
//! assert_eq!(table.remove("apple"), Some(10));
//! assert_eq!(table.get("apple"), None);
//! ```
//!
//! ## Picking the hash function
//!
//! ```rust
//! use chaintable::{ChainTable, HashKind};
//!
//! let kind: HashKind = "fnv1".parse().unwrap();
//! let mut table = ChainTable::with_hash(kind);
//!
//! table.insert("apple".to_string(), 1);
//! assert_eq!(table.get("apple"), Some(&1));
//! assert_eq!(table.hash_kind(), HashKind::Fnv1);
//! ```
//!
//! ## Counting words
//!
//! ```rust
//! let counts = chaintable::word_count("Hello, my cat. And my cat doesn't say \"hello\" back.");
//!
//! assert_eq!(counts.get("hello"), Some(&2));
//! assert_eq!(counts.get("doesnt"), Some(&1));
//! ```

/// Module implementing the chained table and its resize policy
mod chained_table;
/// Module implementing the DJB2 and FNV-1 digests and their selection
mod hash;
/// Utility functions and traits for the table
mod utils;
/// Module implementing the word-frequency tokenizer
mod word_count;

pub use chained_table::{ChainTable, Iter, MIN_CAPACITY};
pub use hash::{HashKind, ParseHashKindError, djb2, fnv1};
pub use utils::TableExtensions;
pub use word_count::word_count;
