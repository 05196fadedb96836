//! wordbucket: an in-memory wordlist with case-insensitive, O(1) expected
//! membership queries over a fixed number of hash buckets.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: load a whitespace-separated wordlist once, answer "is this a
//!   word?" any number of times, and release everything in one call.
//! - Layers:
//!   - `Word`: owned, bounds-checked word (1..=`LENGTH` bytes) compared
//!     with ASCII case folding.
//!   - `BucketHash` / `PrefixHash`: bucket selection. The default folds the
//!     first three letters as base-26 digits into one of `N` = 26^3 buckets.
//!   - `BucketTable<H>`: structural layer. `N` bucket heads over a
//!     `SlotMap` arena; each entry links to the next entry of its chain by
//!     key, and new entries are prepended.
//!   - `Dictionary<H>`: public API (`load`, `check`, `size`, `unload`) plus
//!     `LoadOptions`.
//!
//! Constraints
//! - Single-threaded; callers serialize access themselves.
//! - Fixed bucket count; no resizing, no removal of single words.
//! - Duplicates in the wordlist are stored as separate entries.
//! - Lookups report membership only; stored words are never handed out.
//!
//! Failure semantics
//! - An unopenable source leaves the table untouched.
//! - Allocation failure, an oversized token, or a read error aborts the
//!   load and keeps the words inserted so far, counted, unless
//!   `LoadOptions::rollback_on_error` is set.
//! - `unload` cannot fail and may be called repeatedly; after it, `check`
//!   returns `false` for every word and a new `load` is allowed.
//!
//! Hashing notes
//! - `hash` does not validate its input. Non-letters produce digits outside
//!   `0..26`; arithmetic wraps as unsigned 32-bit so the bucket stays in
//!   range and deterministic.
//!
//! Example
//!
//! ```
//! use std::io::Cursor;
//! use wordbucket::Dictionary;
//!
//! let mut dict = Dictionary::new();
//! dict.load_reader(Cursor::new("apple\nBanana\ncherry\n")).unwrap();
//! assert_eq!(dict.size(), 3);
//! assert!(dict.check("APPLE"));
//! assert!(!dict.check("durian"));
//! assert!(dict.unload());
//! ```

pub mod bucket_table;
mod bucket_table_proptest;
mod dictionary;
mod error;
pub mod hash;
mod word;

// Public surface
pub use bucket_table::TableStats;
pub use dictionary::{Dictionary, LoadOptions, OversizedPolicy};
pub use error::{LoadError, WordError};
pub use hash::{hash, BucketHash, PrefixHash, N};
pub use word::{Word, LENGTH};
