//! # skewtrie
//!
//! Persistent (immutable) data structures built on structural sharing:
//! a skew-binary random-access list and a family of hash-trie keyed
//! collections.
//!
//! ## Overview
//!
//! - [`SkewList`]: Persistent random-access list (skew binary heaps)
//! - [`HashTrieMap`]: Persistent hash map (hash-ordered search tree)
//! - [`HashTrieSet`]: Persistent hash set (based on [`HashTrieMap`])
//! - [`HashTrieMultiSet`]: Persistent multiset (key occurrence counts)
//!
//! Every "mutating" operation returns a new structure and leaves the
//! receiver untouched. Old and new versions share all unmodified nodes,
//! so deriving a version costs memory proportional to the rewritten
//! path, not to the whole collection.
//!
//! ```rust
//! use skewtrie::SkewList;
//!
//! let list = SkewList::new().cons(3).cons(2).cons(1);
//! let extended = list.cons(0);
//!
//! assert_eq!(list.len(), 3);     // Original unchanged
//! assert_eq!(extended.len(), 4); // New list
//! assert_eq!(list.get(0), Some(&1));
//! ```
//!
//! ## Failure model
//!
//! Absence is never an error: fallible operations return `Option` and
//! build nothing on refusal, leaving the receiver as it was. The library
//! has no panicking paths for out-of-range indices or missing keys.
//!
//! ## Feature Flags
//!
//! - `arc`: Use `Arc` instead of `Rc` for structural sharing, making
//!   every structure `Send + Sync` when its elements are
//! - `fxhash`: Hash keys with `rustc-hash`'s `FxHasher`
//! - `ahash`: Hash keys with `ahash`

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod hash_trie;
mod hash_trie_map;
mod hash_trie_multi_set;
mod hash_trie_set;
mod skew_list;

pub use hash_trie_map::HashTrieMap;
pub use hash_trie_map::HashTrieMapIntoIterator;
pub use hash_trie_map::HashTrieMapIterator;
pub use hash_trie_multi_set::HashTrieMultiSet;
pub use hash_trie_multi_set::HashTrieMultiSetIterator;
pub use hash_trie_set::HashTrieSet;
pub use hash_trie_set::HashTrieSetIntoIterator;
pub use hash_trie_set::HashTrieSetIterator;
pub use skew_list::SkewList;
pub use skew_list::SkewListIntoIterator;
pub use skew_list::SkewListIterator;

// =============================================================================
// Tests
// =============================================================================
