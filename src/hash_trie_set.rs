//! Persistent (immutable) hash set.
//!
//! This module provides [`HashTrieSet`], an immutable hash set
//! that uses [`HashTrieMap`] internally for efficient operations.
//!
//! # Overview
//!
//! `HashTrieSet` is a wrapper around `HashTrieMap<T, ()>` that provides
//! set operations like union, intersection, difference, and symmetric
//! difference.
//!
//! - O(depth) contains, insert, remove (expected O(log n))
//! - O(1) len and `is_empty`
//!
//! All operations return new sets without modifying the original,
//! and structural sharing ensures memory efficiency.
//!
//! # Examples
//!
//! ```rust
//! use skewtrie::HashTrieSet;
//!
//! let set = HashTrieSet::new().insert(1).insert(2).insert(3);
//!
//! assert!(set.contains(&1));
//! assert!(!set.contains(&4));
//!
//! // Structural sharing: the original set is preserved
//! let updated = set.insert(4);
//! assert_eq!(set.len(), 3);      // Original unchanged
//! assert_eq!(updated.len(), 4);  // New version
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use crate::hash_trie_map::{HashTrieMap, HashTrieMapIntoIterator, HashTrieMapIterator};

/// A persistent (immutable) hash set.
///
/// `HashTrieSet` stores elements as the keys of a [`HashTrieMap`] with
/// unit values, inheriting its hash-ordered tree, its borrowed-key
/// lookups, and its shape-independent equality and hashing.
///
/// # Examples
///
/// ```rust
/// use skewtrie::HashTrieSet;
///
/// let set: HashTrieSet<&str> = ["a", "b", "c"].into_iter().collect();
/// assert_eq!(set.len(), 3);
/// assert!(set.contains(&"b"));
/// ```
#[derive(Clone)]
pub struct HashTrieSet<T> {
    map: HashTrieMap<T, ()>,
}

impl<T> HashTrieSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use skewtrie::HashTrieSet;
    ///
    /// let set: HashTrieSet<i32> = HashTrieSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            map: HashTrieMap::new(),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns an iterator over the elements, in ascending element-hash
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use skewtrie::HashTrieSet;
    ///
    /// let set: HashTrieSet<i32> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(set.iter().count(), 3);
    /// ```
    #[must_use]
    pub fn iter(&self) -> HashTrieSetIterator<'_, T> {
        HashTrieSetIterator {
            entries: self.map.iter(),
        }
    }
}

impl<T: Clone + Hash + Eq> HashTrieSet<T> {
    /// Creates a set containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use skewtrie::HashTrieSet;
    ///
    /// let set = HashTrieSet::singleton(42);
    /// assert!(set.contains(&42));
    /// assert_eq!(set.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().insert(element)
    }

    /// Returns `true` if the set contains the given element.
    ///
    /// The element may be any borrowed form of the set's element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use skewtrie::HashTrieSet;
    ///
    /// let set = HashTrieSet::singleton("key".to_string());
    /// assert!(set.contains("key"));
    /// assert!(!set.contains("other"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(element)
    }

    /// Adds an element to the set.
    ///
    /// Inserting an element that is already present returns an
    /// equivalent set. This operation never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use skewtrie::HashTrieSet;
    ///
    /// let set = HashTrieSet::new().insert(1).insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    #[must_use]
    pub fn insert(&self, element: T) -> Self {
        Self {
            map: self.map.insert(element, ()),
        }
    }

    /// Adds an element only if it is absent.
    ///
    /// Returns `None` when the element is already present: the operation
    /// is refused and the original set is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use skewtrie::HashTrieSet;
    ///
    /// let set = HashTrieSet::singleton(1);
    /// assert!(set.try_insert(1).is_none());
    /// assert_eq!(set.try_insert(2).unwrap().len(), 2);
    /// ```
    #[must_use]
    pub fn try_insert(&self, element: T) -> Option<Self> {
        self.map.try_insert(element, ()).map(|map| Self { map })
    }

    /// Removes an element from the set.
    ///
    /// Returns `None` when the element is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use skewtrie::HashTrieSet;
    ///
    /// let set: HashTrieSet<&str> = ["a", "b", "c"].into_iter().collect();
    ///
    /// let removed = set.remove(&"b").unwrap();
    /// assert_eq!(removed.len(), 2);
    /// assert!(!removed.contains(&"b"));
    ///
    /// assert!(set.remove(&"d").is_none());
    /// ```
    #[must_use]
    pub fn remove<Q>(&self, element: &Q) -> Option<Self>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.remove(element).map(|map| Self { map })
    }

    /// Returns the union of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use skewtrie::HashTrieSet;
    ///
    /// let set_a: HashTrieSet<i32> = [1, 2, 3].into_iter().collect();
    /// let set_b: HashTrieSet<i32> = [2, 3, 4].into_iter().collect();
    /// assert_eq!(set_a.union(&set_b).len(), 4);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        other
            .iter()
            .fold(self.clone(), |set, element| set.insert(element.clone()))
    }

    /// Returns the intersection of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use skewtrie::HashTrieSet;
    ///
    /// let set_a: HashTrieSet<i32> = [1, 2, 3].into_iter().collect();
    /// let set_b: HashTrieSet<i32> = [2, 3, 4].into_iter().collect();
    /// assert_eq!(set_a.intersection(&set_b).len(), 2);
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.iter()
            .filter(|element| other.contains(*element))
            .cloned()
            .collect()
    }

    /// Returns the elements of `self` that are not in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use skewtrie::HashTrieSet;
    ///
    /// let set_a: HashTrieSet<i32> = [1, 2, 3].into_iter().collect();
    /// let set_b: HashTrieSet<i32> = [2, 3, 4].into_iter().collect();
    /// assert_eq!(set_a.difference(&set_b).len(), 1);
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.iter()
            .filter(|element| !other.contains(*element))
            .cloned()
            .collect()
    }

    /// Returns the elements present in exactly one of the two sets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use skewtrie::HashTrieSet;
    ///
    /// let set_a: HashTrieSet<i32> = [1, 2, 3].into_iter().collect();
    /// let set_b: HashTrieSet<i32> = [2, 3, 4].into_iter().collect();
    /// assert_eq!(set_a.symmetric_difference(&set_b).len(), 2);
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        self.difference(other).union(&other.difference(self))
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over a [`HashTrieSet`]'s elements.
pub struct HashTrieSetIterator<'a, T> {
    entries: HashTrieMapIterator<'a, T, ()>,
}

impl<'a, T> Iterator for HashTrieSetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(element, ())| element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<T> ExactSizeIterator for HashTrieSetIterator<'_, T> {}

/// Owning iterator over a [`HashTrieSet`]'s elements.
pub struct HashTrieSetIntoIterator<T> {
    entries: HashTrieMapIntoIterator<T, ()>,
}

impl<T: Clone> Iterator for HashTrieSetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(element, ())| element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<T: Clone> ExactSizeIterator for HashTrieSetIntoIterator<T> {}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Default for HashTrieSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Hash + Eq> FromIterator<T> for HashTrieSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |set, element| set.insert(element))
    }
}

impl<T: Clone> IntoIterator for HashTrieSet<T> {
    type Item = T;
    type IntoIter = HashTrieSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        HashTrieSetIntoIterator {
            entries: self.map.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a HashTrieSet<T> {
    type Item = &'a T;
    type IntoIter = HashTrieSetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone + Hash + Eq> PartialEq for HashTrieSet<T> {
    /// Content equality, independent of insertion order.
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<T: Clone + Hash + Eq> Eq for HashTrieSet<T> {}

impl<T: Hash> Hash for HashTrieSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.map.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for HashTrieSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for HashTrieSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("HashTrieSet[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{element}")?;
        }
        formatter.write_str("]")
    }
}

// =============================================================================
// Tests
// =============================================================================
