//! Insertion-ordered unique collection with a chainable API.
//!
//! This module provides [`UniqueCollection`], a mutable collection that
//! keeps at most one copy of each value and remembers the order in which
//! values were first added.
//!
//! # Overview
//!
//! `UniqueCollection` wraps an insertion-ordered hash set and layers two
//! kinds of API on top of it:
//!
//! - **Chainable mutation**: [`add`](UniqueCollection::add) and
//!   [`clear`](UniqueCollection::clear) return `&mut Self`, so calls can be
//!   strung together
//! - **Functional traversal**: [`filter`](UniqueCollection::filter),
//!   [`map`](UniqueCollection::map), [`find`](UniqueCollection::find) and
//!   [`for_each`](UniqueCollection::for_each) walk the values in insertion
//!   order, handing every callback the collection itself as a second argument
//!
//! `filter` and `map` build fresh collections and never touch the source.
//! Because the result of `map` is itself unique, transformed values that
//! compare equal collapse into one entry (the first one produced wins).
//!
//! # Time Complexity
//!
//! | Operation            | Complexity        |
//! |----------------------|-------------------|
//! | `add`                | O(1) average      |
//! | `has`                | O(1) average      |
//! | `delete`             | O(n)              |
//! | `clear`              | O(n)              |
//! | `size` / `is_empty`  | O(1)              |
//! | `values`             | O(1) + O(n)       |
//! | `find`               | O(k), k = matches tried |
//! | `filter` / `map`     | O(n)              |
//!
//! **Note**: `delete` shifts the values that follow the removed one so that
//! the insertion order of the survivors is preserved.
//!
//! # Examples
//!
//! ```rust
//! use unique_collection::collection::UniqueCollection;
//!
//! let mut collection = UniqueCollection::of([3, 1, 3, 2]);
//! assert_eq!(collection.to_vec(), vec![3, 1, 2]);
//!
//! // Mutators chain
//! collection.add(4).add(1).add(5);
//! assert_eq!(collection.to_vec(), vec![3, 1, 2, 4, 5]);
//!
//! // Derived collections leave the source alone
//! let odd = collection.filter(|value, _| value % 2 != 0);
//! assert_eq!(odd.to_vec(), vec![3, 1, 5]);
//! assert_eq!(collection.size(), 5);
//!
//! // Colliding results of `map` collapse
//! let parity = collection.map(|value, _| value % 2);
//! assert_eq!(parity.to_vec(), vec![1, 0]);
//! ```

use indexmap::IndexSet;
use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash, RandomState};
use std::iter::FusedIterator;

use crate::compose::tap;

/// A collection of unique values that remembers insertion order.
///
/// Equality of values is the element type's own [`Eq`]/[`Hash`]. Adding a
/// value that is already present changes nothing: the stored value keeps
/// its original position.
///
/// # Type Parameters
///
/// * `T` - The element type
/// * `S` - The hasher builder, [`RandomState`] unless chosen explicitly
///
/// # Examples
///
/// ```rust
/// use unique_collection::collection::UniqueCollection;
///
/// let mut collection = UniqueCollection::new();
/// collection.add("b").add("a").add("b");
///
/// assert_eq!(collection.size(), 2);
/// assert!(collection.has("a"));
/// assert_eq!(collection.find(|value, _| value.starts_with('a')), Some(&"a"));
/// ```
#[derive(Clone)]
pub struct UniqueCollection<T, S = RandomState> {
    values: IndexSet<T, S>,
}

impl<T> UniqueCollection<T> {
    /// Creates a new empty collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_collection::collection::UniqueCollection;
    ///
    /// let collection: UniqueCollection<i32> = UniqueCollection::new();
    /// assert!(collection.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: IndexSet::new(),
        }
    }

    /// Creates a collection holding the given `values`.
    ///
    /// Duplicates in the input collapse to a single entry placed where the
    /// value first appeared. An empty input yields an empty collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_collection::collection::UniqueCollection;
    ///
    /// let collection = UniqueCollection::of([3, 1, 3, 2]);
    /// assert_eq!(collection.to_vec(), vec![3, 1, 2]);
    ///
    /// let empty = UniqueCollection::of(Vec::<i32>::new());
    /// assert!(empty.is_empty());
    /// ```
    #[must_use]
    pub fn of<I>(values: I) -> Self
    where
        T: Hash + Eq,
        I: IntoIterator<Item = T>,
    {
        values.into_iter().collect()
    }
}

impl<T, S> UniqueCollection<T, S> {
    /// Creates a new empty collection that hashes with `hasher`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::hash::RandomState;
    /// use unique_collection::collection::UniqueCollection;
    ///
    /// let mut collection = UniqueCollection::with_hasher(RandomState::new());
    /// collection.add(1);
    /// assert!(collection.has(&1));
    /// ```
    #[inline]
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            values: IndexSet::with_hasher(hasher),
        }
    }

    /// Returns the number of unique values in the collection.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the collection contains no values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_collection::collection::UniqueCollection;
    ///
    /// let mut collection = UniqueCollection::new();
    /// assert!(collection.is_empty());
    ///
    /// collection.add(42);
    /// assert!(!collection.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns `true` if the collection contains at least one value.
    #[inline]
    #[must_use]
    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Removes every value, returning the collection for chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_collection::collection::UniqueCollection;
    ///
    /// let mut collection = UniqueCollection::of([1, 2, 3]);
    /// collection.clear().add(4);
    /// assert_eq!(collection.to_vec(), vec![4]);
    /// ```
    pub fn clear(&mut self) -> &mut Self {
        tap(self, |collection| collection.values.clear())
    }

    /// Returns an iterator over references to the values in insertion order.
    ///
    /// The iterator borrows the collection, so the collection cannot be
    /// mutated while it is alive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_collection::collection::UniqueCollection;
    ///
    /// let collection = UniqueCollection::of(["x", "y", "x"]);
    /// let values: Vec<&&str> = collection.values().collect();
    /// assert_eq!(values, vec![&"x", &"y"]);
    /// ```
    #[inline]
    pub fn values(&self) -> Values<'_, T> {
        Values {
            inner: self.values.iter(),
        }
    }

    /// Copies the values into a `Vec`, in insertion order.
    ///
    /// The result is a snapshot: later changes to the collection do not
    /// show up in it.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.values.iter().cloned().collect()
    }

    /// Runs `action` once for every value, in insertion order.
    ///
    /// The collection is passed as the second argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_collection::collection::UniqueCollection;
    ///
    /// let collection = UniqueCollection::of([1, 2, 3]);
    /// let mut lines = Vec::new();
    /// collection.for_each(|value, collection| {
    ///     lines.push(format!("{value}/{}", collection.size()));
    /// });
    /// assert_eq!(lines, vec!["1/3", "2/3", "3/3"]);
    /// ```
    pub fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(&T, &Self),
    {
        for value in &self.values {
            action(value, self);
        }
    }

    /// Runs a fallible `action` for every value, stopping at the first error.
    ///
    /// The error is returned exactly as `action` produced it.
    ///
    /// # Errors
    ///
    /// Returns the first `Err` produced by `action`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_collection::collection::UniqueCollection;
    ///
    /// let collection = UniqueCollection::of([1, 2, 3]);
    /// let mut visited = Vec::new();
    /// let result = collection.try_for_each(|value, _| {
    ///     visited.push(*value);
    ///     if *value == 2 { Err("stop") } else { Ok(()) }
    /// });
    ///
    /// assert_eq!(result, Err("stop"));
    /// assert_eq!(visited, vec![1, 2]);
    /// ```
    pub fn try_for_each<E, F>(&self, mut action: F) -> Result<(), E>
    where
        F: FnMut(&T, &Self) -> Result<(), E>,
    {
        self.values
            .iter()
            .try_for_each(|value| action(value, self))
    }

    /// Returns the first value, in insertion order, for which `predicate`
    /// returns `true`, or `None` when no value matches.
    ///
    /// Evaluation stops at the first match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_collection::collection::UniqueCollection;
    ///
    /// let collection = UniqueCollection::of([2, 4, 5, 6]);
    /// assert_eq!(collection.find(|value, _| value % 2 != 0), Some(&5));
    /// assert_eq!(collection.find(|value, _| *value > 10), None);
    /// ```
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T, &Self) -> bool,
    {
        self.values.iter().find(|&value| predicate(value, self))
    }

    /// Fallible counterpart of [`find`](Self::find).
    ///
    /// # Errors
    ///
    /// Returns the first `Err` produced by `predicate`. Values after the
    /// failing one are not visited.
    pub fn try_find<E, P>(&self, mut predicate: P) -> Result<Option<&T>, E>
    where
        P: FnMut(&T, &Self) -> Result<bool, E>,
    {
        for value in &self.values {
            if predicate(value, self)? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }
}

impl<T: Hash + Eq, S: BuildHasher> UniqueCollection<T, S> {
    /// Adds `value` to the collection, returning the collection for chaining.
    ///
    /// If an equal value is already present nothing changes; the existing
    /// value keeps its position.
    ///
    /// # Complexity
    ///
    /// O(1) on average.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_collection::collection::UniqueCollection;
    ///
    /// let mut collection = UniqueCollection::new();
    /// collection.add(1).add(2).add(1);
    ///
    /// assert_eq!(collection.size(), 2);
    /// assert_eq!(collection.to_vec(), vec![1, 2]);
    /// ```
    pub fn add(&mut self, value: T) -> &mut Self {
        tap(self, |collection| {
            collection.values.insert(value);
        })
    }

    /// Removes `value`, returning `true` if it was present.
    ///
    /// The values after it keep their relative order. Removing an absent
    /// value is not an error and returns `false`.
    ///
    /// This method accepts borrowed forms of the element type, so a
    /// `UniqueCollection<String>` can be queried with a `&str`.
    ///
    /// # Complexity
    ///
    /// O(n): the following values shift down by one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_collection::collection::UniqueCollection;
    ///
    /// let mut collection = UniqueCollection::of([1, 2, 2, 3]);
    /// assert!(collection.delete(&2));
    /// assert_eq!(collection.to_vec(), vec![1, 3]);
    /// assert!(!collection.delete(&2));
    /// ```
    pub fn delete<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.values.shift_remove(value)
    }

    /// Returns `true` if the collection contains `value`.
    ///
    /// Accepts borrowed forms of the element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_collection::collection::UniqueCollection;
    ///
    /// let collection = UniqueCollection::of(["hello".to_string()]);
    /// assert!(collection.has("hello"));
    /// assert!(!collection.has("world"));
    /// ```
    #[inline]
    #[must_use]
    pub fn has<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.values.contains(value)
    }

    /// Returns a new collection with every value for which `predicate`
    /// returns `true`, in insertion order.
    ///
    /// The source collection is not modified. The result hashes with a
    /// clone of this collection's hasher.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_collection::collection::UniqueCollection;
    ///
    /// let collection = UniqueCollection::of([1, 2, 3, 4, 5, 6]);
    /// let even = collection.filter(|value, _| value % 2 == 0);
    ///
    /// assert_eq!(even.to_vec(), vec![2, 4, 6]);
    /// assert_eq!(collection.size(), 6);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        T: Clone,
        S: Clone,
        P: FnMut(&T, &Self) -> bool,
    {
        let mut results = Self::with_hasher(self.values.hasher().clone());
        for value in &self.values {
            if predicate(value, self) {
                results.add(value.clone());
            }
        }
        results
    }

    /// Fallible counterpart of [`filter`](Self::filter).
    ///
    /// # Errors
    ///
    /// Returns the first `Err` produced by `predicate`. No partial result
    /// is returned in that case.
    pub fn try_filter<E, P>(&self, mut predicate: P) -> Result<Self, E>
    where
        T: Clone,
        S: Clone,
        P: FnMut(&T, &Self) -> Result<bool, E>,
    {
        let mut results = Self::with_hasher(self.values.hasher().clone());
        for value in &self.values {
            if predicate(value, self)? {
                results.add(value.clone());
            }
        }
        Ok(results)
    }

    /// Returns a new collection holding `transform` applied to every value.
    ///
    /// Results are added in insertion order of the source. Since the output
    /// is itself a unique collection, results that compare equal collapse
    /// into the first one produced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_collection::collection::UniqueCollection;
    ///
    /// let collection = UniqueCollection::of([1, 2, 3]);
    ///
    /// let doubled = collection.map(|value, _| value * 2);
    /// assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
    ///
    /// let parity = collection.map(|value, _| value % 2);
    /// assert_eq!(parity.to_vec(), vec![1, 0]);
    /// ```
    #[must_use]
    pub fn map<R, F>(&self, mut transform: F) -> UniqueCollection<R, S>
    where
        R: Hash + Eq,
        S: Clone,
        F: FnMut(&T, &Self) -> R,
    {
        let mut results: UniqueCollection<R, S> =
            UniqueCollection::with_hasher(self.values.hasher().clone());
        self.for_each(|value, collection| {
            results.add(transform(value, collection));
        });
        results
    }

    /// Fallible counterpart of [`map`](Self::map).
    ///
    /// # Errors
    ///
    /// Returns the first `Err` produced by `transform`. No partial result
    /// is returned in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_collection::collection::UniqueCollection;
    ///
    /// let collection = UniqueCollection::of(["1", "2", "x"]);
    /// let parsed = collection.try_map(|value, _| value.parse::<i32>());
    /// assert!(parsed.is_err());
    ///
    /// let collection = UniqueCollection::of(["1", "01", "2"]);
    /// let parsed = collection.try_map(|value, _| value.parse::<i32>()).unwrap();
    /// assert_eq!(parsed.to_vec(), vec![1, 2]);
    /// ```
    pub fn try_map<R, E, F>(&self, mut transform: F) -> Result<UniqueCollection<R, S>, E>
    where
        R: Hash + Eq,
        S: Clone,
        F: FnMut(&T, &Self) -> Result<R, E>,
    {
        let mut results: UniqueCollection<R, S> =
            UniqueCollection::with_hasher(self.values.hasher().clone());
        for value in &self.values {
            results.add(transform(value, self)?);
        }
        Ok(results)
    }
}

impl<T, S: Default> Default for UniqueCollection<T, S> {
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to the values of a [`UniqueCollection`], in
/// insertion order.
pub struct Values<'a, T> {
    inner: indexmap::set::Iter<'a, T>,
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Values<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Values<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Values<'_, T> {}

impl<T> Clone for Values<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// Owning iterator over the values of a [`UniqueCollection`], in insertion
/// order.
pub struct IntoValues<T> {
    inner: indexmap::set::IntoIter<T>,
}

impl<T> Iterator for IntoValues<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoValues<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoValues<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoValues<T> {}

// =============================================================================
// Standard traits
// =============================================================================

impl<T: Hash + Eq, S: BuildHasher + Default> FromIterator<T> for UniqueCollection<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: IndexSet::from_iter(iter),
        }
    }
}

impl<T: Hash + Eq, S: BuildHasher> Extend<T> for UniqueCollection<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for UniqueCollection<T> {
    fn from(values: [T; N]) -> Self {
        Self::of(values)
    }
}

impl<T: Hash + Eq> From<Vec<T>> for UniqueCollection<T> {
    fn from(values: Vec<T>) -> Self {
        Self::of(values)
    }
}

impl<T, S> IntoIterator for UniqueCollection<T, S> {
    type Item = T;
    type IntoIter = IntoValues<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoValues {
            inner: self.values.into_iter(),
        }
    }
}

impl<'a, T, S> IntoIterator for &'a UniqueCollection<T, S> {
    type Item = &'a T;
    type IntoIter = Values<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.values()
    }
}

impl<T, S1, S2> PartialEq<UniqueCollection<T, S2>> for UniqueCollection<T, S1>
where
    T: Hash + Eq,
    S1: BuildHasher,
    S2: BuildHasher,
{
    fn eq(&self, other: &UniqueCollection<T, S2>) -> bool {
        self.size() == other.size() && self.values().all(|value| other.has(value))
    }
}

impl<T: Hash + Eq, S: BuildHasher> Eq for UniqueCollection<T, S> {}

impl<T: fmt::Debug, S> fmt::Debug for UniqueCollection<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.values()).finish()
    }
}

impl<T: fmt::Display, S> fmt::Display for UniqueCollection<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for value in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{value}")?;
        }
        write!(formatter, "}}")
    }
}

static_assertions::assert_impl_all!(UniqueCollection<i32>: Clone, Default, fmt::Debug, Send, Sync);
static_assertions::assert_impl_all!(UniqueCollection<String>: Eq, Extend<String>, FromIterator<String>);
static_assertions::assert_not_impl_any!(UniqueCollection<std::rc::Rc<i32>>: Send, Sync);
