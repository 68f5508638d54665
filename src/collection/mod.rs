//! Insertion-ordered unique collections.
//!
//! - [`UniqueCollection`]: A mutable collection of unique values with a
//!   chainable, functional-style API
//! - [`unique_collection!`](crate::unique_collection): Literal syntax for
//!   building one
//!
//! # Fast Hashing
//!
//! The hasher only decides where values land in the hash table; it never
//! changes which values count as equal or the order they are visited in.
//! With the `fxhash` or `ahash` feature enabled, aliases for the faster
//! (non-DoS-resistant) hashers are available:
//!
//! - `FxUniqueCollection<T>` (feature `fxhash`)
//! - `AUniqueCollection<T>` (feature `ahash`)
//!
//! # Examples
//!
//! ```rust
//! use unique_collection::collection::UniqueCollection;
//! use unique_collection::unique_collection;
//!
//! let tags = unique_collection!["rust", "set", "rust"];
//! assert_eq!(tags.to_vec(), vec!["rust", "set"]);
//!
//! let lengths: UniqueCollection<usize> = tags.values().map(|tag| tag.len()).collect();
//! assert_eq!(lengths.to_vec(), vec![4, 3]);
//! ```

mod macros;
mod unique_collection;

pub use unique_collection::IntoValues;
pub use unique_collection::UniqueCollection;
pub use unique_collection::Values;

/// A [`UniqueCollection`] hashed with `FxHash`.
#[cfg(feature = "fxhash")]
pub type FxUniqueCollection<T> = UniqueCollection<T, rustc_hash::FxBuildHasher>;

/// A [`UniqueCollection`] hashed with `aHash`.
#[cfg(feature = "ahash")]
pub type AUniqueCollection<T> = UniqueCollection<T, ahash::RandomState>;
