//! # unique-collection
//!
//! An insertion-ordered collection of unique values with a chainable,
//! functional-style API.
//!
//! ## Overview
//!
//! - **Collection**: [`UniqueCollection`](collection::UniqueCollection), with
//!   `add`/`delete`/`clear`/`has` and `filter`/`map`/`find`/`for_each`
//! - **Function Composition**: the [`tap`](compose::tap) combinator the
//!   chainable mutators are built from
//!
//! ## Feature Flags
//!
//! - `compose`: Composition helpers
//! - `collection`: `UniqueCollection` and the `unique_collection!` macro
//! - `fxhash`: `FxUniqueCollection`, hashed with `rustc-hash`
//! - `ahash`: `AUniqueCollection`, hashed with `ahash`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use unique_collection::prelude::*;
//!
//! let mut collection = UniqueCollection::of([1, 2, 2, 3]);
//! assert!(collection.delete(&2));
//! assert_eq!(collection.to_vec(), vec![1, 3]);
//! assert!(!collection.delete(&2));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use unique_collection::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "collection")]
    pub use crate::unique_collection;
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "collection")]
pub mod collection;
