//! Function composition utilities.
//!
//! This module holds the small combinators the collection types are built
//! from. They are public so callers can use the same chaining style in
//! their own code.
//!
//! # Helper Functions
//!
//! - [`tap`]: Runs a side effect on a value and returns the value
//!
//! # Examples
//!
//! ```
//! use unique_collection::compose::tap;
//!
//! let mut audit = Vec::new();
//! let total = tap(1 + 2, |value| audit.push(*value));
//! assert_eq!(total, 3);
//! assert_eq!(audit, vec![3]);
//! ```

mod utils;

pub use utils::tap;
