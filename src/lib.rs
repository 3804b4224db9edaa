//! # fluent-collection
//!
//! A fluent, ordered key-value collection for Rust with chainable
//! higher-order transformations.
//!
//! ## Overview
//!
//! [`Collection`](collection::Collection) unifies sequential lists and
//! associative structures under one ordered container. Every transformation
//! returns a new collection, leaving the receiver untouched:
//!
//! - **Transforms**: `map`, `map_into`, `map_spread`, `map_to_groups`,
//!   `flat_map`, `collapse`
//! - **Combination**: `zip`, `concat`, `combine`
//! - **Filtering**: `filter`, `reject`, `partition`, `contains`
//! - **Grouping**: `group_by`, `group_by_field`
//! - **Slicing**: `slice`, `take`, `take_until`, `take_while`, `skip`,
//!   `skip_until`, `skip_while`, `chunk`
//! - **Queries**: `first`, `last`, `random`
//! - **Strings**: `join`, `join_with_last`
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for collections and field access on
//!   `serde_json::Value` records
//!
//! ## Example
//!
//! ```rust
//! use fluent_collection::prelude::*;
//!
//! let mut collection = Collection::of(Vec::<i32>::new());
//! collection.push([1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
//!
//! let summary = collection
//!     .filter(|value, _| value % 2 == 0)
//!     .map(|value, _| value * 10)
//!     .join_with_last(", ", " and ");
//! assert_eq!(summary, "20, 40, 60, 80 and 100");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use fluent_collection::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::*;
}

pub mod collection;
