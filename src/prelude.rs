//! Prelude module - common imports for komposti
//!
//! Import this module to get all common types and traits:
//! ```rust
//! use komposti::prelude::*;
//!
//! let total = Sum::concat_all([1, 2, 3].map(Sum));
//! assert_eq!(total.value_of(), 6);
//! ```

// Re-export functional utilities
pub use itertools::Itertools;
pub use tap::{Pipe, Tap};

// Re-export error and config types
pub use komposti_core::{Config, Error, NullablePolicy};

// Re-export data types and helpers
pub use crate::{
    algebra::{All, First, Monoid, Semigroup, Sum, TotalAdd},
    boundary::{throw, try_catch, try_catch_unwind},
    either::{Either, left, partition_eithers, right},
    identity::Identity,
    maybe::Maybe,
    nullable::{Falsy, Nothing, from_nullable, from_nullable_with, is_nothing},
    result::{OptionExt, ResultExt},
};
