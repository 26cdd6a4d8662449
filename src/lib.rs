#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # komposti
//!
//! A small functional toolkit: a right-biased [`Either`], [`Maybe`],
//! [`Identity`], and the [`Sum`], [`All`] and [`First`] wrappers over the
//! [`Semigroup`]/[`Monoid`] traits.
//!
//! Two error models live side by side. Absence and failure are values
//! (`Left`, nothing) handled with `map`/`chain`/`fold`; `Result` errors and
//! panics are converted into those values at exactly one boundary,
//! [`try_catch`] and [`try_catch_unwind`].
//!
//! ```rust
//! use komposti::{from_nullable, try_catch, throw, Either};
//!
//! let port = from_nullable(Some("8080"))
//!     .chain(|raw| try_catch(|| raw.parse::<u16>()).map_left(|_| komposti::Nothing))
//!     .fold(|_| 80, |p| p);
//! assert_eq!(port, 8080);
//!
//! let failed: Either<_, ()> = try_catch(|| throw("oh noes"));
//! assert!(failed.is_left());
//! ```

pub mod algebra;
pub mod boundary;
pub mod either;
pub mod identity;
pub mod maybe;
pub mod nullable;
pub mod prelude;
pub mod result;
pub mod telemetry;

pub use algebra::{All, First, Monoid, Semigroup, Sum, TotalAdd};
pub use boundary::{throw, try_catch, try_catch_unwind};
pub use either::{Either, left, partition_eithers, right};
pub use identity::Identity;
pub use komposti_core::{self, Config, Error, LogLevel, NullablePolicy, Result};
pub use maybe::Maybe;
pub use nullable::{Falsy, Nothing, from_nullable, from_nullable_with, is_nothing};
pub use result::{OptionExt, ResultExt};
