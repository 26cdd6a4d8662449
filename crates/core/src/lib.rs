#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # komposti-core
//!
//! Core error, result, and configuration types shared by the `komposti`
//! functional toolkit.

pub mod config;
pub mod error;

pub use config::{Config, LogLevel, NullablePolicy};
pub use error::{Error, Result};
