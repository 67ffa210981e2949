#![warn(missing_docs)]
//! Constant-time byte comparison
//!
//! Internal library providing the constant-time equality check used when
//! validating anti-clogging cookies. Cookie validation compares a value
//! supplied by an unauthenticated peer against a locally recomputed one, so
//! the comparison must not leak how many leading bytes matched.
//!
//! # Examples
//!
//! ```rust
//! use ikecore_constant_time::memcmp;
//!
//! let a = [1, 2, 3, 4];
//! let b = [1, 2, 3, 4];
//! let c = [1, 2, 3, 5];
//!
//! assert!(memcmp(&a, &b));
//! assert!(!memcmp(&a, &c));
//! ```
//!
//! # Security Notes
//!
//! While this function aims to be constant-time, it leaks timing information
//! in some cases:
//!
//! - Length mismatches between inputs are immediately detectable
//! - Execution time scales linearly with input size
//!
//! Both leaks are widely considered safe.

mod memcmp;

pub use memcmp::memcmp;
