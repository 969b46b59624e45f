//! Small standalone utilities: interval merging, spiral grid read-out,
//! bracket matching, text statistics, and a record store that reads and
//! writes `name, age, city` lists as CSV or JSON.
//!
//! The crate keeps a strict split:
//!
//! - **[`core`]**: Pure, deterministic logic. No I/O, fully testable in isolation.
//! - **[`io`]**: Filesystem access. Record and text reads log failures and
//!   degrade to empty results instead of returning errors.
//!
//! [`timing`] wraps sync closures or async futures and logs their duration.

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod timing;
