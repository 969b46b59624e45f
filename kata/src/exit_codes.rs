//! Stable exit codes for kata CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to invalid arguments, config, or other errors.
pub const INVALID: i32 = 1;
/// `kata brackets` found a bracket that does not nest.
pub const UNBALANCED: i32 = 2;
