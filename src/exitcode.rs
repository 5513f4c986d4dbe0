//! Standard exit codes (BSD sysexits.h compatible)

/// Successful termination
pub const OK: i32 = 0;

/// Command line usage error (clap itself exits 2 before we get here)
pub const USAGE: i32 = 64;

/// Data format error (bad placeholder in the format string)
pub const DATAERR: i32 = 65;
