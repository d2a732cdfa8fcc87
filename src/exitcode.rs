//! Standard exit codes (BSD sysexits.h compatible)

/// Command line usage error (unknown fixture, bad arguments)
pub const USAGE: i32 = 64;

/// Internal software error (a list backing failed conformance)
pub const SOFTWARE: i32 = 70;

/// Configuration error
pub const CONFIG: i32 = 78;
