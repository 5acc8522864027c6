//! Format versioning constants for scripts and traces.

/// Current schema version for JSON scripts.
/// Increment MINOR for compatible changes, MAJOR for breaking changes.
pub const SCRIPT_SCHEMA_VERSION: &str = "1.0";

/// Current format version for serialized frame traces.
pub const TRACE_FORMAT_VERSION: u16 = 1;
