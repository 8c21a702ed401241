//! Embedded word lists
//!
//! Word lists compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/short.rs"));
include!(concat!(env!("OUT_DIR"), "/common.rs"));
