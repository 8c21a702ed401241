//! Word lists
//!
//! Provides embedded word lists compiled into the binary and the [`WordList`]
//! collection used to feed the prefix-map builder.

mod embedded;
pub mod loader;

pub use embedded::{COMMON, COMMON_COUNT, SHORT, SHORT_COUNT};
pub use loader::WordList;
