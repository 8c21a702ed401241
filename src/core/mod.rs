//! Core prefix-map types
//!
//! The data structure every search runs over, its successor sets, input
//! validation and the crate's error type.

mod error;
mod prefix_map;
mod successors;
mod validate;

pub use error::{Argument, SearchError};
pub use prefix_map::PrefixMap;
pub use successors::{Successor, Successors};
pub use validate::{WILDCARD, is_letters, is_word};

pub(crate) use validate::{check_letters, check_template};
