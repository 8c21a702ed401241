//! Error type for malformed search input

use std::fmt;

/// Which argument of an operation was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    /// A word being inserted or looked up
    Word,
    /// An autocomplete prefix
    Prefix,
    /// A scrabble tile rack
    Rack,
    /// A match template
    Template,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Word => "word",
            Self::Prefix => "prefix",
            Self::Rack => "rack",
            Self::Template => "template",
        };
        f.write_str(name)
    }
}

/// Error type for search operations
///
/// Only malformed input is an error. A query with no answers returns an
/// empty list instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The argument contains characters outside its alphabet
    InvalidInput { argument: Argument, value: String },
}

impl SearchError {
    pub(crate) fn invalid(argument: Argument, value: &str) -> Self {
        Self::InvalidInput {
            argument,
            value: value.to_string(),
        }
    }

    /// The argument that failed validation
    #[must_use]
    pub const fn argument(&self) -> Argument {
        match self {
            Self::InvalidInput { argument, .. } => *argument,
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { argument, value } => {
                let allowed = match argument {
                    Argument::Word => "a non-empty run of letters",
                    Argument::Prefix | Argument::Rack => "letters only",
                    Argument::Template => "letters and '?' only",
                };
                write!(f, "Invalid {argument} {value:?}: expected {allowed}")
            }
        }
    }
}

impl std::error::Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_argument_and_value() {
        let err = SearchError::invalid(Argument::Template, "a-c");
        assert_eq!(
            err.to_string(),
            "Invalid template \"a-c\": expected letters and '?' only"
        );
    }

    #[test]
    fn argument_accessor() {
        assert_eq!(
            SearchError::invalid(Argument::Rack, "ab1").argument(),
            Argument::Rack
        );
    }
}
