#![forbid(unsafe_code)]

//! Errors for parsing placement configuration from strings.

use std::fmt;

/// Failure to parse a placement setting by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Unknown layout direction name.
    LayoutDirection(String),
    /// Unknown box alignment name.
    Alignment(String),
    /// Unknown edge alignment name.
    EdgeAlignment(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LayoutDirection(name) => write!(f, "unknown layout direction: {name:?}"),
            Self::Alignment(name) => write!(f, "unknown alignment: {name:?}"),
            Self::EdgeAlignment(name) => write!(f, "unknown edge alignment: {name:?}"),
        }
    }
}

impl std::error::Error for ParseError {}
