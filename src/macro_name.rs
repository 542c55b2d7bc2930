// src/macro_name.rs

//! Validated C preprocessor macro names
//!
//! The generated header defines exactly one macro, and its name ends up in C
//! source verbatim, so it has to be a valid C identifier: a letter or
//! underscore followed by letters, digits, or underscores. Validation happens
//! once at the CLI boundary; the rest of the crate can treat a `MacroName` as
//! known-good.

use std::fmt;
use std::str::FromStr;

/// A validated C identifier used as the macro name in the generated header
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MacroName(String);

impl MacroName {
    /// Parse a macro name, rejecting anything that is not a C identifier
    pub fn parse(s: &str) -> Result<Self, MacroNameError> {
        let mut chars = s.chars();

        let first = chars.next().ok_or(MacroNameError::Empty)?;
        if !first.is_ascii_alphabetic() && first != '_' {
            return Err(MacroNameError::InvalidStart(first));
        }

        for c in chars {
            if !c.is_ascii_alphanumeric() && c != '_' {
                return Err(MacroNameError::InvalidChar(c));
            }
        }

        Ok(Self(s.to_string()))
    }

    /// The macro name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MacroName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MacroName {
    type Err = MacroNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MacroName::parse(s)
    }
}

/// Errors that can occur when parsing a macro name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MacroNameError {
    /// Empty macro name
    Empty,
    /// First character is not a letter or underscore
    InvalidStart(char),
    /// Character other than letters, digits, or underscore
    InvalidChar(char),
}

impl fmt::Display for MacroNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MacroNameError::Empty => write!(f, "macro name is empty"),
            MacroNameError::InvalidStart(c) => {
                write!(f, "macro name must start with a letter or '_', got '{}'", c)
            }
            MacroNameError::InvalidChar(c) => {
                write!(f, "invalid character '{}' in macro name", c)
            }
        }
    }
}

impl std::error::Error for MacroNameError {}
