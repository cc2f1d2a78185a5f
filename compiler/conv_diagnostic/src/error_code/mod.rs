//! Error codes for configuration diagnostics.
//!
//! Format: E#### where the first digit indicates the origin:
//! - E1xxx: directive / options errors detected while setting up a build
//! - E2xxx: manifest loading errors

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Directive errors (E1xxx)
    /// Converter or hook function not found
    E1001,
    /// Converter function has an unusable signature
    E1002,
    /// Malformed name pattern or regex
    E1003,
    /// Receiver type declared outside the target package
    E1004,
    /// Source or destination root type cannot be resolved
    E1005,
    /// Mapping directive with an empty path
    E1006,
    /// Pre/post-process hook has an unusable signature
    E1007,
    /// Receiver name shadows a variable of the generated body
    E1008,

    // Manifest errors (E2xxx)
    /// Unknown type reference
    E2001,
    /// Malformed manifest document
    E2002,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 10] = [
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E2001,
        ErrorCode::E2002,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
        }
    }

    /// One-line description used by `convc explain`.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "converter or hook function not found",
            ErrorCode::E1002 => "converter function must be `func(T) U` or `func(T) (U, error)`",
            ErrorCode::E1003 => "malformed name pattern or regular expression",
            ErrorCode::E1004 => "receiver type must be declared in the target package",
            ErrorCode::E1005 => "source or destination type cannot be resolved",
            ErrorCode::E1006 => "directive is missing a path or value",
            ErrorCode::E1007 => "hook function must be `func(dst, src)` or `func(dst, src) error`",
            ErrorCode::E1008 => "receiver name must not be `src`, `err`, `i` or `e`",
            ErrorCode::E2001 => "unknown type reference in manifest",
            ErrorCode::E2002 => "malformed manifest document",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E1002"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}
