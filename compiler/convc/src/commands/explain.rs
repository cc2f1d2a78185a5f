//! The `explain` command: describe a configuration error code.

use conv_diagnostic::ErrorCode;

use super::RunError;

/// Text printed for `convc explain <code>`.
pub fn explain_error(code_str: &str) -> Result<String, RunError> {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        return Err(RunError::UnknownCode(code_str.to_string()));
    };
    Ok(format!("{code}: {}", code.description()))
}
