//! Configuration errors.
//!
//! These abort generation of the single method they belong to. Sibling
//! methods in the same run are unaffected.

use crate::{Diagnostic, ErrorCode, Pos};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown function `{name}`")]
    UnknownFunction { name: String, pos: Pos },

    #[error("converter `{name}` {reason}")]
    BadConverterSignature {
        name: String,
        reason: String,
        pos: Pos,
    },

    #[error("invalid pattern `{pattern}`: {reason}")]
    BadPattern {
        pattern: String,
        reason: String,
        pos: Pos,
    },

    #[error("receiver type `{ty}` is declared in `{package}`, outside the target package")]
    ForeignReceiver {
        ty: String,
        package: String,
        pos: Pos,
    },

    #[error("cannot resolve the {side} type of `{method}`")]
    UnresolvedRootType {
        method: String,
        side: &'static str,
        pos: Pos,
    },

    #[error("`{directive}` directive has an empty {what}")]
    EmptyPath {
        directive: &'static str,
        what: &'static str,
        pos: Pos,
    },

    #[error("hook `{name}` {reason}")]
    BadHookSignature {
        name: String,
        reason: String,
        pos: Pos,
    },

    #[error("receiver name `{name}` collides with a name used by the generated body")]
    ReservedReceiver { name: String, pos: Pos },

    #[error("unknown type `{reference}`")]
    UnknownType { reference: String, pos: Pos },

    #[error("invalid manifest: {reason}")]
    InvalidManifest { reason: String },
}

impl ConfigError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ConfigError::UnknownFunction { .. } => ErrorCode::E1001,
            ConfigError::BadConverterSignature { .. } => ErrorCode::E1002,
            ConfigError::BadPattern { .. } => ErrorCode::E1003,
            ConfigError::ForeignReceiver { .. } => ErrorCode::E1004,
            ConfigError::UnresolvedRootType { .. } => ErrorCode::E1005,
            ConfigError::EmptyPath { .. } => ErrorCode::E1006,
            ConfigError::BadHookSignature { .. } => ErrorCode::E1007,
            ConfigError::ReservedReceiver { .. } => ErrorCode::E1008,
            ConfigError::UnknownType { .. } => ErrorCode::E2001,
            ConfigError::InvalidManifest { .. } => ErrorCode::E2002,
        }
    }

    /// Position of the offending directive or declaration.
    pub fn pos(&self) -> Pos {
        match self {
            ConfigError::UnknownFunction { pos, .. }
            | ConfigError::BadConverterSignature { pos, .. }
            | ConfigError::BadPattern { pos, .. }
            | ConfigError::ForeignReceiver { pos, .. }
            | ConfigError::UnresolvedRootType { pos, .. }
            | ConfigError::EmptyPath { pos, .. }
            | ConfigError::BadHookSignature { pos, .. }
            | ConfigError::ReservedReceiver { pos, .. }
            | ConfigError::UnknownType { pos, .. } => *pos,
            ConfigError::InvalidManifest { .. } => Pos::default(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_pos(self.pos())
    }
}
