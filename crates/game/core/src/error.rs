//! Error classification shared by game-core.
//!
//! Rule evaluation (candidates, combat, reward, scoring) is total. Only board
//! construction from external input can fail.

/// How a caller should treat an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Bad input; reject it.
    Validation,

    /// Broken internal bookkeeping.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }
}

/// Implemented by every game-core error type.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable code for logs.
    fn error_code(&self) -> &'static str;
}
