//! Error codes for keyed-json.
//!
//! Every failure the crate can report is a variant of [`ErrorCode`]. Each
//! variant carries a stable numeric code and a stable name so callers (and the
//! CLI) can report failures identically across releases.
//!
//! The coercion layer has exactly one failure path, [`ErrorCode::E100_NumberFormat`].
//! Missing properties and type mismatches are never errors.

use thiserror::Error;

/// All error codes reported by keyed-json.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
    /// Malformed numeric text handed to a numeric coercion (code 100)
    #[error("E100_NumberFormat({0})")]
    E100_NumberFormat(/* value */ String),

    /// Input document exceeds the configured size (code 110)
    #[error("E110_InputTooLarge({0}, {1})")]
    E110_InputTooLarge(/* size */ u64, /* limit */ u64),

    /// Nested objects/arrays exceed the configured depth (code 111)
    #[error("E111_NestingTooDeep({0}, {1})")]
    E111_NestingTooDeep(/* depth */ u64, /* limit */ u64),

    /// Object has more fields than allowed (code 113)
    #[error("E113_TooManyFields({0}, {1})")]
    E113_TooManyFields(/* count */ u64, /* limit */ u64),

    /// Array has more elements than allowed (code 114)
    #[error("E114_ArrayTooLong({0}, {1})")]
    E114_ArrayTooLong(/* length */ u64, /* limit */ u64),

    /// Input could not be decoded, or its root is not an object (code 120)
    #[error("E120_InvalidJSON({0})")]
    E120_InvalidJSON(/* reason */ String),

    /// JSON number that is not an integer (code 121)
    #[error("E121_UnsupportedNumber({0})")]
    E121_UnsupportedNumber(/* value */ String),

    /// Reading input failed (code 130)
    #[error("E130_Io({0})")]
    E130_Io(/* reason */ String),
}

impl ErrorCode {
    /// Get the numeric error code.
    pub fn code(&self) -> u32 {
        match self {
            ErrorCode::E100_NumberFormat(_) => 100,
            ErrorCode::E110_InputTooLarge(_, _) => 110,
            ErrorCode::E111_NestingTooDeep(_, _) => 111,
            ErrorCode::E113_TooManyFields(_, _) => 113,
            ErrorCode::E114_ArrayTooLong(_, _) => 114,
            ErrorCode::E120_InvalidJSON(_) => 120,
            ErrorCode::E121_UnsupportedNumber(_) => 121,
            ErrorCode::E130_Io(_) => 130,
        }
    }

    /// Get the error name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::E100_NumberFormat(_) => "E100_NumberFormat",
            ErrorCode::E110_InputTooLarge(_, _) => "E110_InputTooLarge",
            ErrorCode::E111_NestingTooDeep(_, _) => "E111_NestingTooDeep",
            ErrorCode::E113_TooManyFields(_, _) => "E113_TooManyFields",
            ErrorCode::E114_ArrayTooLong(_, _) => "E114_ArrayTooLong",
            ErrorCode::E120_InvalidJSON(_) => "E120_InvalidJSON",
            ErrorCode::E121_UnsupportedNumber(_) => "E121_UnsupportedNumber",
            ErrorCode::E130_Io(_) => "E130_Io",
        }
    }
}

/// Result type for keyed-json operations.
pub type KeyedResult<T> = Result<T, ErrorCode>;
