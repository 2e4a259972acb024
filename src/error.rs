//! Error taxonomy for the validation pass.
//!
//! Declaring the table never fails; values stay opaque until a caller
//! asks for validation or parses an override document.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("invalid color for token `{token}`: `{value}`")]
    InvalidColor { token: String, value: String },

    #[error("font stack `{role}` is malformed: {reason}")]
    BadFontStack { role: String, reason: String },

    #[error("font size `{name}` has a bad line height: `{value}`")]
    BadLineHeight { name: String, value: String },

    #[error("spacing scale is not strictly increasing at key `{key}` (`{value}`)")]
    NonMonotonicSpacing { key: String, value: String },

    #[error("utility class `{class}` uses duration `{duration}` missing from the duration scale")]
    UnknownDuration { class: String, duration: String },

    #[error("z-index layer `{name}` breaks the declared stacking order")]
    MisorderedLayer { name: String },

    #[error("content globs must be non-empty")]
    EmptyContentGlob,

    #[error("failed to parse theme override document")]
    Toml(#[from] toml::de::Error),
}
