//! Library entry for Langbridge: translation client and fallback reconciliation.

pub mod client;
pub mod config;
pub mod fallback;
pub mod logging;

pub use client::{
    ApiError, JsonTranslateOptions, TextTranslateOptions, TranslationClient, TranslationResult,
};
pub use config::ClientConfig;
pub use fallback::{Document, FallbackReport};
