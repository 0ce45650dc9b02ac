//! Fallback reconciliation for translation results.
//!
//! The translation service returns a sparse map of language tag -> document:
//! languages may be missing entirely, or present with keys left out. This module
//! fills those gaps deterministically and reports what it filled.
//!
//! # Overview
//!
//! - **Path access**: `get_path` / `set_path` address values by dot-notation
//!   (e.g., `common.greeting`)
//! - **Missing keys**: `find_missing_keys` diffs a translation against its source
//! - **Regional tags**: `resolve_targets` maps `pt-BR` to `pt` and adds base
//!   languages to the request so they can serve as fallbacks
//! - **Reconciliation**: `reconcile` applies regional fallback first, then source
//!   fallback, and builds a `FallbackReport`
//!
//! # Fallback order
//!
//! For a language with no usable entry: base language (regional tags only), then
//! the source document, then nothing. For a language with some keys missing: per
//! path, the base language value, then the source value.
//!
//! Arrays are treated as opaque leaves throughout.
//!
//! Nothing in this module fails; absent data is either filled or left absent.

mod missing;
mod path;
mod reconcile;
mod regional;
mod report;

pub use missing::find_missing_keys;
pub use path::{get_path, set_path};
pub use reconcile::{FallbackPolicy, Reconciled, reconcile};
pub use regional::{RegionalMap, ResolvedTargets, base_language, resolve_targets};
pub use report::FallbackReport;

/// Nested mapping from string keys to scalars, arrays, or further documents.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Raw per-language payload: language tag -> document (or pair sequence in text mode).
pub type TranslationMap = serde_json::Map<String, serde_json::Value>;
