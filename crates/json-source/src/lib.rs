//! Core library for `json-source`.
//!
//! The crate lets a parametrized test declare, at the point of use, that its
//! arguments come from inline JSON literals. The `#[json_source]` attribute
//! (from `json-source-macros`) registers a [`JsonSource`] record with the
//! global registry defined here; a test harness discovers the record at
//! collection time and hands it to an [`ArgumentsProvider`], which parses the
//! JSON text into concrete arguments. The registry stores the raw text only —
//! JSON validation happens in the provider, not at declaration.

pub mod provider;
pub mod registry;
pub mod types;

pub use inventory::{iter, submit};
pub use provider::{ArgumentSet, ArgumentsProvider, ensure_non_empty};
#[cfg(feature = "diagnostics")]
pub use registry::dump_registry;
pub use registry::{JsonSource, lookup_source, sources_for_test, unconsumed_sources};
pub use types::{AttachmentPoint, JsonText, ProviderError, TestPath};
