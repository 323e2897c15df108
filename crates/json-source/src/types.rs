//! Core types shared across the crate.
//!
//! The module defines lightweight wrappers for JSON literal text and test
//! paths, the attachment-point enum describing where a source is declared,
//! and the error type an arguments provider reports.

use std::fmt;
use thiserror::Error;

/// Wrapper for a raw JSON literal attached to a test.
///
/// The text is carried verbatim; nothing in this crate checks that it parses
/// as JSON. That validation belongs to the arguments provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JsonText<'a>(pub(crate) &'a str);

impl<'a> JsonText<'a> {
    /// Construct a new `JsonText` from a string slice.
    #[must_use]
    pub const fn new(s: &'a str) -> Self {
        Self(s)
    }

    /// Access the underlying string slice.
    #[must_use]
    pub const fn as_str(self) -> &'a str {
        self.0
    }
}

impl<'a> From<&'a str> for JsonText<'a> {
    fn from(s: &'a str) -> Self {
        Self::new(s)
    }
}

/// Wrapper for a fully-qualified test function path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TestPath<'a>(pub(crate) &'a str);

impl<'a> TestPath<'a> {
    /// Construct a new `TestPath` from a string slice.
    #[must_use]
    pub const fn new(s: &'a str) -> Self {
        Self(s)
    }

    /// Access the underlying string slice.
    #[must_use]
    pub const fn as_str(self) -> &'a str {
        self.0
    }
}

impl<'a> From<&'a str> for TestPath<'a> {
    fn from(s: &'a str) -> Self {
        Self::new(s)
    }
}

/// Where a JSON source is attached.
///
/// A source declared on the test function feeds the whole parameter list; a
/// source declared on a single parameter feeds that parameter alone, for use
/// with combinatorial parametrization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentPoint {
    /// The source is declared on the test function itself.
    Method,
    /// The source is declared on one parameter of the test function.
    Parameter(&'static str),
}

impl AttachmentPoint {
    /// Return the parameter name for parameter-scoped sources.
    #[must_use]
    pub const fn parameter(self) -> Option<&'static str> {
        match self {
            Self::Parameter(name) => Some(name),
            Self::Method => None,
        }
    }

    /// Short label used in diagnostics output.
    #[must_use]
    pub const fn kind(self) -> &'static str {
        match self {
            Self::Method => "method",
            Self::Parameter(_) => "parameter",
        }
    }
}

impl fmt::Display for AttachmentPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Method => f.write_str("method"),
            Self::Parameter(name) => write!(f, "parameter `{name}`"),
        }
    }
}

/// Errors an arguments provider reports when collecting test arguments.
///
/// The registry accepts any declaration; these are the failure kinds the
/// external provider surfaces at argument-collection time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ProviderError {
    /// The source declares no JSON values. Declaring at least one value is
    /// part of the source contract, enforced here rather than at the
    /// declaration site.
    #[error("JSON source for `{test_path}` declares no values; at least one JSON literal is required")]
    EmptySource {
        /// Fully-qualified path of the offending test.
        test_path: String,
    },
    /// One of the declared values failed to parse as JSON.
    #[error("JSON value {index} for `{test_path}` is malformed: {message}")]
    MalformedJson {
        /// Fully-qualified path of the offending test.
        test_path: String,
        /// Zero-based position of the value within the declared sequence.
        index: usize,
        /// Parser diagnostic for the malformed text.
        message: String,
    },
}
