//! The arguments-provider contract.
//!
//! The registry stores raw JSON text only. Turning that text into concrete
//! test arguments is the job of an external provider: for each declared
//! value it parses the JSON and produces zero or more argument sets. This
//! module defines the contract surface; no provider implementation ships
//! with this workspace.

use crate::registry::JsonSource;
use crate::types::ProviderError;
use std::any::Any;

/// Ordered, type-erased arguments for a single parametrized test invocation.
///
/// A provider fills one set per generated invocation; the harness downcasts
/// each position back to the parameter type it expects.
#[derive(Default)]
pub struct ArgumentSet {
    values: Vec<Box<dyn Any>>,
}

impl ArgumentSet {
    /// Create an empty argument set.
    #[must_use]
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Append an argument to the set.
    pub fn push<T: Any>(&mut self, value: T) {
        self.values.push(Box::new(value));
    }

    /// Retrieve an argument by position and type.
    #[must_use]
    pub fn get<T: Any>(&self, index: usize) -> Option<&T> {
        self.values.get(index)?.downcast_ref::<T>()
    }

    /// Number of arguments in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the set holds no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Produces concrete argument sets from a registered JSON source.
///
/// Implementations read [`JsonSource::values`] in declaration order and, for
/// each element, parse the text as JSON: a single value yields one argument
/// set, an array yields one per element. Malformed text is reported as
/// [`ProviderError::MalformedJson`], and a source with no values must be
/// rejected via [`ensure_non_empty`] before any parsing happens.
pub trait ArgumentsProvider {
    /// Produce the argument sets for `source`, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::EmptySource`] when the source declares no
    /// values, or [`ProviderError::MalformedJson`] when an element cannot be
    /// parsed as JSON.
    fn provide(&self, source: &JsonSource) -> Result<Vec<ArgumentSet>, ProviderError>;
}

/// Enforce the non-empty contract on a source's value list.
///
/// The declaration itself never fails; providers call this at collection
/// time so that an empty declaration surfaces as a configuration error.
///
/// # Errors
///
/// Returns [`ProviderError::EmptySource`] when the source declares no
/// values.
pub fn ensure_non_empty(source: &JsonSource) -> Result<(), ProviderError> {
    if source.values.is_empty() {
        return Err(ProviderError::EmptySource {
            test_path: source.test_path.to_string(),
        });
    }
    Ok(())
}
