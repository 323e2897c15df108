//! Attribute macro declaring inline JSON argument sources for tests.

mod args;
mod codegen;
mod macros;

use proc_macro::TokenStream;

/// Attach inline JSON literals to a test function or its parameters.
///
/// On a function, the attribute registers a method-scoped source holding the
/// given literals in declaration order. On a parameter of that function, it
/// registers a parameter-scoped source for combinatorial parametrization.
/// The function body is left untouched; registration happens through the
/// global registry in the `json-source` crate.
///
/// The literals are carried verbatim. Whether they parse as JSON is checked
/// by the arguments provider at collection time, not here.
///
/// ```ignore
/// #[json_source("{\"id\": 1}", "[{\"id\": 2}, {\"id\": 3}]")]
/// fn customers(#[json_source("\"GBP\"", "\"JPY\"")] currency: &str, id: u32) {
///     // exercised once per argument set produced by the provider
/// }
/// ```
#[proc_macro_attribute]
pub fn json_source(attr: TokenStream, item: TokenStream) -> TokenStream {
    macros::json_source(attr, item)
}
