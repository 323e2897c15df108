//! Code generation utilities for the proc macro.
//!
//! This module emits fully-qualified paths (`::json_source::…`) so the
//! macros crate does not depend on the runtime crate at compile-time.

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use quote::quote;

/// Return a token stream pointing to the `json_source` crate or its renamed
/// form.
pub(crate) fn json_source_path() -> TokenStream2 {
    resolve_crate_path("json-source", "json_source")
}

fn resolve_crate_path(crate_name_str: &str, default_ident: &str) -> TokenStream2 {
    match crate_name(crate_name_str) {
        Ok(found) => {
            let ident = match found {
                FoundCrate::Itself => Ident::new(default_ident, Span::call_site()),
                FoundCrate::Name(name) => Ident::new(&name, Span::call_site()),
            };
            quote! { ::#ident }
        }
        Err(err) => handle_missing_crate(crate_name_str, &err),
    }
}

#[cfg(test)]
fn handle_missing_crate(crate_name_str: &str, _: &proc_macro_crate::Error) -> TokenStream2 {
    // Tests compile the macros crate in isolation without dependency crates,
    // so fall back to the default package name.
    let ident = Ident::new(&crate_name_str.replace('-', "_"), Span::call_site());
    quote! { ::#ident }
}

#[cfg(not(test))]
fn handle_missing_crate(crate_name_str: &str, err: &proc_macro_crate::Error) -> TokenStream2 {
    panic!("{crate_name_str} crate not found: {err}");
}
