//! Parsing of `#[json_source]` attribute arguments.

use syn::parse::{Parse, ParseStream};

/// Ordered JSON literals supplied to the attribute.
pub(crate) struct JsonSourceArgs {
    pub(crate) values: Vec<syn::LitStr>,
}

impl Parse for JsonSourceArgs {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let mut values = Vec::new();
        while !input.is_empty() {
            let lit: syn::Lit = input.parse()?;
            match lit {
                syn::Lit::Str(value) => values.push(value),
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "expected a string literal containing a JSON document",
                    ));
                }
            }
            if input.is_empty() {
                break;
            }
            input.parse::<syn::Token![,]>()?;
        }
        Ok(Self { values })
    }
}
