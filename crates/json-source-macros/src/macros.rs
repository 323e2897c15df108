//! Implementation of the `#[json_source]` attribute.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::args::JsonSourceArgs;
use crate::codegen::json_source_path;

pub(crate) fn json_source(attr: TokenStream, item: TokenStream) -> TokenStream {
    match expand(attr.into(), item.into()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// A parameter-scoped source stripped from the function signature.
struct ParameterSource {
    name: String,
    values: Vec<syn::LitStr>,
}

fn expand(attr: TokenStream2, item: TokenStream2) -> syn::Result<TokenStream2> {
    let mut func = match syn::parse2::<syn::Item>(item)? {
        syn::Item::Fn(func) => func,
        other => {
            return Err(syn::Error::new_spanned(
                &other,
                "`#[json_source]` can only be attached to a function or its parameters",
            ));
        }
    };
    let args: JsonSourceArgs = syn::parse2(attr)?;
    let parameter_sources = strip_parameter_sources(&mut func)?;
    if args.values.is_empty() && parameter_sources.is_empty() {
        return Err(syn::Error::new(
            func.sig.ident.span(),
            "`#[json_source]` requires at least one JSON literal",
        ));
    }

    let root = json_source_path();
    let fn_name = func.sig.ident.to_string();
    let mut registrations = TokenStream2::new();
    // Every registration from this expansion shares the attribute's source
    // location, so a sequence number preserves declaration order.
    let mut order: u32 = 0;
    if !args.values.is_empty() {
        let attachment = quote! { #root::AttachmentPoint::Method };
        registrations.extend(registration(&root, &fn_name, &attachment, &args.values, order));
        order += 1;
    }
    for source in &parameter_sources {
        let name = &source.name;
        let attachment = quote! { #root::AttachmentPoint::Parameter(#name) };
        registrations.extend(registration(
            &root,
            &fn_name,
            &attachment,
            &source.values,
            order,
        ));
        order += 1;
    }

    Ok(quote! {
        #func
        #registrations
    })
}

/// Emit one registry submission for an attachment point.
fn registration(
    root: &TokenStream2,
    fn_name: &str,
    attachment: &TokenStream2,
    values: &[syn::LitStr],
    order: u32,
) -> TokenStream2 {
    quote! {
        const _: () = {
            #root::submit! {
                #root::JsonSource {
                    test_path: concat!(module_path!(), "::", #fn_name),
                    attachment: #attachment,
                    values: &[#(#values),*],
                    file: file!(),
                    line: line!(),
                    order: #order,
                }
            }
        };
    }
}

/// Remove `#[json_source]` attributes from the parameters and collect the
/// sources they declare. The attributes must not survive expansion: rustc
/// rejects unresolved attributes on function parameters.
fn strip_parameter_sources(func: &mut syn::ItemFn) -> syn::Result<Vec<ParameterSource>> {
    let mut sources = Vec::new();
    for input in &mut func.sig.inputs {
        let syn::FnArg::Typed(pat_type) = input else {
            continue;
        };
        let mut kept = Vec::new();
        let mut taken: Option<JsonSourceArgs> = None;
        for attr in pat_type.attrs.drain(..) {
            if attr.path().is_ident("json_source") {
                if taken.is_some() {
                    return Err(syn::Error::new_spanned(
                        &attr,
                        "duplicate `#[json_source]` on one parameter",
                    ));
                }
                taken = Some(attr.parse_args()?);
            } else {
                kept.push(attr);
            }
        }
        pat_type.attrs = kept;
        if let Some(args) = taken {
            let syn::Pat::Ident(pat_ident) = pat_type.pat.as_ref() else {
                return Err(syn::Error::new_spanned(
                    &pat_type.pat,
                    "`#[json_source]` parameters must use a plain identifier",
                ));
            };
            sources.push(ParameterSource {
                name: pat_ident.ident.to_string(),
                values: args.values,
            });
        }
    }
    Ok(sources)
}
