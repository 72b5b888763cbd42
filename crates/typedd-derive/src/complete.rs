//! Implementation of the `#[derive(Complete)]` macro.
//!
//! The generated `is_complete` ANDs `::typedd::Complete::is_complete` over
//! every field that is not marked `#[complete(skip)]`. Nested composites are
//! therefore checked to any depth through their own (derived or hand-written)
//! impls, and containers are reached through the impls `typedd` ships for
//! `Vec`, `Box`, `Option` and friends.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    parse_macro_input, parse_quote, Data, DeriveInput, Field, Fields, GenericParam, Generics,
    Index,
};

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let generics = add_complete_bounds(input.generics.clone());
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let body = match &input.data {
        Data::Struct(data) => struct_checks(&data.fields)?,
        Data::Enum(data) => {
            let mut arms = Vec::with_capacity(data.variants.len());
            for variant in &data.variants {
                let ident = &variant.ident;
                let (pattern, checks) = variant_checks(&variant.fields)?;
                arms.push(quote! { Self::#ident #pattern => #checks });
            }
            if arms.is_empty() {
                quote! { match *self {} }
            } else {
                quote! { match self { #(#arms,)* } }
            }
        }
        Data::Union(data) => {
            return Err(syn::Error::new_spanned(
                data.union_token,
                "Complete cannot be derived for unions",
            ))
        }
    };

    Ok(quote! {
        impl #impl_generics ::typedd::Complete for #name #ty_generics #where_clause {
            fn is_complete(&self) -> bool {
                #body
            }
        }
    })
}

/// Every type parameter must itself be completeness-capable.
fn add_complete_bounds(mut generics: Generics) -> Generics {
    for param in &mut generics.params {
        if let GenericParam::Type(ty) = param {
            ty.bounds.push(parse_quote!(::typedd::Complete));
        }
    }
    generics
}

/// Returns true when the field carries `#[complete(skip)]`.
fn is_skipped(field: &Field) -> syn::Result<bool> {
    let mut skip = false;
    for attr in &field.attrs {
        if !attr.path().is_ident("complete") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported `complete` attribute, expected `skip`"))
            }
        })?;
    }
    Ok(skip)
}

fn conjunction(checks: Vec<TokenStream2>) -> TokenStream2 {
    let mut iter = checks.into_iter();
    match iter.next() {
        None => quote! { true },
        Some(first) => quote! { #first #(&& #iter)* },
    }
}

fn struct_checks(fields: &Fields) -> syn::Result<TokenStream2> {
    let mut checks = Vec::new();
    match fields {
        Fields::Named(named) => {
            for field in &named.named {
                if is_skipped(field)? {
                    continue;
                }
                let ident = &field.ident;
                checks.push(quote! { ::typedd::Complete::is_complete(&self.#ident) });
            }
        }
        Fields::Unnamed(unnamed) => {
            for (i, field) in unnamed.unnamed.iter().enumerate() {
                if is_skipped(field)? {
                    continue;
                }
                let index = Index::from(i);
                checks.push(quote! { ::typedd::Complete::is_complete(&self.#index) });
            }
        }
        Fields::Unit => {}
    }
    Ok(conjunction(checks))
}

/// Builds the match pattern for one enum variant and the checks over its bindings.
fn variant_checks(fields: &Fields) -> syn::Result<(TokenStream2, TokenStream2)> {
    let mut checks = Vec::new();
    let pattern = match fields {
        Fields::Named(named) => {
            let mut bindings = Vec::new();
            for field in &named.named {
                if is_skipped(field)? {
                    continue;
                }
                let ident = &field.ident;
                checks.push(quote! { ::typedd::Complete::is_complete(#ident) });
                bindings.push(quote! { #ident });
            }
            quote! { { #(#bindings,)* .. } }
        }
        Fields::Unnamed(unnamed) => {
            let mut bindings = Vec::new();
            for (i, field) in unnamed.unnamed.iter().enumerate() {
                if is_skipped(field)? {
                    bindings.push(quote! { _ });
                    continue;
                }
                let binding = format_ident!("field_{}", i);
                checks.push(quote! { ::typedd::Complete::is_complete(#binding) });
                bindings.push(quote! { #binding });
            }
            quote! { ( #(#bindings),* ) }
        }
        Fields::Unit => quote! {},
    };
    Ok((pattern, conjunction(checks)))
}
