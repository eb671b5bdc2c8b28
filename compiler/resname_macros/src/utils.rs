//! Shared utilities for the derive.

use syn::{Attribute, Data, DeriveInput, Field, Fields, LitStr};

/// Validate that the input is a struct with named fields (or a unit struct),
/// returning the fields.
pub fn validate_struct_with_named_fields<'a>(
    input: &'a DeriveInput,
    macro_name: &str,
) -> syn::Result<Vec<&'a Field>> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(fields.named.iter().collect()),
            Fields::Unit => Ok(Vec::new()),
            Fields::Unnamed(_) => Err(syn::Error::new_spanned(
                input,
                format!("{macro_name} derive only supports structs with named fields"),
            )),
        },
        _ => Err(syn::Error::new_spanned(
            input,
            format!("{macro_name} derive only supports structs"),
        )),
    }
}

/// Iterate the `#[resname(...)]` attributes among `attrs`.
pub fn resname_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident("resname"))
}

/// Split a `key = "a,b"` literal into its keys, validating each one.
pub fn split_keys(lit: &LitStr) -> syn::Result<Vec<String>> {
    let value = lit.value();
    let mut keys = Vec::new();
    for key in value.split(',').map(str::trim) {
        if !resname_pattern::is_variable_key(key) {
            return Err(syn::Error::new(
                lit.span(),
                format!("binding key `{key}` must be a lower snake case name"),
            ));
        }
        keys.push(key.to_owned());
    }
    Ok(keys)
}
