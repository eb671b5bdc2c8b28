//! Record derive macro implementation.
//!
//! Generates `Record` and `Field` implementations from a struct definition,
//! plus a `Resource` implementation when the struct declares patterns.
//!
//! # Note
//!
//! The generated code refers to items through `::resname`, so the derive is
//! used through the `resname` crate's re-export.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, DeriveInput, Field, LitStr, Type};

use crate::utils::{resname_attrs, split_keys, validate_struct_with_named_fields};

/// Main entry point for the Record derive macro.
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_record_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// One field that takes part in binding.
struct BoundField<'a> {
    ident: &'a syn::Ident,
    ty: &'a Type,
    keys: Vec<String>,
}

/// Struct-level `#[resname(...)]` settings.
#[derive(Default)]
struct ResourceAttrs {
    resource: Option<LitStr>,
    patterns: Vec<LitStr>,
}

fn derive_record_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let resource = parse_resource_attrs(input)?;
    let fields = validate_struct_with_named_fields(input, "Record")?;

    let mut bound = Vec::with_capacity(fields.len());
    for field in fields {
        if let Some(field) = parse_field(field)? {
            bound.push(field);
        }
    }

    let descriptors = bound.iter().map(|field| {
        let field_name = field.ident.unraw().to_string();
        let keys = &field.keys;
        let ty = field.ty;
        quote! {
            ::resname::FieldDescriptor::new(
                #field_name,
                &[#(#keys),*],
                <#ty as ::resname::Field>::shape(),
            )
        }
    });

    let slots = bound.iter().enumerate().map(|(index, field)| {
        let ident = field.ident;
        quote! { #index => ::std::option::Option::Some(::resname::Field::slot(&self.#ident)), }
    });

    let slots_mut = bound.iter().enumerate().map(|(index, field)| {
        let ident = field.ident;
        quote! { #index => ::std::option::Option::Some(::resname::Field::slot_mut(&mut self.#ident)), }
    });

    let resource_impl = generate_resource_impl(input, &resource);

    Ok(quote! {
        impl #impl_generics ::resname::Record for #name #ty_generics #where_clause {
            fn fields() -> ::std::vec::Vec<::resname::FieldDescriptor> {
                ::std::vec![#(#descriptors),*]
            }

            fn field(&self, index: usize) -> ::std::option::Option<::resname::Slot<'_>> {
                match index {
                    #(#slots)*
                    _ => ::std::option::Option::None,
                }
            }

            fn field_mut(&mut self, index: usize) -> ::std::option::Option<::resname::SlotMut<'_>> {
                match index {
                    #(#slots_mut)*
                    _ => ::std::option::Option::None,
                }
            }
        }

        impl #impl_generics ::resname::Field for #name #ty_generics #where_clause {
            fn shape() -> ::resname::Shape {
                ::resname::Shape::composite::<Self>()
            }

            fn slot(&self) -> ::resname::Slot<'_> {
                ::resname::Slot::Composite(self)
            }

            fn slot_mut(&mut self) -> ::resname::SlotMut<'_> {
                ::resname::SlotMut::Composite(self)
            }
        }

        #resource_impl
    })
}

/// Parse the struct-level `#[resname(resource = "...", pattern = "...")]`
/// attributes.
fn parse_resource_attrs(input: &DeriveInput) -> syn::Result<ResourceAttrs> {
    let mut attrs = ResourceAttrs::default();
    for attr in resname_attrs(&input.attrs) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("pattern") {
                let lit: LitStr = meta.value()?.parse()?;
                // Same grammar as at runtime, so a bad pattern never ships.
                if let Err(err) = resname_pattern::Template::parse(&lit.value()) {
                    return Err(syn::Error::new(lit.span(), err.to_string()));
                }
                attrs.patterns.push(lit);
                Ok(())
            } else if meta.path.is_ident("resource") {
                if attrs.resource.is_some() {
                    return Err(meta.error("duplicate `resource` attribute"));
                }
                attrs.resource = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("expected `pattern` or `resource`"))
            }
        })?;
    }

    if attrs.patterns.len() > resname_pattern::EXTRA_PATTERN_OFFSET {
        return Err(syn::Error::new_spanned(
            &input.ident,
            format!(
                "at most {} patterns may be declared",
                resname_pattern::EXTRA_PATTERN_OFFSET
            ),
        ));
    }
    if attrs.patterns.is_empty() {
        if let Some(resource) = &attrs.resource {
            return Err(syn::Error::new(
                resource.span(),
                "`resource` requires at least one `pattern`",
            ));
        }
    }

    Ok(attrs)
}

/// Parse a field's `#[resname(key = "...")]` / `#[resname(skip)]` attributes.
///
/// Returns `None` for skipped fields.
fn parse_field(field: &Field) -> syn::Result<Option<BoundField<'_>>> {
    let ident = field
        .ident
        .as_ref()
        .ok_or_else(|| syn::Error::new_spanned(field, "expected named field"))?;

    let mut keys = Vec::new();
    let mut skip = false;
    for attr in resname_attrs(&field.attrs) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("key") {
                let lit: LitStr = meta.value()?.parse()?;
                for key in split_keys(&lit)? {
                    if !keys.contains(&key) {
                        keys.push(key);
                    }
                }
                Ok(())
            } else if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("expected `key` or `skip`"))
            }
        })?;
    }

    if skip {
        if !keys.is_empty() {
            return Err(syn::Error::new_spanned(
                ident,
                "a skipped field cannot carry binding keys",
            ));
        }
        return Ok(None);
    }

    Ok(Some(BoundField {
        ident,
        ty: &field.ty,
        keys,
    }))
}

fn generate_resource_impl(input: &DeriveInput, attrs: &ResourceAttrs) -> TokenStream2 {
    if attrs.patterns.is_empty() {
        return quote! {};
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let resource = attrs
        .resource
        .clone()
        .unwrap_or_else(|| LitStr::new(&name.unraw().to_string(), name.span()));
    let patterns = &attrs.patterns;

    quote! {
        impl #impl_generics ::resname::Resource for #name #ty_generics #where_clause {
            const DESCRIPTOR: ::resname::ResourceDescriptor =
                ::resname::ResourceDescriptor::new(#resource, &[#(#patterns),*]);
        }
    }
}
