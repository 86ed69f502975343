use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Field, Fields, FieldsNamed, Ident, PathSegment, Type, Variant};

const INTERNAL_VARIANT: &str = "Internal";

struct VariantMeta<'a> {
    ident: &'a Ident,
    source: Option<(&'a Ident, &'a Type)>,
    has_context: bool,
    cfg_attrs: Vec<Attribute>,
}

impl VariantMeta<'_> {
    fn is_internal(&self) -> bool {
        self.ident == INTERNAL_VARIANT
    }
}

pub fn expand_derive(input: DeriveInput) -> TokenStream {
    let name = &input.ident;
    let trait_name = format_ident!("{}Ext", name);

    let Data::Enum(data) = &input.data else {
        return quote! { compile_error!("pcat_error can only be applied to enums"); };
    };

    let variants = match data.variants.iter().map(parse_variant).collect::<Result<Vec<_>, _>>() {
        Ok(v) => v,
        Err(err) => return err.to_compile_error(),
    };
    if let Some(v) = variants.iter().find(|v| v.source.is_some() && !v.has_context) {
        return syn::Error::new_spanned(
            v.ident,
            "pcat_error requires `context: Option<Cow<'static, str>>` for variants with a source",
        )
        .to_compile_error();
    }

    let extra_derives = missing_derives(&input);
    let context_impl = context_trait(name, &trait_name, &variants);
    let from_impls = variants.iter().filter_map(|v| source_conversions(name, &trait_name, v));
    let internal_impls = variants
        .iter()
        .find(|v| v.is_internal())
        .map(|v| internal_conversions(name, v))
        .unwrap_or_default();

    quote! {
        #[allow(non_shorthand_field_patterns)]
        #extra_derives
        #input

        #context_impl
        #(#from_impls)*
        #internal_impls

        #[allow(dead_code)]
        fn format_context(context: &Option<std::borrow::Cow<'static, str>>) -> std::borrow::Cow<'static, str> {
            context.as_ref().map_or(std::borrow::Cow::Borrowed(""), |c| std::borrow::Cow::Owned(format!(" ({c})")))
        }
    }
}

fn parse_variant(v: &Variant) -> syn::Result<VariantMeta<'_>> {
    let Fields::Named(fields) = &v.fields else {
        return Err(syn::Error::new_spanned(
            v,
            "pcat_error requires named fields for source/context handling",
        ));
    };

    let has_context = context_field(fields)?.is_some();
    let source = source_field(fields).and_then(|f| f.ident.as_ref().map(|ident| (ident, &f.ty)));
    let cfg_attrs = v.attrs.iter().filter(|attr| attr.path().is_ident("cfg")).cloned().collect();

    Ok(VariantMeta { ident: &v.ident, source, has_context, cfg_attrs })
}

fn context_field(fields: &FieldsNamed) -> syn::Result<Option<&Field>> {
    let Some(field) = fields.named.iter().find(|f| f.ident.as_ref().is_some_and(|i| i == "context"))
    else {
        return Ok(None);
    };
    if !is_context_type(&field.ty) {
        return Err(syn::Error::new_spanned(
            &field.ty,
            "context field must be Option<Cow<'static, str>>",
        ));
    }
    Ok(Some(field))
}

fn source_field(fields: &FieldsNamed) -> Option<&Field> {
    fields.named.iter().find(|field| {
        field.ident.as_ref().is_some_and(|ident| ident == "source")
            || field.attrs.iter().any(|a| a.path().is_ident("source") || a.path().is_ident("from"))
    })
}

fn missing_derives(input: &DeriveInput) -> TokenStream {
    let present = derived_trait_names(input);
    let mut tokens = Vec::new();
    if !present.contains("Debug") {
        tokens.push(quote! { Debug });
    }
    if !present.contains("Error") {
        tokens.push(quote! { ::thiserror::Error });
    }
    if tokens.is_empty() { quote! {} } else { quote! { #[derive(#(#tokens),*)] } }
}

fn context_trait(name: &Ident, trait_name: &Ident, variants: &[VariantMeta<'_>]) -> TokenStream {
    let arms = variants.iter().filter(|v| v.has_context).map(|v| {
        let cfg_attrs = &v.cfg_attrs;
        let ident = v.ident;
        quote! { #(#cfg_attrs)* #name::#ident { context: c, .. } => *c = Some(context.into()), }
    });

    quote! {
        pub trait #trait_name<T> {
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #trait_name<T> for Result<T, #name> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut e| {
                    match &mut e {
                        #( #arms )*
                        _ => {}
                    }
                    e
                })
            }
        }
    }
}

fn source_conversions(
    name: &Ident,
    trait_name: &Ident,
    v: &VariantMeta<'_>,
) -> Option<TokenStream> {
    if v.is_internal() {
        return None;
    }
    let (field, ty) = v.source?;
    let v_ident = v.ident;
    let cfg_attrs = &v.cfg_attrs;

    Some(quote! {
        #(#cfg_attrs)*
        #[automatically_derived]
        impl From<#ty> for #name {
            #[inline]
            fn from(#field: #ty) -> Self { Self::#v_ident { #field, context: None } }
        }

        #(#cfg_attrs)*
        impl<T> #trait_name<T> for std::result::Result<T, #ty> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> std::result::Result<T, #name> {
                self.map_err(|#field| #name::#v_ident { #field, context: Some(context.into()) })
            }
        }
    })
}

fn internal_conversions(name: &Ident, internal: &VariantMeta<'_>) -> TokenStream {
    let cfg_attrs = &internal.cfg_attrs;

    quote! {
        #(#cfg_attrs)*
        impl From<&'static str> for #name {
            #[inline]
            fn from(s: &'static str) -> Self { Self::Internal { message: std::borrow::Cow::Borrowed(s), context: None } }
        }
        #(#cfg_attrs)*
        impl From<String> for #name {
            #[inline]
            fn from(s: String) -> Self { Self::Internal { message: std::borrow::Cow::Owned(s), context: None } }
        }
    }
}

fn derived_trait_names(input: &DeriveInput) -> FxHashSet<String> {
    let mut traits = FxHashSet::default();

    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(seg) = meta.path.segments.last() {
                traits.insert(seg.ident.to_string());
            }
            Ok(())
        });
    }

    traits
}

fn last_segment(ty: &Type) -> Option<&PathSegment> {
    let Type::Path(path) = ty else { return None };
    path.path.segments.last()
}

/// Matches `Option<Cow<'static, str>>`, with or without path prefixes.
fn is_context_type(ty: &Type) -> bool {
    let Some(option) = last_segment(ty).filter(|seg| seg.ident == "Option") else {
        return false;
    };
    let syn::PathArguments::AngleBracketed(args) = &option.arguments else {
        return false;
    };
    let Some(syn::GenericArgument::Type(inner)) = args.args.first() else {
        return false;
    };
    let Some(cow) = last_segment(inner).filter(|seg| seg.ident == "Cow") else {
        return false;
    };
    let syn::PathArguments::AngleBracketed(cow_args) = &cow.arguments else {
        return false;
    };

    let mut args = cow_args.args.iter();
    let is_static = matches!(args.next(), Some(syn::GenericArgument::Lifetime(lt)) if lt.ident == "static");
    let is_str = matches!(
        args.next(),
        Some(syn::GenericArgument::Type(t)) if last_segment(t).is_some_and(|seg| seg.ident == "str")
    );
    is_static && is_str
}
