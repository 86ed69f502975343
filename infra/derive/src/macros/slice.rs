use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ItemStruct;

pub fn expand_slice(input: ItemStruct) -> TokenStream {
    let wrapper_ident = &input.ident;
    let vis = &input.vis;
    let fields = &input.fields;
    let attrs = &input.attrs;
    let docs = attrs.iter().filter(|attr| attr.path().is_ident("doc"));

    let inner_ident = format_ident!("{wrapper_ident}Inner");

    quote! {
        #(#attrs)*
        #[derive(Debug, Clone, PartialEq)]
        #vis struct #inner_ident #fields

        #(#docs)*
        #[derive(Debug, Clone)]
        #vis struct #wrapper_ident {
            inner: std::sync::Arc<#inner_ident>,
        }

        impl #wrapper_ident {
            #[must_use]
            pub fn new(inner: #inner_ident) -> Self {
                Self { inner: std::sync::Arc::new(inner) }
            }
        }

        impl std::ops::Deref for #wrapper_ident {
            type Target = #inner_ident;

            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }

        // Slices are immutable: two handles are equal when they share the same state.
        impl PartialEq for #wrapper_ident {
            fn eq(&self, other: &Self) -> bool {
                std::sync::Arc::ptr_eq(&self.inner, &other.inner) || self.inner == other.inner
            }
        }

        impl ::pcat_domain::registry::FeatureSlice for #wrapper_ident {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::{Item, ItemStruct, parse_quote};

    fn expanded_struct(tokens: &TokenStream, name: &str) -> ItemStruct {
        let file: syn::File = syn::parse2(tokens.clone()).expect("expansion parses");
        file.items
            .into_iter()
            .find_map(|item| match item {
                Item::Struct(s) if s.ident == name => Some(s),
                _ => None,
            })
            .expect("struct generated")
    }

    fn doc_count(item: &ItemStruct) -> usize {
        item.attrs.iter().filter(|attr| attr.path().is_ident("doc")).count()
    }

    #[test]
    fn docs_reach_both_handle_and_inner_state() {
        let input: ItemStruct = parse_quote! {
            /// Shared catalog lists.
            pub struct Catalog {
                users: Vec<u32>,
            }
        };

        let tokens = expand_slice(input);

        assert_eq!(doc_count(&expanded_struct(&tokens, "Catalog")), 1);
        assert_eq!(doc_count(&expanded_struct(&tokens, "CatalogInner")), 1);
    }

    #[test]
    fn undocumented_struct_expands_without_docs() {
        let input: ItemStruct = parse_quote! {
            pub struct Empty {}
        };

        let tokens = expand_slice(input);

        assert_eq!(doc_count(&expanded_struct(&tokens, "Empty")), 0);
    }
}
