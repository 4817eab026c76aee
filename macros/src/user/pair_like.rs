use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Index, spanned::Spanned};

/// #[derive(PairLike)] for structs with exactly two fields.
///
/// The first declared field is `First`, the second is `Second`. Works for
/// named and tuple structs, with any generics.
pub fn expand_derive_pair_like(input: DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => {
            return Err(syn::Error::new(
                input.span(),
                "PairLike can only be derived for structs",
            ));
        }
    };

    let list: Vec<_> = match fields {
        Fields::Named(named) => named.named.iter().collect(),
        Fields::Unnamed(unnamed) => unnamed.unnamed.iter().collect(),
        Fields::Unit => Vec::new(),
    };
    if list.len() != 2 {
        return Err(syn::Error::new(
            fields.span(),
            format!("PairLike requires exactly two fields, found {}", list.len()),
        ));
    }

    let first_ty = &list[0].ty;
    let second_ty = &list[1].ty;

    let (first_access, second_access) = match fields {
        Fields::Named(_) => {
            let a = list[0].ident.as_ref();
            let b = list[1].ident.as_ref();
            (quote! { #a }, quote! { #b })
        }
        _ => {
            let a = Index::from(0);
            let b = Index::from(1);
            (quote! { #a }, quote! { #b })
        }
    };

    Ok(quote! {
        impl #impl_generics ::tola_shapes::PairLike for #ident #ty_generics #where_clause {
            type First = #first_ty;
            type Second = #second_ty;

            #[inline]
            fn first(&self) -> &Self::First {
                &self.#first_access
            }

            #[inline]
            fn second(&self) -> &Self::Second {
                &self.#second_access
            }

            #[inline]
            fn into_pair(self) -> (Self::First, Self::Second) {
                (self.#first_access, self.#second_access)
            }
        }
    })
}
