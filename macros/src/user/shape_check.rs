use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::common::{CheckList, generate_probe_body};

/// Expand `shape_check!(T: Expr, U: Expr, ...)` into a `bool` expression.
///
/// Every check becomes a probe block; multiple checks are ANDed together.
pub fn expand_shape_check(input: CheckList) -> TokenStream2 {
    // Reference user's types before the probes to avoid unused import warnings
    let type_refs: Vec<_> = input
        .checks
        .iter()
        .map(|c| {
            let ty = &c.ty;
            quote! { __use_type::<#ty>(::core::marker::PhantomData); }
        })
        .collect();
    let check_exprs: Vec<_> = input
        .checks
        .iter()
        .map(|c| generate_probe_body(&c.expr, &c.ty))
        .collect();

    quote! {
        {
            fn __use_type<__T: ?Sized>(_: ::core::marker::PhantomData<__T>) {}
            #(#type_refs)*
            (#(#check_exprs)&&*)
        }
    }
}
