//! Procedural macros for tola-shapes
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `shape_check!` | - | Boolean shape predicates on concrete types |
//! | `#[derive(PairLike)]` | struct | Two-field structs as pair-like values |

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod common;
mod user;

/// Check shape predicates on concrete types at compile time.
///
/// # Syntax: `shape_check!(Type: Expr, ...)`
///
/// `Expr` combines trait bounds with `&`, `|`, `!` and parentheses. Traits
/// may carry generic arguments. Multiple checks are ANDed.
///
/// ```ignore
/// use tola_shapes::prelude::*;
///
/// assert!(shape_check!(Vec<i32>: SequenceLike<i64>));
/// assert!(shape_check!(Vec<i64>: !SequenceLike<i32>));
/// assert!(shape_check!(u8: Numeric & !StringViewLike));
/// assert!(shape_check!(
///     HashMap<String, u8>: AssocMapLike<str, u8>,
///     VecMap<String, u8>: AssocMapLike<str, u8>,
/// ));
/// ```
///
/// Like the `Detect` consts, the probe only sees impls for concrete types;
/// inside `fn f<T>()` a check on `T` evaluates to `false`.
#[proc_macro]
pub fn shape_check(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as common::CheckList);
    user::expand_shape_check(input).into()
}

/// Derive `PairLike` for a struct with exactly two fields.
///
/// ```ignore
/// #[derive(PairLike)]
/// struct Entry {
///     name: String,
///     score: u32,
/// }
///
/// let e = Entry { name: "a".into(), score: 1 };
/// assert_eq!(e.second(), &1);
/// ```
#[proc_macro_derive(PairLike)]
pub fn derive_pair_like(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_pair_like(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
