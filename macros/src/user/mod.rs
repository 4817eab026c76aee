//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `shape_check!` | function macro | Evaluate shape predicates on concrete types |
//! | `#[derive(PairLike)]` | on struct | Implement `PairLike` for two-field structs |

mod pair_like;
mod shape_check;

pub use pair_like::expand_derive_pair_like;
pub use shape_check::expand_shape_check;
