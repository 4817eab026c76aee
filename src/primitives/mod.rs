//! # Layer 0: Primitives
//!
//! Basic building blocks shared by the shape traits:
//! - `bool.rs`: Type-level boolean logic (Present/Absent).
//! - `never.rs`: The uninhabited `Never` marker.
//! - `same.rs`: `SameAs` type equality predicate.

pub mod bool;
pub mod never;
pub mod same;

// Re-export key types at this level
pub use bool::{Absent, Bool, IsPresent, Present};
pub use never::Never;
pub use same::SameAs;
