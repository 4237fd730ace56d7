//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod model_selector;
mod turn_role;

pub use model_selector::*;
pub use turn_role::*;
