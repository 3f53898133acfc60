//! Form state module

mod actions;
mod field;
mod form_state;
mod reducer;

pub use actions::*;
pub use field::*;
pub use form_state::*;
pub use reducer::*;
