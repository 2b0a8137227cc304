//! Application state module

mod entrance;
mod field;
mod form_state;
mod notifications;

pub use entrance::*;
pub use field::*;
pub use form_state::*;
pub use notifications::*;
