//! Application state module

mod app_state;
mod form;
mod lookup_state;
mod validate;

pub use app_state::*;
pub use form::*;
pub use lookup_state::*;
pub use validate::*;
