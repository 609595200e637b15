//! The entities used by, and exchanged with, the user record store.

mod type_alias;
mod user;

pub use type_alias::*;
pub use user::*;
