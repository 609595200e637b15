//! Define a generic way to store data with the [Store Adapters][adapter], and
//! the [UserStorer] to store user records.

pub mod adapter;
mod error;
mod user_store;

pub use error::StoreError;
pub use user_store::{UserStore, UserStorer};
