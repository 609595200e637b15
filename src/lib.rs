#![warn(missing_docs)]

//! In-memory user directory.
//!
//! Provide:
//! - The [entities] describing a user record.
//! - A way to store user records with the [store] types, built on the
//!   generic [store adapters][store::adapter].
//! - An [email] shape check for callers that want to vet an address before
//!   creating a record.

pub mod email;
pub mod entities;
pub mod store;

pub use email::validate_email;
pub use entities::{User, UserId};
pub use store::{UserStore, UserStorer};

/// Generic error type
pub type StdError = anyhow::Error;

/// Generic result type
pub type StdResult<T> = Result<T, StdError>;
