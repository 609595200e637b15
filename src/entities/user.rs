use serde::{Deserialize, Serialize};

use crate::entities::UserId;

/// User represents a record of the directory and its contact details
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier of the record, assigned by the caller
    pub id: UserId,

    /// Display name, free form
    pub name: String,

    /// Email address, stored as given (see [crate::validate_email] for the
    /// shape check callers may apply beforehand)
    pub email: String,
}

impl User {
    /// User factory
    pub fn new(id: UserId, name: String, email: String) -> User {
        User { id, name, email }
    }
}
