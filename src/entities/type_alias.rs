/// UserId represents the caller-assigned identifier of a user record
pub type UserId = String;
