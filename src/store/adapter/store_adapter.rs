use async_trait::async_trait;
use thiserror::Error;

use crate::StdError;

/// [StoreAdapter] related errors
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Generic [StoreAdapter] error.
    #[error("something wrong happened")]
    GeneralError(#[source] StdError),

    /// Error raised when the store initialization fails.
    #[error("problem creating the store")]
    InitializationError(#[source] StdError),
}

/// Represent a way to store Key/Value pair data.
#[async_trait]
pub trait StoreAdapter: Sync + Send {
    /// The key type
    type Key;

    /// The record type
    type Record;

    /// Store the given `record`, overwriting any record already stored
    /// under the same `key`.
    async fn store_record(
        &mut self,
        key: &Self::Key,
        record: &Self::Record,
    ) -> Result<(), AdapterError>;

    /// Get the record stored using the given `key`.
    async fn get_record(&self, key: &Self::Key) -> Result<Option<Self::Record>, AdapterError>;

    /// Check if a record exist for the given `key`.
    async fn record_exists(&self, key: &Self::Key) -> Result<bool, AdapterError>;

    /// Remove the value from the store.
    ///
    /// If the value exists it is returned, otherwise None is returned.
    async fn remove(&mut self, key: &Self::Key) -> Result<Option<Self::Record>, AdapterError>;
}
