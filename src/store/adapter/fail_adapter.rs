use std::marker::PhantomData;

use anyhow::anyhow;
use async_trait::async_trait;

use super::{AdapterError, StoreAdapter};

/// A [StoreAdapter] which always fails, for testing how stores surface
/// adapter errors.
pub struct FailStoreAdapter<K, R> {
    key: PhantomData<K>,
    record: PhantomData<R>,
}

impl<K, R> FailStoreAdapter<K, R> {
    /// FailStoreAdapter factory
    pub fn new() -> Self {
        Self {
            key: PhantomData,
            record: PhantomData,
        }
    }
}

impl<K, R> Default for FailStoreAdapter<K, R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<K, R> StoreAdapter for FailStoreAdapter<K, R>
where
    K: Send + Sync,
    R: Send + Sync,
{
    type Key = K;
    type Record = R;

    async fn store_record(
        &mut self,
        _key: &Self::Key,
        _record: &Self::Record,
    ) -> Result<(), AdapterError> {
        Err(AdapterError::GeneralError(anyhow!(
            "Fail adapter always fails to store a record"
        )))
    }

    async fn get_record(&self, _key: &Self::Key) -> Result<Option<Self::Record>, AdapterError> {
        Err(AdapterError::GeneralError(anyhow!(
            "Fail adapter always fails to get a record"
        )))
    }

    async fn record_exists(&self, _key: &Self::Key) -> Result<bool, AdapterError> {
        Err(AdapterError::GeneralError(anyhow!(
            "Fail adapter always fails to check a record"
        )))
    }

    async fn remove(&mut self, _key: &Self::Key) -> Result<Option<Self::Record>, AdapterError> {
        Err(AdapterError::GeneralError(anyhow!(
            "Fail adapter always fails to remove a record"
        )))
    }
}
