use async_trait::async_trait;

use super::{AdapterError, StoreAdapter};

/// A [StoreAdapter] that remembers only the last record it was given,
/// for testing purpose.
pub struct DumbStoreAdapter<K, R> {
    last_key: Option<K>,
    last_record: Option<R>,
}

impl<K, R> DumbStoreAdapter<K, R> {
    /// DumbStoreAdapter factory
    pub fn new() -> Self {
        Self {
            last_key: None,
            last_record: None,
        }
    }
}

impl<K, R> Default for DumbStoreAdapter<K, R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<K, R> StoreAdapter for DumbStoreAdapter<K, R>
where
    K: PartialEq + Clone + Send + Sync,
    R: Clone + Send + Sync,
{
    type Key = K;
    type Record = R;

    async fn store_record(
        &mut self,
        key: &Self::Key,
        record: &Self::Record,
    ) -> Result<(), AdapterError> {
        let key = key.clone();
        let record = record.clone();

        self.last_key = Some(key);
        self.last_record = Some(record);

        Ok(())
    }

    async fn get_record(&self, key: &Self::Key) -> Result<Option<Self::Record>, AdapterError> {
        if self.record_exists(key).await? {
            Ok(self.last_record.as_ref().cloned())
        } else {
            Ok(None)
        }
    }

    async fn record_exists(&self, key: &Self::Key) -> Result<bool, AdapterError> {
        Ok(self.last_key.is_some() && self.last_key.as_ref().unwrap() == key)
    }

    async fn remove(&mut self, key: &Self::Key) -> Result<Option<Self::Record>, AdapterError> {
        if self.record_exists(key).await? {
            self.last_key = None;

            Ok(self.last_record.take())
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_with_no_record_exists() {
        let adapter: DumbStoreAdapter<u64, String> = DumbStoreAdapter::new();

        assert!(!adapter.record_exists(&1).await.unwrap());
    }

    #[tokio::test]
    async fn test_with_no_record_get() {
        let adapter: DumbStoreAdapter<u64, String> = DumbStoreAdapter::new();

        assert!(adapter.get_record(&1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_write_record() {
        let mut adapter: DumbStoreAdapter<u64, String> = DumbStoreAdapter::new();

        assert!(adapter.store_record(&1, &"record".to_string()).await.is_ok());
        assert_eq!(
            "record".to_owned(),
            adapter.get_record(&1).await.unwrap().unwrap()
        );
    }

    #[tokio::test]
    async fn test_only_the_last_record_is_kept() {
        let mut adapter: DumbStoreAdapter<u64, String> = DumbStoreAdapter::new();
        adapter.store_record(&1, &"one".to_string()).await.unwrap();
        adapter.store_record(&2, &"two".to_string()).await.unwrap();

        assert!(!adapter.record_exists(&1).await.unwrap());
        assert_eq!(
            "two".to_owned(),
            adapter.get_record(&2).await.unwrap().unwrap()
        );
    }

    #[tokio::test]
    async fn test_remove_existing_record() {
        let mut adapter: DumbStoreAdapter<u64, String> = DumbStoreAdapter::new();
        adapter.store_record(&1, &"record".to_string()).await.unwrap();
        let removed = adapter.remove(&1).await.unwrap();

        assert_eq!(Some("record".to_owned()), removed);
        assert!(!adapter.record_exists(&1).await.unwrap());
    }

    #[tokio::test]
    async fn test_remove_unknown_record() {
        let mut adapter: DumbStoreAdapter<u64, String> = DumbStoreAdapter::new();
        adapter.store_record(&1, &"record".to_string()).await.unwrap();

        assert!(adapter.remove(&2).await.unwrap().is_none());
        assert!(adapter.record_exists(&1).await.unwrap());
    }
}
