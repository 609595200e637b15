use std::{collections::HashMap, hash::Hash};

use anyhow::anyhow;
use async_trait::async_trait;

use super::{AdapterError, StoreAdapter};

/// A [StoreAdapter] that keeps its records in memory.
///
/// The mapping is unordered, reads hand out clones of the stored records.
pub struct MemoryAdapter<K, V> {
    values: HashMap<K, V>,
}

impl<K, V> MemoryAdapter<K, V>
where
    K: Hash + Eq + Send + Sync + Clone,
    V: Send + Sync + Clone,
{
    /// MemoryAdapter factory, taking optional seed data.
    pub fn new(data: Option<Vec<(K, V)>>) -> Result<Self, AdapterError> {
        let data = data.unwrap_or_default();
        let mut values = HashMap::new();

        for (key, record) in data.into_iter() {
            if values.insert(key, record).is_some() {
                return Err(AdapterError::InitializationError(anyhow!(
                    "duplicate key found"
                )));
            }
        }

        Ok(Self { values })
    }
}

#[async_trait]
impl<K, V> StoreAdapter for MemoryAdapter<K, V>
where
    K: Hash + Eq + Send + Sync + Clone,
    V: Send + Sync + Clone,
{
    type Key = K;
    type Record = V;

    async fn store_record(
        &mut self,
        key: &Self::Key,
        record: &Self::Record,
    ) -> Result<(), AdapterError> {
        self.values.insert(key.clone(), record.clone());

        Ok(())
    }

    async fn get_record(&self, key: &Self::Key) -> Result<Option<Self::Record>, AdapterError> {
        Ok(self.values.get(key).cloned())
    }

    async fn record_exists(&self, key: &Self::Key) -> Result<bool, AdapterError> {
        Ok(self.values.contains_key(key))
    }

    async fn remove(&mut self, key: &Self::Key) -> Result<Option<Self::Record>, AdapterError> {
        Ok(self.values.remove(key))
    }
}
