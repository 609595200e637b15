use async_trait::async_trait;
use slog::{Logger, debug, o};
use tokio::sync::RwLock;

use crate::entities::{User, UserId};

use super::StoreError;
use super::adapter::StoreAdapter;

type Adapter = Box<dyn StoreAdapter<Key = UserId, Record = User>>;

/// Store and get [User] records by id.
#[async_trait]
pub trait UserStorer: Sync + Send {
    /// Save the given [User], overwriting any record already stored under
    /// the same id.
    async fn create_user(&self, user: User) -> Result<(), StoreError>;

    /// Get the [User] stored under the given id if any.
    async fn get_user(&self, id: &str) -> Result<Option<User>, StoreError>;

    /// Remove the [User] stored under the given id, reporting whether a
    /// record was actually removed.
    async fn delete_user(&self, id: &str) -> Result<bool, StoreError>;
}

/// A [UserStorer] that saves records through a [StoreAdapter].
pub struct UserStore {
    adapter: RwLock<Adapter>,
    logger: Logger,
}

impl UserStore {
    /// UserStore factory
    pub fn new(adapter: Adapter, logger: Logger) -> Self {
        Self {
            adapter: RwLock::new(adapter),
            logger: logger.new(o!("src" => "UserStore")),
        }
    }
}

#[async_trait]
impl UserStorer for UserStore {
    async fn create_user(&self, user: User) -> Result<(), StoreError> {
        debug!(self.logger, "Creating user record"; "user_id" => %user.id);
        self.adapter.write().await.store_record(&user.id, &user).await?;

        Ok(())
    }

    async fn get_user(&self, id: &str) -> Result<Option<User>, StoreError> {
        Ok(self.adapter.read().await.get_record(&id.to_string()).await?)
    }

    async fn delete_user(&self, id: &str) -> Result<bool, StoreError> {
        debug!(self.logger, "Deleting user record"; "user_id" => %id);
        let removed = self.adapter.write().await.remove(&id.to_string()).await?;

        Ok(removed.is_some())
    }
}
