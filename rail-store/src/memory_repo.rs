use async_trait::async_trait;
use chrono::Utc;
use rail_core::repository::{AccountRepository, NewAccount, PnrRepository, TrainRepository};
use rail_core::{CoreError, CoreResult};
use rail_shared::{PnrRecord, TrainRoute, UserAccount};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::app_config::StoreConfig;
use crate::seed::SeedData;
use crate::StoreError;

/// Process-wide dataset behind the mock service.
///
/// PNR records and routes are immutable after construction; accounts only grow,
/// and every insertion goes through the single write guard on `users`.
pub struct MemoryStore {
    users: RwLock<Vec<UserAccount>>,
    pnr_records: Vec<PnrRecord>,
    trains: Vec<TrainRoute>,
}

impl MemoryStore {
    pub fn from_seed(seed: SeedData) -> Self {
        Self {
            users: RwLock::new(seed.users),
            pnr_records: seed.pnr_records,
            trains: seed.trains,
        }
    }

    pub fn seeded() -> Self {
        Self::from_seed(SeedData::builtin())
    }

    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        let seed = match &config.seed_file {
            Some(path) => {
                info!("Loading seed data from {}", path);
                SeedData::from_file(path)?
            }
            None => SeedData::builtin(),
        };
        Ok(Self::from_seed(seed))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::seeded()
    }
}

/// "user" + epoch millis. Two signups in the same millisecond would collide, so the
/// numeric part is bumped until it is free.
fn generate_username(existing: &[UserAccount]) -> String {
    let mut stamp = Utc::now().timestamp_millis();
    loop {
        let candidate = format!("user{}", stamp);
        if !existing.iter().any(|u| u.username == candidate) {
            return candidate;
        }
        stamp += 1;
    }
}

#[async_trait]
impl AccountRepository for MemoryStore {
    async fn find_by_credentials(
        &self,
        identifier: &str,
        password: &str,
    ) -> CoreResult<Option<UserAccount>> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.is_identified_by(identifier) && u.password_matches(password))
            .cloned())
    }

    async fn register(&self, account: NewAccount) -> CoreResult<UserAccount> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.conflicts_with(&account.mobile, &account.email)) {
            return Err(CoreError::ConflictError(
                "mobile or email already registered".to_string(),
            ));
        }

        let created = UserAccount {
            id: users.len() as u64 + 1,
            username: generate_username(&users),
            mobile: account.mobile,
            email: account.email,
            password: account.password,
            name: account.name,
        };
        debug!(user_id = created.id, username = %created.username, "Account stored");

        users.push(created.clone());
        Ok(created)
    }

    async fn count(&self) -> CoreResult<usize> {
        Ok(self.users.read().await.len())
    }

    async fn first(&self) -> CoreResult<Option<UserAccount>> {
        Ok(self.users.read().await.first().cloned())
    }
}

#[async_trait]
impl PnrRepository for MemoryStore {
    async fn find_pnr(&self, pnr: &str) -> CoreResult<Option<PnrRecord>> {
        Ok(self.pnr_records.iter().find(|r| r.pnr == pnr).cloned())
    }
}

#[async_trait]
impl TrainRepository for MemoryStore {
    async fn search_trains(&self, from: &str, to: &str) -> CoreResult<Vec<TrainRoute>> {
        Ok(self
            .trains
            .iter()
            .filter(|t| t.serves(from, to))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rail_shared::Masked;
    use std::sync::Arc;

    fn new_account(mobile: &str, email: &str) -> NewAccount {
        NewAccount {
            mobile: mobile.to_string(),
            email: email.to_string(),
            name: "Asha Rao".to_string(),
            password: Masked::from("Secret@12"),
        }
    }

    #[tokio::test]
    async fn test_find_by_handle_or_mobile() {
        let store = MemoryStore::seeded();
        let by_handle = store.find_by_credentials("demo123", "Demo@123").await.unwrap();
        let by_mobile = store.find_by_credentials("9876543210", "Demo@123").await.unwrap();
        assert_eq!(by_handle.unwrap().id, 1);
        assert_eq!(by_mobile.unwrap().id, 1);

        let wrong = store.find_by_credentials("demo123", "demo@123").await.unwrap();
        assert!(wrong.is_none());
    }

    #[tokio::test]
    async fn test_register_assigns_next_id() {
        let store = MemoryStore::seeded();
        let created = store
            .register(new_account("9123456780", "asha@example.com"))
            .await
            .unwrap();

        assert_eq!(created.id, 2);
        assert!(created.username.starts_with("user"));
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_register_rejects_duplicates() {
        let store = MemoryStore::seeded();

        let same_mobile = store.register(new_account("9876543210", "x@example.com")).await;
        let same_email = store.register(new_account("9000000000", "demo@example.com")).await;

        assert!(matches!(same_mobile, Err(CoreError::ConflictError(_))));
        assert!(matches!(same_email, Err(CoreError::ConflictError(_))));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_registrations_get_distinct_ids_and_handles() {
        let store = Arc::new(MemoryStore::seeded());

        let mut handles = Vec::new();
        for i in 0..20 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .register(new_account(&format!("90000000{:02}", i), &format!("p{}@example.com", i)))
                    .await
                    .unwrap()
            }));
        }

        let mut ids = Vec::new();
        let mut usernames = Vec::new();
        for handle in handles {
            let account = handle.await.unwrap();
            ids.push(account.id);
            usernames.push(account.username);
        }
        ids.sort();
        usernames.sort();
        usernames.dedup();

        assert_eq!(ids, (2..=21).collect::<Vec<u64>>());
        assert_eq!(usernames.len(), 20);
    }

    #[tokio::test]
    async fn test_search_is_exact_match() {
        let store = MemoryStore::seeded();
        let lko = store.search_trains("NDLS", "LKO").await.unwrap();
        assert_eq!(lko.len(), 1);
        assert_eq!(lko[0].number, "12020");

        assert!(store.search_trains("ndls", "lko").await.unwrap().is_empty());
        assert!(store.search_trains("XXXX", "YYYY").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_from_config_without_seed_file_uses_builtin() {
        let store = MemoryStore::from_config(&StoreConfig::default()).unwrap();
        assert!(store.find_pnr("1234567890").await.unwrap().is_some());
        assert_eq!(store.first().await.unwrap().unwrap().username, "demo123");
    }
}
