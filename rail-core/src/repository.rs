use async_trait::async_trait;
use rail_shared::{Masked, PnrRecord, TrainRoute, UserAccount};

use crate::CoreResult;

/// Fields supplied by a signup; id and login handle are assigned by the repository.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub mobile: String,
    pub email: String,
    pub name: String,
    pub password: Masked<String>,
}

/// Repository trait for passenger accounts
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Account whose handle or mobile is `identifier` and whose password matches.
    async fn find_by_credentials(
        &self,
        identifier: &str,
        password: &str,
    ) -> CoreResult<Option<UserAccount>>;

    /// Insert a new account.
    ///
    /// Fails with `CoreError::ConflictError` when the mobile or email is taken. The duplicate
    /// check and the id/handle assignment happen atomically with respect to other registrations.
    async fn register(&self, account: NewAccount) -> CoreResult<UserAccount>;

    async fn count(&self) -> CoreResult<usize>;

    /// First seeded account, used to prefill the demo login.
    async fn first(&self) -> CoreResult<Option<UserAccount>>;
}

/// Repository trait for PNR lookups
#[async_trait]
pub trait PnrRepository: Send + Sync {
    async fn find_pnr(&self, pnr: &str) -> CoreResult<Option<PnrRecord>>;
}

/// Repository trait for the route table
#[async_trait]
pub trait TrainRepository: Send + Sync {
    async fn search_trains(&self, from: &str, to: &str) -> CoreResult<Vec<TrainRoute>>;
}
