use std::sync::Arc;
use std::time::Duration;

use rail_core::repository::{AccountRepository, PnrRepository, TrainRepository};
use rail_core::TokenIssuer;
use rail_store::app_config::Config;
use rail_store::{MemoryStore, StoreError};

use crate::token::JwtTokenIssuer;

#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<dyn AccountRepository>,
    pub pnr_records: Arc<dyn PnrRepository>,
    pub trains: Arc<dyn TrainRepository>,
    pub tokens: Arc<dyn TokenIssuer>,
    pub default_delay: Duration,
}

impl AppState {
    /// All three repositories backed by the same in-memory store.
    pub fn in_memory(store: Arc<MemoryStore>, tokens: Arc<dyn TokenIssuer>, default_delay: Duration) -> Self {
        Self {
            accounts: store.clone(),
            pnr_records: store.clone(),
            trains: store,
            tokens,
            default_delay,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        let store = Arc::new(MemoryStore::from_config(&config.store)?);
        let tokens = Arc::new(JwtTokenIssuer::new(
            &config.auth.jwt_secret,
            config.auth.jwt_expiration_seconds,
        ));
        Ok(Self::in_memory(store, tokens, config.dispatcher.default_delay()))
    }
}
