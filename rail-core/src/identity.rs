use rail_shared::UserAccount;
use serde::{Deserialize, Serialize};

use crate::CoreResult;

/// Claims embedded in a session token minted at login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub name: String,
    pub role: String,
    pub jti: String, // fresh per token, makes every token distinct
    pub exp: usize,
}

/// Mints opaque session tokens for authenticated accounts.
///
/// The only contract is that two calls never return the same token.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, account: &UserAccount) -> CoreResult<String>;
}
