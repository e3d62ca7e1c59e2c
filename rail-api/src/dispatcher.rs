use std::time::Duration;

use rail_core::{ApiResponse, ApiSuccess, Operation, Payload};
use tracing::{debug, info};

use crate::{auth, error::AppError, pnr, search, state::AppState};

/// In-process mock of the booking API.
///
/// Every call waits out a simulated network delay on the tokio timer, then resolves to
/// `Ok(ApiSuccess)` or `Err(ApiFailure)`. Nothing is retried and nothing escapes as a panic.
#[derive(Clone)]
pub struct Dispatcher {
    state: AppState,
}

impl Dispatcher {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Resolve `operation` by name (or catalog path) and run it after `delay`.
    ///
    /// Unknown names fail with "Invalid endpoint", also after the delay.
    pub async fn invoke(&self, operation: &str, payload: Payload, delay: Duration) -> ApiResponse {
        debug!(operation, delay_ms = delay.as_millis() as u64, "Mock call scheduled");
        let resolved = operation.parse::<Operation>();

        tokio::time::sleep(delay).await;

        let result = match resolved {
            Ok(op) => self.handle(op, &payload).await,
            Err(e) => Err(AppError::from(e)),
        };
        finish(operation, result)
    }

    /// `invoke` with the configured default delay.
    pub async fn invoke_default(&self, operation: &str, payload: Payload) -> ApiResponse {
        self.invoke(operation, payload, self.state.default_delay).await
    }

    /// Typed entry point for callers that already hold an `Operation`.
    pub async fn call(&self, operation: Operation, payload: Payload, delay: Duration) -> ApiResponse {
        debug!(operation = %operation, delay_ms = delay.as_millis() as u64, "Mock call scheduled");
        tokio::time::sleep(delay).await;

        let result = self.handle(operation, &payload).await;
        finish(operation.name(), result)
    }

    async fn handle(&self, operation: Operation, payload: &Payload) -> Result<ApiSuccess, AppError> {
        match operation {
            Operation::Login => auth::login(&self.state, payload).await,
            Operation::Signup => auth::signup(&self.state, payload).await,
            Operation::PnrStatus => pnr::pnr_status(&self.state, payload).await,
            Operation::SearchTrains => search::search_trains(&self.state, payload).await,
        }
    }
}

fn finish(operation: &str, result: Result<ApiSuccess, AppError>) -> ApiResponse {
    match result {
        Ok(success) => {
            info!(operation, message = %success.message, "Mock call succeeded");
            Ok(success)
        }
        Err(err) => {
            info!(operation, reason = %err, "Mock call failed");
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rail_store::app_config::Config;
    use serde_json::json;
    use tokio::time::Instant;

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(AppState::from_config(&Config::default()).unwrap())
    }

    #[tokio::test(start_paused = true)]
    async fn test_resolves_only_after_delay() {
        let dispatcher = dispatcher();
        let start = Instant::now();

        let response = dispatcher
            .invoke("pnrStatus", Payload::from(json!({ "pnr": "1234567890" })), Duration::from_millis(1500))
            .await;

        assert!(response.is_ok());
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_default_delay_is_one_second() {
        let dispatcher = dispatcher();
        let start = Instant::now();

        let response = dispatcher.invoke_default("bogus", Payload::new()).await;

        assert_eq!(response.unwrap_err().message, "Invalid endpoint");
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_in_flight_calls_are_independent() {
        let dispatcher = dispatcher();
        let start = Instant::now();

        let slow = dispatcher.invoke("searchTrains", Payload::new(), Duration::from_millis(2000));
        let fast = dispatcher.invoke("pnrStatus", Payload::new(), Duration::from_millis(500));
        let (slow, fast) = tokio::join!(slow, fast);

        assert!(slow.is_ok());
        assert_eq!(fast.unwrap_err().message, "PNR not found");
        // Delays overlap rather than queue
        assert!(start.elapsed() < Duration::from_millis(2500));
    }

    #[tokio::test]
    async fn test_login_with_unusable_token_expiry_fails_cleanly() {
        let store = std::sync::Arc::new(rail_store::MemoryStore::seeded());
        let tokens = std::sync::Arc::new(crate::JwtTokenIssuer::new("s", 1_000_000_000_000_000));
        let dispatcher = Dispatcher::new(AppState::in_memory(store, tokens, Duration::ZERO));

        let handle = tokio::spawn(async move {
            dispatcher
                .invoke(
                    "login",
                    Payload::from(json!({ "username": "demo123", "password": "Demo@123" })),
                    Duration::ZERO,
                )
                .await
        });
        let response = handle.await.expect("login task must not panic");

        assert_eq!(response.unwrap_err().message, "Internal service error");
    }

    #[tokio::test(start_paused = true)]
    async fn test_typed_call_matches_named_invoke() {
        let dispatcher = dispatcher();
        let payload = Payload::from(json!({ "from": "NDLS", "to": "CSMT", "date": "2025-10-04" }));

        let named = dispatcher.invoke("/trains/search", payload.clone(), Duration::ZERO).await;
        let typed = dispatcher.call(Operation::SearchTrains, payload, Duration::ZERO).await;

        assert_eq!(named, typed);
    }
}
