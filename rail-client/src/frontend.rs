use std::time::Duration;

use rail_api::Dispatcher;
use rail_core::repository::AccountRepository;
use rail_core::{ApiFailure, LoginData, Operation, SignupData, TrainSearchResult};
use rail_shared::PnrRecord;
use tracing::{debug, warn};

use crate::captcha::{CaptchaBoard, CaptchaKind};
use crate::forms::{FormError, LoginForm, PnrQuery, SignupForm, TrainSearchForm};

#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Api(#[from] ApiFailure),
}

/// What the UI does around each mock call: validate, submit, and regenerate the
/// captcha whenever a login or signup is turned away.
pub struct Frontend {
    dispatcher: Dispatcher,
    captchas: CaptchaBoard,
    default_delay: Duration,
    pnr_delay: Duration,
}

impl Frontend {
    pub fn new(dispatcher: Dispatcher, captchas: CaptchaBoard, default_delay: Duration, pnr_delay: Duration) -> Self {
        Self {
            dispatcher,
            captchas,
            default_delay,
            pnr_delay,
        }
    }

    pub fn captcha(&self, kind: CaptchaKind) -> &str {
        self.captchas.current(kind)
    }

    pub fn refresh_captcha(&mut self, kind: CaptchaKind) -> &str {
        self.captchas.refresh(kind)
    }

    pub async fn login(&mut self, form: &LoginForm) -> Result<LoginData, FrontendError> {
        let payload = form
            .validate(self.captchas.current(CaptchaKind::Login))
            .inspect_err(|e| self.on_form_error(CaptchaKind::Login, e))?;

        match self.dispatcher.call(Operation::Login, payload, self.default_delay).await {
            Ok(success) => success
                .data
                .as_login()
                .cloned()
                .ok_or_else(|| unexpected_shape(Operation::Login)),
            Err(failure) => {
                self.captchas.refresh(CaptchaKind::Login);
                Err(failure.into())
            }
        }
    }

    pub async fn signup(&mut self, form: &SignupForm) -> Result<SignupData, FrontendError> {
        let payload = form
            .validate(self.captchas.current(CaptchaKind::Signup))
            .inspect_err(|e| self.on_form_error(CaptchaKind::Signup, e))?;

        match self.dispatcher.call(Operation::Signup, payload, self.default_delay).await {
            Ok(success) => success
                .data
                .as_signup()
                .cloned()
                .ok_or_else(|| unexpected_shape(Operation::Signup)),
            Err(failure) => {
                self.captchas.refresh(CaptchaKind::Signup);
                Err(failure.into())
            }
        }
    }

    pub async fn check_pnr(&self, query: &PnrQuery) -> Result<PnrRecord, FrontendError> {
        let payload = query.validate()?;
        let success = self.dispatcher.call(Operation::PnrStatus, payload, self.pnr_delay).await?;
        success
            .data
            .as_pnr()
            .cloned()
            .ok_or_else(|| unexpected_shape(Operation::PnrStatus))
    }

    pub async fn search_trains(&self, form: &TrainSearchForm) -> Result<TrainSearchResult, FrontendError> {
        let payload = form.validate()?;
        let success = self
            .dispatcher
            .call(Operation::SearchTrains, payload, self.default_delay)
            .await?;
        success
            .data
            .as_search()
            .cloned()
            .ok_or_else(|| unexpected_shape(Operation::SearchTrains))
    }

    /// Login form prefilled with the first seeded account and the current captcha.
    pub async fn demo_credentials(&self) -> Option<LoginForm> {
        let account = self
            .dispatcher
            .state()
            .accounts
            .first()
            .await
            .inspect_err(|e| warn!("Demo account lookup failed: {}", e))
            .ok()
            .flatten()?;

        Some(LoginForm {
            username: account.username,
            password: account.password.into_inner(),
            captcha: self.captchas.current(CaptchaKind::Login).to_string(),
        })
    }

    fn on_form_error(&mut self, kind: CaptchaKind, err: &FormError) {
        debug!(?kind, error = %err, "Form rejected before submission");
        if *err == FormError::CaptchaMismatch {
            self.captchas.refresh(kind);
        }
    }
}

fn unexpected_shape(operation: Operation) -> FrontendError {
    warn!(operation = %operation, "Response data did not match the operation");
    FrontendError::Api(ApiFailure::new("Unexpected response"))
}
