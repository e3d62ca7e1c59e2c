use std::io::{self, BufRead, Write as _};
use std::time::Duration;

use anyhow::{Context, Result};
use rail_api::{AppState, Dispatcher};
use rail_core::response::to_envelope;
use rail_core::{Operation, Payload};
use rail_store::app_config::Config;
use tracing::info;

use crate::captcha::{CaptchaBoard, CaptchaKind};
use crate::forms::{LoginForm, PnrQuery, SignupForm, TrainSearchForm};
use crate::frontend::{Frontend, FrontendError};
use crate::render;
use crate::visit::VisitTracker;

pub struct CommandRunner {
    dispatcher: Dispatcher,
    frontend: Frontend,
    visits: VisitTracker,
    delay: Duration,
}

impl CommandRunner {
    pub fn new(config: &Config, delay_override: Option<u64>) -> Result<Self> {
        let mut state = AppState::from_config(config).context("Failed to build the mock store")?;
        let delay = delay_override
            .map(Duration::from_millis)
            .unwrap_or_else(|| config.dispatcher.default_delay());
        let pnr_delay = delay_override
            .map(Duration::from_millis)
            .unwrap_or_else(|| config.dispatcher.pnr_delay());
        state.default_delay = delay;

        let dispatcher = Dispatcher::new(state);
        let frontend = Frontend::new(
            dispatcher.clone(),
            CaptchaBoard::new(config.client.captcha_length),
            delay,
            pnr_delay,
        );

        Ok(Self {
            dispatcher,
            frontend,
            visits: VisitTracker::new(&config.client.visited_flag_path),
            delay,
        })
    }

    /// Splash on the first run only.
    pub fn greet(&self) -> Result<()> {
        if self.visits.first_visit().context("Failed to record visit")? {
            println!("==============================");
            println!("  Rail booking, reimagined");
            println!("==============================");
        }
        info!(
            endpoints = ?Operation::ALL.iter().map(|op| op.endpoint()).collect::<Vec<_>>(),
            "Mock API ready"
        );
        Ok(())
    }

    pub async fn run_login(
        &mut self,
        username: Option<String>,
        password: Option<String>,
        demo: bool,
        auto_captcha: bool,
    ) -> Result<()> {
        let mut form = if demo {
            let form = self
                .frontend
                .demo_credentials()
                .await
                .context("No demo account in the store")?;
            println!("Demo credentials filled. Click Login to continue.");
            form
        } else {
            LoginForm {
                username: username.unwrap_or_default(),
                password: password.unwrap_or_default(),
                captcha: String::new(),
            }
        };
        form.captcha = self.answer_captcha(CaptchaKind::Login, auto_captcha)?;

        println!("Logging in...");
        match self.frontend.login(&form).await {
            Ok(data) => {
                println!("{}", render::login_greeting(&data));
                println!("Hi, {}", render::first_name(&data));
                println!("Session token: {}", data.token);
            }
            Err(e) => report(e),
        }
        Ok(())
    }

    pub async fn run_signup(&mut self, mut form: SignupForm, auto_captcha: bool) -> Result<()> {
        form.captcha = self.answer_captcha(CaptchaKind::Signup, auto_captcha)?;

        println!("Creating Account...");
        match self.frontend.signup(&form).await {
            Ok(data) => println!("{}", render::signup_confirmation(&data)),
            Err(e) => report(e),
        }
        Ok(())
    }

    pub async fn run_pnr(&self, pnr: String) -> Result<()> {
        println!("Checking status...");
        match self.frontend.check_pnr(&PnrQuery(pnr)).await {
            Ok(record) => println!("{}", render::pnr_summary(&record)),
            Err(e) => report(e),
        }
        Ok(())
    }

    pub async fn run_search(&self, form: TrainSearchForm) -> Result<()> {
        match self.frontend.search_trains(&form).await {
            Ok(result) => {
                println!("{}", render::search_heading(&result));
                if result.trains.is_empty() {
                    println!("No trains found on this route.");
                }
                for line in render::train_lines(&result) {
                    println!("  {}", line);
                }
            }
            Err(e) => report(e),
        }
        Ok(())
    }

    pub async fn run_call(&self, operation: &str, payload: &str) -> Result<()> {
        let value: serde_json::Value =
            serde_json::from_str(payload).context("Payload must be a JSON object")?;
        let response = self
            .dispatcher
            .invoke(operation, Payload::from(value), self.delay)
            .await;
        println!("{}", serde_json::to_string_pretty(&to_envelope(&response))?);
        Ok(())
    }

    /// Every operation once, on the seeded data.
    pub async fn run_demo(&mut self) -> Result<()> {
        println!("--- login (demo account)");
        self.run_login(None, None, true, true).await?;

        println!("--- login (wrong password)");
        self.run_login(Some("demo123".into()), Some("nope".into()), false, true)
            .await?;

        println!("--- signup");
        let stamp = clock_suffix();
        let form = SignupForm {
            mobile: format!("9{:09}", stamp),
            email: format!("rider{}@example.com", stamp),
            first_name: "Asha".into(),
            last_name: "Rao".into(),
            password: "Secret@12".into(),
            confirm_password: "Secret@12".into(),
            captcha: String::new(),
        };
        self.run_signup(form, true).await?;

        for pnr in ["1234567890", "2345678901", "0000000000"] {
            println!("--- pnr {}", pnr);
            self.run_pnr(pnr.to_string()).await?;
        }

        for (from, to) in [("NDLS", "LKO"), ("NDLS", "CSMT"), ("XXXX", "YYYY")] {
            println!("--- search {} -> {}", from, to);
            self.run_search(TrainSearchForm {
                from: from.into(),
                to: to.into(),
                date: "2025-10-04".into(),
            })
            .await?;
        }

        println!("--- unknown endpoint");
        self.run_call("/booking/create", "{}").await
    }

    pub fn run_reset_visit(&self) -> Result<()> {
        self.visits.reset().context("Failed to clear visit flag")?;
        println!("Visit flag cleared: {}", self.visits.path().display());
        Ok(())
    }

    fn answer_captcha(&self, kind: CaptchaKind, auto: bool) -> Result<String> {
        let challenge = self.frontend.captcha(kind).to_string();
        if auto {
            return Ok(challenge);
        }

        print!("Captcha: {}\nEnter captcha: ", challenge);
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(answer.trim().to_string())
    }
}

fn report(err: FrontendError) {
    println!("{}", err);
}

/// Low digits of the clock, enough to keep demo signups from colliding across runs.
fn clock_suffix() -> u64 {
    chrono::Utc::now().timestamp_millis().unsigned_abs() % 1_000_000_000
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &tempfile::TempDir) -> Config {
        let mut config = Config::default();
        config.client.visited_flag_path = dir.path().join("visited").display().to_string();
        config
    }

    #[test]
    fn test_greet_marks_first_visit() {
        let dir = tempfile::tempdir().unwrap();
        let runner = CommandRunner::new(&config_in(&dir), Some(0)).unwrap();

        assert!(!runner.visits.has_visited());
        runner.greet().unwrap();
        assert!(runner.visits.has_visited());

        runner.run_reset_visit().unwrap();
        assert!(!runner.visits.has_visited());
    }

    #[test]
    fn test_delay_override_applies_to_dispatcher() {
        let dir = tempfile::tempdir().unwrap();
        let runner = CommandRunner::new(&config_in(&dir), Some(5)).unwrap();
        assert_eq!(runner.delay, Duration::from_millis(5));
        assert_eq!(runner.dispatcher.state().default_delay, Duration::from_millis(5));
    }

    #[test]
    fn test_clock_suffix_fits_demo_mobile() {
        let mobile = format!("9{:09}", clock_suffix());
        assert_eq!(mobile.len(), 10);
    }

    #[tokio::test]
    async fn test_raw_call_rejects_malformed_payload() {
        let dir = tempfile::tempdir().unwrap();
        let runner = CommandRunner::new(&config_in(&dir), Some(0)).unwrap();

        assert!(runner.run_call("pnrStatus", "{not json").await.is_err());
        assert!(runner.run_call("pnrStatus", r#"{"pnr":"1234567890"}"#).await.is_ok());
    }
}
