use rail_core::Payload;
use regex::Regex;
use std::sync::OnceLock;

/// Pre-validation failures. The display text is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Please enter a valid 10-digit mobile number.")]
    InvalidMobile,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Password must be at least 8 characters with uppercase, lowercase, number and special character.")]
    WeakPassword,
    #[error("Invalid captcha. Please try again.")]
    CaptchaMismatch,
    #[error("Please enter a valid 10-digit PNR number.")]
    InvalidPnr,
    #[error("Please fill in all search fields (From, To, and Date) to find trains.")]
    MissingSearchFields,
}

struct PasswordPolicy {
    charset: Regex,
    lower: Regex,
    upper: Regex,
    digit: Regex,
    special: Regex,
}

fn password_policy() -> &'static PasswordPolicy {
    static POLICY: OnceLock<PasswordPolicy> = OnceLock::new();
    POLICY.get_or_init(|| PasswordPolicy {
        charset: Regex::new(r"^[A-Za-z\d@$!%*?&]{8,}$").expect("valid password charset pattern"),
        lower: Regex::new(r"[a-z]").expect("valid pattern"),
        upper: Regex::new(r"[A-Z]").expect("valid pattern"),
        digit: Regex::new(r"\d").expect("valid pattern"),
        special: Regex::new(r"[@$!%*?&]").expect("valid pattern"),
    })
}

/// At least 8 characters from `[A-Za-z0-9@$!%*?&]`, with one of each class.
pub fn is_strong_password(password: &str) -> bool {
    let policy = password_policy();
    policy.charset.is_match(password)
        && policy.lower.is_match(password)
        && policy.upper.is_match(password)
        && policy.digit.is_match(password)
        && policy.special.is_match(password)
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub captcha: String,
}

impl LoginForm {
    pub fn validate(&self, expected_captcha: &str) -> Result<Payload, FormError> {
        if self.username.is_empty() || self.password.is_empty() || self.captcha.is_empty() {
            return Err(FormError::MissingFields);
        }
        if self.captcha != expected_captcha {
            return Err(FormError::CaptchaMismatch);
        }
        Ok(Payload::new()
            .with("username", self.username.as_str())
            .with("password", self.password.as_str()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub mobile: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub confirm_password: String,
    pub captcha: String,
}

impl SignupForm {
    /// Rules run in order and the first failure wins; the captcha is checked last.
    pub fn validate(&self, expected_captcha: &str) -> Result<Payload, FormError> {
        let fields = [
            &self.mobile,
            &self.email,
            &self.first_name,
            &self.last_name,
            &self.password,
            &self.confirm_password,
            &self.captcha,
        ];
        if fields.iter().any(|f| f.is_empty()) {
            return Err(FormError::MissingFields);
        }
        // Length only, digits are not enforced
        if self.mobile.chars().count() != 10 {
            return Err(FormError::InvalidMobile);
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        if !is_strong_password(&self.password) {
            return Err(FormError::WeakPassword);
        }
        if self.captcha != expected_captcha {
            return Err(FormError::CaptchaMismatch);
        }

        Ok(Payload::new()
            .with("mobile", self.mobile.as_str())
            .with("email", self.email.as_str())
            .with("firstName", self.first_name.as_str())
            .with("lastName", self.last_name.as_str())
            .with("password", self.password.as_str()))
    }
}

#[derive(Debug, Clone)]
pub struct PnrQuery(pub String);

impl PnrQuery {
    pub fn validate(&self) -> Result<Payload, FormError> {
        let pnr = &self.0;
        if pnr.len() != 10 || !pnr.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FormError::InvalidPnr);
        }
        Ok(Payload::new().with("pnr", pnr.as_str()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct TrainSearchForm {
    pub from: String,
    pub to: String,
    pub date: String,
}

impl TrainSearchForm {
    pub fn validate(&self) -> Result<Payload, FormError> {
        if self.from.is_empty() || self.to.is_empty() || self.date.is_empty() {
            return Err(FormError::MissingSearchFields);
        }
        Ok(Payload::new()
            .with("from", self.from.as_str())
            .with("to", self.to.as_str())
            .with("date", self.date.as_str()))
    }
}
