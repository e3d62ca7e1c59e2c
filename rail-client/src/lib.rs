//! Consumer side of the mock booking API: the checks a front-end runs before it calls the
//! dispatcher, the captcha challenges, the first-visit flag, and the terminal front-end.

pub mod captcha;
pub mod cli;
pub mod forms;
pub mod frontend;
pub mod render;
pub mod visit;

pub use captcha::{CaptchaBoard, CaptchaKind};
pub use forms::{FormError, LoginForm, PnrQuery, SignupForm, TrainSearchForm};
pub use frontend::{Frontend, FrontendError};
pub use visit::VisitTracker;
