pub mod auth;
pub mod dispatcher;
pub mod error;
pub mod pnr;
pub mod search;
pub mod state;
pub mod token;

pub use dispatcher::Dispatcher;
pub use error::AppError;
pub use state::AppState;
pub use token::JwtTokenIssuer;
