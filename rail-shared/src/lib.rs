pub mod models;
pub mod pii;

pub use models::{PnrRecord, PnrStatus, TrainRoute, UserAccount};
pub use pii::Masked;
