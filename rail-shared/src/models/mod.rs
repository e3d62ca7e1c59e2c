pub mod account;
pub mod pnr;
pub mod train;

pub use account::UserAccount;
pub use pnr::{PnrRecord, PnrStatus};
pub use train::TrainRoute;
