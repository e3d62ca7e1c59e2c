//! Terminal front-end for the mock booking API.
//!
//! ```bash
//! rail-demo login --demo --auto-captcha
//! rail-demo signup --mobile 9123456780 --email asha@example.com \
//!     --first-name Asha --last-name Rao --password 'Secret@12' --confirm-password 'Secret@12'
//! rail-demo pnr 1234567890
//! rail-demo search --from NDLS --to LKO --date 2025-10-04
//! rail-demo call pnrStatus '{"pnr":"2345678901"}'
//! rail-demo demo
//! ```

pub mod commands;
pub mod runner;

pub use commands::{Cli, Commands};
pub use runner::CommandRunner;
