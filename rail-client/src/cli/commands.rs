use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "rail-demo")]
#[command(version, about = "Mock train booking services")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    /// Override the simulated network delay, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in with a handle or mobile number
    Login {
        #[arg(short, long)]
        username: Option<String>,

        #[arg(short, long)]
        password: Option<String>,

        /// Prefill the seeded demo account
        #[arg(long)]
        demo: bool,

        /// Answer the captcha automatically instead of prompting
        #[arg(long)]
        auto_captcha: bool,
    },

    /// Create an account
    Signup {
        #[arg(long)]
        mobile: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        confirm_password: String,

        #[arg(long)]
        auto_captcha: bool,
    },

    /// Look up a PNR
    Pnr {
        pnr: String,
    },

    /// Search trains between two station codes
    Search {
        #[arg(short, long)]
        from: String,

        #[arg(short, long)]
        to: String,

        #[arg(short, long)]
        date: String,
    },

    /// Send a raw call to the dispatcher and print the response envelope
    Call {
        /// Operation name or catalog path, e.g. `pnrStatus` or `/pnr/status`
        operation: String,

        /// JSON object payload
        #[arg(default_value = "{}")]
        payload: String,
    },

    /// Run every operation once against the seed data
    Demo,

    /// Forget the first-visit flag so the splash shows again
    ResetVisit,
}
