use clap::Parser;
use rail_client::cli::{Cli, CommandRunner, Commands};
use rail_client::forms::{SignupForm, TrainSearchForm};
use rail_store::app_config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --log-level
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("rail_api={0},rail_client={0},rail_store={0}", cli.log_level).into()),
        )
        .init();

    let config = Config::load()?;
    let mut runner = CommandRunner::new(&config, cli.delay_ms)?;
    runner.greet()?;

    match cli.command {
        Commands::Login {
            username,
            password,
            demo,
            auto_captcha,
        } => {
            runner.run_login(username, password, demo, auto_captcha).await?;
        }
        Commands::Signup {
            mobile,
            email,
            first_name,
            last_name,
            password,
            confirm_password,
            auto_captcha,
        } => {
            let form = SignupForm {
                mobile,
                email,
                first_name,
                last_name,
                password,
                confirm_password,
                captcha: String::new(),
            };
            runner.run_signup(form, auto_captcha).await?;
        }
        Commands::Pnr { pnr } => {
            runner.run_pnr(pnr).await?;
        }
        Commands::Search { from, to, date } => {
            runner.run_search(TrainSearchForm { from, to, date }).await?;
        }
        Commands::Call { operation, payload } => {
            runner.run_call(&operation, &payload).await?;
        }
        Commands::Demo => {
            runner.run_demo().await?;
        }
        Commands::ResetVisit => {
            runner.run_reset_visit()?;
        }
    }

    Ok(())
}
