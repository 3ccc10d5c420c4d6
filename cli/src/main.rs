mod store;
mod transport;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use auth::forms::{LoginForm, PasswordChangeForm, ProfileForm, RegisterForm};
use auth::{ApiConfig, AuthError, AuthGateway, Session};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use crate::store::{FileTokenStore, default_token_path};
use crate::transport::ReqwestTransport;

type CliGateway = AuthGateway<ReqwestTransport, FileTokenStore>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{}", .0.user_message())]
    Auth(#[from] AuthError),
    #[error("not logged in; run `facerec login` first")]
    NotLoggedIn,
    #[error("no config directory found; pass --token-file or set FACEREC_TOKEN_FILE")]
    NoTokenPath,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("health check failed with status {0}")]
    Health(u16),
    #[error("nothing to update; pass --first-name, --last-name, or --email")]
    EmptyUpdate,
    #[error("failed to read input: {0}")]
    Input(#[from] io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "facerec", about = "Account and session CLI for the facerec photo service")]
struct Cli {
    #[arg(long, env = "FACEREC_API_URL", default_value = auth::config::DEFAULT_API_URL)]
    api_url: String,

    /// Where the bearer token is kept between runs.
    #[arg(long, env = "FACEREC_TOKEN_FILE")]
    token_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the server is up.
    Ping,
    /// Sign in and store the token.
    Login {
        #[arg(long)]
        username: String,
        /// Read from stdin when omitted.
        #[arg(long, env = "FACEREC_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Create an account. Does not sign in.
    Register(RegisterArgs),
    /// Forget the stored token.
    Logout,
    /// Show the signed-in user.
    Whoami,
    /// Change the password of the signed-in user.
    Passwd,
    Profile(ProfileCommand),
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    username: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    /// Read (twice) from stdin when omitted.
    #[arg(long, env = "FACEREC_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

#[derive(Args, Debug)]
struct ProfileCommand {
    #[command(subcommand)]
    command: ProfileSubcommand,
}

#[derive(Subcommand, Debug)]
enum ProfileSubcommand {
    /// Profile and subscription of the signed-in user.
    Show,
    Update {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let token_file = match cli.token_file {
        Some(path) => path,
        None => default_token_path().ok_or(CliError::NoTokenPath)?,
    };
    let transport = ReqwestTransport::new(ApiConfig::new(&cli.api_url))?;
    let gateway = AuthGateway::new(transport, FileTokenStore::new(token_file.clone()));
    tracing::debug!(api_url = %cli.api_url, token_file = %token_file.display(), "gateway ready");

    match cli.command {
        Command::Ping => run_ping(&gateway).await,
        Command::Login { username, password } => run_login(&gateway, username, password).await,
        Command::Register(args) => run_register(&gateway, args).await,
        Command::Logout => {
            gateway.logout();
            eprintln!("logged out");
            Ok(())
        }
        Command::Whoami => {
            let session = require_session(&gateway).await?;
            print_json(&serde_json::to_value(&session.user)?)
        }
        Command::Passwd => run_passwd(&gateway).await,
        Command::Profile(profile) => run_profile(&gateway, profile).await,
    }
}

async fn run_ping(gateway: &CliGateway) -> Result<(), CliError> {
    let body = gateway.transport().health().await?;
    tracing::info!(%body, "health check passed");
    println!("ok");
    Ok(())
}

async fn run_login(gateway: &CliGateway, username: String, password: Option<String>) -> Result<(), CliError> {
    let password = match password {
        Some(password) => password,
        None => prompt("Password: ")?,
    };
    let session = gateway
        .submit_login(&LoginForm { username, password })
        .await?;
    eprintln!("logged in as {}", session.username());
    Ok(())
}

async fn run_register(gateway: &CliGateway, args: RegisterArgs) -> Result<(), CliError> {
    let (password, confirm_password) = match args.password {
        Some(password) => (password.clone(), password),
        None => (prompt("Password: ")?, prompt("Confirm Password: ")?),
    };
    let form = RegisterForm {
        username: args.username,
        email: args.email,
        first_name: args.first_name,
        last_name: args.last_name,
        password,
        confirm_password,
    };
    gateway.submit_registration(&form).await?;
    eprintln!("Registration successful! You can now log in.");
    Ok(())
}

async fn run_passwd(gateway: &CliGateway) -> Result<(), CliError> {
    require_session(gateway).await?;
    let form = PasswordChangeForm {
        current_password: prompt("Current password: ")?,
        new_password: prompt("New password: ")?,
        confirm_password: prompt("Confirm Password: ")?,
    };
    gateway.submit_password_change(&form).await?;
    eprintln!("password changed");
    Ok(())
}

async fn run_profile(gateway: &CliGateway, profile: ProfileCommand) -> Result<(), CliError> {
    let session = require_session(gateway).await?;
    match profile.command {
        ProfileSubcommand::Show => {
            let subscription = gateway.subscription().await?;
            print_json(&serde_json::json!({
                "user": session.user,
                "subscription": subscription,
            }))
        }
        ProfileSubcommand::Update {
            first_name,
            last_name,
            email,
        } => {
            let form = ProfileForm {
                first_name: first_name.unwrap_or_default(),
                last_name: last_name.unwrap_or_default(),
                email: email.unwrap_or_default(),
            };
            let update = form.validate().map_err(AuthError::Validation)?;
            if update.is_empty() {
                return Err(CliError::EmptyUpdate);
            }
            let session = gateway.update_profile(&update).await?;
            print_json(&serde_json::to_value(&session.user)?)
        }
    }
}

/// Restore the stored session or fail with [`CliError::NotLoggedIn`].
async fn require_session(gateway: &CliGateway) -> Result<Session, CliError> {
    gateway.restore_session().await.ok_or(CliError::NotLoggedIn)
}

fn prompt(label: &str) -> Result<String, CliError> {
    let mut stderr = io::stderr();
    stderr.write_all(label.as_bytes())?;
    stderr.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
