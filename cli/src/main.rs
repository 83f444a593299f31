mod api;
mod render;
mod store;
mod timer;

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use clap::{Parser, Subcommand};
use session::{AppConfig, SessionController, SessionState, TokenStore};
use tracing_subscriber::EnvFilter;

use crate::api::ReqwestSessionApi;
use crate::store::{FileTokenStore, default_token_path};
use crate::timer::TokioTimer;

type CliController = SessionController<ReqwestSessionApi, FileTokenStore, TokioTimer, Rc<RefCell<SessionState>>>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("sign-in failed: {0}")]
    SignInFailed(String),
    #[error("session disconnected; run `secretlab login` again")]
    Disconnected,
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Store(#[from] session::StoreError),
}

#[derive(Parser, Debug)]
#[command(name = "secretlab", about = "SecretLab session client")]
struct Cli {
    #[arg(long, env = "API_HOST")]
    api_host: Option<String>,

    #[arg(long, env = "APP_NAME")]
    app_name: Option<String>,

    /// Where the bearer token is kept between runs.
    #[arg(long, env = "SECRETLAB_TOKEN_FILE")]
    token_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Exchange credentials for a token and show the secret message.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "SECRETLAB_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored token.
    Logout,
    /// Restore the stored session and show the secret message.
    Show,
    /// Report whether a token is stored, without contacting the API.
    Status,
}

impl Cli {
    fn config(&self) -> AppConfig {
        AppConfig::from_lookup(|key| match key {
            "APP_NAME" => self.app_name.clone(),
            "API_HOST" => self.api_host.clone(),
            _ => None,
        })
    }

    fn token_store(&self) -> FileTokenStore {
        FileTokenStore::new(self.token_file.clone().unwrap_or_else(default_token_path))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    let store = cli.token_store();
    tracing::debug!(api_host = %config.api_host, token_file = %store.path().display(), "config resolved");

    if matches!(cli.command, Command::Status) {
        return run_status(&config, &store);
    }

    let ctl = build_controller(&config, store)?;
    let result = match cli.command {
        Command::Login { username, password } => run_login(&ctl, &username, &password).await,
        Command::Logout => {
            ctl.sign_out().await;
            Ok(())
        }
        Command::Show => run_show(&ctl).await,
        Command::Status => Ok(()),
    };
    print_screen(&config, &ctl.snapshot());
    result
}

fn build_controller(config: &AppConfig, store: FileTokenStore) -> Result<CliController, CliError> {
    let api = ReqwestSessionApi::new(config)?;
    Ok(SessionController::new(api, store, TokioTimer, Rc::new(RefCell::new(SessionState::default()))))
}

async fn run_login(ctl: &CliController, username: &str, password: &str) -> Result<(), CliError> {
    if ctl.sign_in(username, password).await {
        return Ok(());
    }
    let form_error = ctl.snapshot().form.error;
    if form_error.is_empty() { Err(CliError::Disconnected) } else { Err(CliError::SignInFailed(form_error)) }
}

async fn run_show(ctl: &CliController) -> Result<(), CliError> {
    let had_token = ctl.store().get()?.is_some();
    ctl.restore_session().await;
    if had_token && !ctl.snapshot().authenticated() {
        return Err(CliError::Disconnected);
    }
    Ok(())
}

fn run_status(config: &AppConfig, store: &FileTokenStore) -> Result<(), CliError> {
    let status = if store.get()?.is_some() { "token stored" } else { "signed out" };
    println!("{}: {status} ({})", config.app_name, store.path().display());
    Ok(())
}

fn print_screen(config: &AppConfig, state: &SessionState) {
    for notice in &state.notices {
        eprintln!("{}", render::notice_line(notice, &config.app_name));
    }
    println!("{}", render::header_line(&config.app_name, state));
    println!("{}", render::message_block(state));
}

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;
