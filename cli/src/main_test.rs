use std::sync::atomic::{AtomicU32, Ordering};

use session::Phase;

use super::*;
use crate::api::api_test::spawn_backend;

static NEXT_FILE: AtomicU32 = AtomicU32::new(0);

fn scratch_store() -> FileTokenStore {
    let n = NEXT_FILE.fetch_add(1, Ordering::Relaxed);
    FileTokenStore::new(std::env::temp_dir().join(format!("secretlab-flow-{}-{n}", std::process::id())).join("token"))
}

fn config_for(host: String) -> AppConfig {
    AppConfig::from_lookup(move |key| (key == "API_HOST").then(|| host.clone()))
}

#[tokio::test]
async fn login_persists_token_and_later_run_restores_it() {
    let config = config_for(spawn_backend().await);
    let store = scratch_store();

    let first = build_controller(&config, store.clone()).unwrap();
    run_login(&first, "alice", "pw").await.unwrap();
    assert_eq!(store.get().unwrap().as_deref(), Some("T"));

    let second = build_controller(&config, store.clone()).unwrap();
    run_show(&second).await.unwrap();
    let state = second.snapshot();
    assert!(state.authenticated());
    assert_eq!(state.profile_name, "Alice");
    assert_eq!(state.secret_message, "M");

    let third = build_controller(&config, store.clone()).unwrap();
    third.sign_out().await;
    assert_eq!(store.get().unwrap(), None);
    assert_eq!(third.snapshot().phase, Phase::Anonymous);
}

#[tokio::test]
async fn bad_password_reports_form_error() {
    let config = config_for(spawn_backend().await);
    let store = scratch_store();
    let ctl = build_controller(&config, store.clone()).unwrap();

    let err = run_login(&ctl, "alice", "wrong").await.unwrap_err();
    assert!(matches!(err, CliError::SignInFailed(_)));
    assert_eq!(store.get().unwrap(), None);
}

#[tokio::test]
async fn show_with_stale_token_disconnects_and_clears_file() {
    let config = config_for(spawn_backend().await);
    let store = scratch_store();
    store.set("EXPIRED").unwrap();
    let ctl = build_controller(&config, store.clone()).unwrap();

    let err = run_show(&ctl).await.unwrap_err();
    assert!(matches!(err, CliError::Disconnected));
    assert_eq!(store.get().unwrap(), None);
}

#[tokio::test]
async fn show_without_token_is_anonymous_and_ok() {
    let config = config_for(spawn_backend().await);
    let ctl = build_controller(&config, scratch_store()).unwrap();

    run_show(&ctl).await.unwrap();
    assert!(!ctl.snapshot().authenticated());
}

#[test]
fn cli_flags_override_defaults() {
    let cli = Cli::parse_from(["secretlab", "--api-host", "http://127.0.0.1:9/v1", "--app-name", "Lab", "status"]);
    let config = cli.config();
    assert_eq!(config.api_host, "http://127.0.0.1:9/v1/");
    assert_eq!(config.app_name, "Lab");
}

#[test]
fn login_parses_credentials() {
    let cli = Cli::parse_from(["secretlab", "login", "--username", "alice", "--password", "pw"]);
    assert!(matches!(cli.command, Command::Login { ref username, ref password } if username == "alice" && password == "pw"));
}
