//! Session Controller: sign-in, silent restore, refresh, sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Front ends construct one controller per page (or per CLI invocation) and
//! call its async operations from their event handlers. All state changes go
//! through the injected `StateCell`, so the browser can mirror them into
//! reactive signals while the CLI just reads the final snapshot.
//!
//! FAILURE SEMANTICS
//! =================
//! A failed login leaves the session anonymous and sets the inline form error.
//! A failed authenticated call, whatever the cause, is a disconnect: the token
//! is destroyed, the session fields are cleared and a warning notice is queued.
//!
//! OVERLAPPING OPERATIONS
//! ======================
//! `sign_in`, `refresh_screen` and `sign_out` each start a new epoch. Any
//! completion that arrives after its epoch was superseded is dropped without
//! touching the session fields. The one exception is a token the backend
//! rejected: if it is still the stored token it is deleted anyway. Loading
//! flags are held, not owned: every operation takes a hold through
//! `LoadingGuard`, and a flag lowers once its last hold is released.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::api::SessionApi;
use crate::config::SIGN_OUT_SETTLE;
use crate::error::ApiError;
use crate::state::{LoadingFlag, NoticeKind, Phase, SessionState, StateCell};
use crate::store::TokenStore;
use crate::timer::Timer;
use crate::types::LoginRequest;

/// Inline form error after any failed login.
pub const SIGN_IN_FAILED: &str = "Username or password is incorrect 🤔";

/// Inline form error when a credential field is empty.
pub const SIGN_IN_INCOMPLETE: &str = "Enter both username and password.";

#[derive(Debug, thiserror::Error)]
enum RefreshError {
    #[error("no stored token")]
    MissingToken,
    #[error("request with the stored token failed: {source}")]
    Rejected {
        token: String,
        #[source]
        source: ApiError,
    },
}

/// Takes loading-flag holds on creation and releases whatever is still held on drop.
///
/// Dropping covers every exit path of the owning operation, including an
/// early return, a `?`, and the future itself being dropped mid-flight.
struct LoadingGuard<'a, C: StateCell> {
    cell: &'a C,
    held: Vec<LoadingFlag>,
}

impl<'a, C: StateCell> LoadingGuard<'a, C> {
    fn raise(cell: &'a C, flags: &[LoadingFlag]) -> Self {
        cell.write(|s| {
            for flag in flags {
                s.hold_loading(*flag);
            }
        });
        Self { cell, held: flags.to_vec() }
    }

    /// Release one flag early; the rest stay held until drop.
    fn release(&mut self, flag: LoadingFlag) {
        if let Some(pos) = self.held.iter().position(|f| *f == flag) {
            self.held.swap_remove(pos);
            self.cell.write(|s| s.release_loading(flag));
        }
    }
}

impl<C: StateCell> Drop for LoadingGuard<'_, C> {
    fn drop(&mut self) {
        if self.held.is_empty() {
            return;
        }
        let held = std::mem::take(&mut self.held);
        self.cell.write(|s| {
            for flag in held {
                s.release_loading(flag);
            }
        });
    }
}

pub struct SessionController<A, S, T, C> {
    api: A,
    store: S,
    timer: T,
    cell: C,
}

impl<A, S, T, C> SessionController<A, S, T, C>
where
    A: SessionApi,
    S: TokenStore,
    T: Timer,
    C: StateCell,
{
    pub fn new(api: A, store: S, timer: T, cell: C) -> Self {
        Self { api, store, timer, cell }
    }

    pub fn cell(&self) -> &C {
        &self.cell
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.cell.snapshot()
    }

    /// Start-up restore. Runs at most once per state; later calls are no-ops.
    ///
    /// With a stored token this is `refresh_screen`, otherwise nothing happens.
    pub async fn restore_session(&self) {
        if self.cell.read(|s| s.restore_attempted) {
            log::debug!("session restore already attempted");
            return;
        }
        self.cell.write(|s| s.restore_attempted = true);

        if self.stored_token().is_none() {
            log::debug!("no stored token, staying anonymous");
            return;
        }
        log::info!("stored token found, restoring session");
        self.refresh_screen().await;
    }

    /// Exchange credentials for a token, then load the screen.
    ///
    /// Returns `true` when the session ends up authenticated.
    pub async fn sign_in(&self, username: &str, password: &str) -> bool {
        if username.is_empty() || password.is_empty() {
            self.cell.write(|s| s.form.error = SIGN_IN_INCOMPLETE.to_owned());
            return false;
        }

        let epoch = self.begin();
        let _loading = LoadingGuard::raise(&self.cell, &[LoadingFlag::SignUp]);
        self.cell.write(|s| s.form.error.clear());

        let request = LoginRequest { username: username.to_owned(), password: password.to_owned() };
        let response = match self.api.login(&request).await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("sign-in failed for {username}: {e}");
                if self.is_current(epoch) {
                    self.cell.write(|s| s.form.error = SIGN_IN_FAILED.to_owned());
                    self.abandon_sign_in(epoch);
                }
                return false;
            }
        };

        if !self.is_current(epoch) {
            log::debug!("discarding superseded login response");
            return false;
        }
        if let Err(e) = self.store.set(&response.access_token) {
            log::warn!("could not persist session token: {e}");
            self.cell.write(|s| s.form.error = SIGN_IN_FAILED.to_owned());
            self.abandon_sign_in(epoch);
            return false;
        }
        self.cell.write(|s| s.phase = Phase::Authenticating);
        log::info!("signed in as {username}");

        let authenticated = self.refresh_screen().await;
        self.cell.write(|s| s.form.clear_credentials());
        authenticated
    }

    /// Fetch profile then message with the stored token.
    ///
    /// Returns `true` when both calls succeeded for the current epoch. Any
    /// failure disconnects the session.
    pub async fn refresh_screen(&self) -> bool {
        let epoch = self.begin();
        let mut loading = LoadingGuard::raise(&self.cell, &[LoadingFlag::Profile, LoadingFlag::Message]);
        self.cell.write(|s| {
            if s.phase == Phase::Anonymous {
                s.phase = Phase::Authenticating;
            }
        });

        match self.fetch_screen(epoch, &mut loading).await {
            Ok(applied) => applied,
            Err(e) => {
                if self.is_current(epoch) {
                    self.disconnect(&e);
                } else {
                    log::debug!("ignoring failure of superseded refresh: {e}");
                    if let RefreshError::Rejected { token, .. } = &e {
                        self.forget_rejected(token);
                    }
                }
                false
            }
        }
    }

    /// Destroy the token and return to anonymous.
    ///
    /// Loading flags stay raised for `SIGN_OUT_SETTLE` so the panels fade
    /// instead of flashing.
    pub async fn sign_out(&self) {
        self.begin();
        let _loading = LoadingGuard::raise(&self.cell, &[LoadingFlag::Message, LoadingFlag::Profile]);

        self.delete_token();
        self.cell.write(|s| {
            s.reset_session();
            s.push_notice(NoticeKind::Farewell);
        });
        log::info!("signed out");

        self.timer.sleep(SIGN_OUT_SETTLE).await;
    }

    pub fn open_sign_in(&self) {
        self.cell.write(|s| s.form.open = true);
    }

    pub fn close_sign_in(&self) {
        self.cell.write(|s| s.form.open = false);
    }

    pub fn set_username(&self, value: &str) {
        self.cell.write(|s| s.form.username = value.to_owned());
    }

    pub fn set_password(&self, value: &str) {
        self.cell.write(|s| s.form.password = value.to_owned());
    }

    pub fn dismiss_notice(&self, id: u64) {
        self.cell.write(|s| s.dismiss_notice(id));
    }

    async fn fetch_screen(&self, epoch: u64, loading: &mut LoadingGuard<'_, C>) -> Result<bool, RefreshError> {
        let token = self.stored_token().ok_or(RefreshError::MissingToken)?;
        let profile = self
            .api
            .profile(&token)
            .await
            .map_err(|source| RefreshError::Rejected { token: token.clone(), source })?;
        if !self.is_current(epoch) {
            return Ok(false);
        }

        loading.release(LoadingFlag::Profile);
        self.cell.write(|s| {
            s.phase = Phase::Authenticated;
            s.profile_name.clone_from(&profile.name);
            s.form.open = false;
            s.push_notice(NoticeKind::LoggedIn { name: profile.name });
        });

        let token = self.stored_token().ok_or(RefreshError::MissingToken)?;
        let message = self
            .api
            .message(&token)
            .await
            .map_err(|source| RefreshError::Rejected { token: token.clone(), source })?;
        if !self.is_current(epoch) {
            return Ok(false);
        }
        self.cell.write(|s| s.secret_message = message.message);
        Ok(true)
    }

    fn disconnect(&self, reason: &RefreshError) {
        log::warn!("session disconnected: {reason}");
        self.cell.write(|s| {
            if s.phase == Phase::Authenticated {
                s.phase = Phase::Expiring;
            }
        });
        self.delete_token();
        self.cell.write(|s| {
            s.reset_session();
            s.push_notice(NoticeKind::Disconnected);
        });
    }

    /// A login that fails while it still owns the session leaves it anonymous,
    /// even if an earlier refresh had moved it to `Authenticating`.
    fn abandon_sign_in(&self, epoch: u64) {
        self.cell.write(|s| {
            if s.epoch == epoch && s.phase == Phase::Authenticating {
                s.phase = Phase::Anonymous;
            }
        });
    }

    /// Delete `token` if the store still holds it. A newer token is left alone.
    fn forget_rejected(&self, token: &str) {
        if self.stored_token().as_deref() == Some(token) {
            log::info!("deleting token rejected by a superseded refresh");
            self.delete_token();
        }
    }

    fn stored_token(&self) -> Option<String> {
        match self.store.get() {
            Ok(token) => token,
            Err(e) => {
                log::warn!("could not read session token: {e}");
                None
            }
        }
    }

    fn delete_token(&self) {
        if let Err(e) = self.store.delete() {
            log::warn!("could not delete session token: {e}");
        }
    }

    fn begin(&self) -> u64 {
        self.cell.write(|s| s.epoch += 1);
        self.cell.read(|s| s.epoch)
    }

    fn is_current(&self, epoch: u64) -> bool {
        self.cell.read(|s| s.epoch == epoch)
    }
}
