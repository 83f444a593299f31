//! Session state and the cell it lives in.
//!
//! DESIGN
//! ======
//! Authentication, loading and form data are separate fields rather than one
//! enum: the page combines them in `view`, and each async step only touches
//! the fields it owns. The display theme is deliberately absent.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::config::NOTICE_DURATION;

/// Session lifecycle phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Anonymous,
    /// A token exists and the first profile fetch is in flight.
    Authenticating,
    Authenticated,
    /// An authenticated call failed; the token is being destroyed.
    Expiring,
}

/// One of the independently tracked loading indicators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingFlag {
    Profile,
    Message,
    SignUp,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadingFlags {
    pub profile: bool,
    pub message: bool,
    pub sign_up: bool,
}

impl LoadingFlags {
    pub fn set(&mut self, flag: LoadingFlag, value: bool) {
        match flag {
            LoadingFlag::Profile => self.profile = value,
            LoadingFlag::Message => self.message = value,
            LoadingFlag::SignUp => self.sign_up = value,
        }
    }

    #[must_use]
    pub fn get(&self, flag: LoadingFlag) -> bool {
        match flag {
            LoadingFlag::Profile => self.profile,
            LoadingFlag::Message => self.message,
            LoadingFlag::SignUp => self.sign_up,
        }
    }

    #[must_use]
    pub fn any(&self) -> bool {
        self.profile || self.message || self.sign_up
    }
}

/// How many in-flight operations hold each loading flag.
///
/// Overlapping operations can raise the same flag; it only drops once the
/// last holder lets go.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadingHolds {
    profile: u32,
    message: u32,
    sign_up: u32,
}

impl LoadingHolds {
    fn count_mut(&mut self, flag: LoadingFlag) -> &mut u32 {
        match flag {
            LoadingFlag::Profile => &mut self.profile,
            LoadingFlag::Message => &mut self.message,
            LoadingFlag::SignUp => &mut self.sign_up,
        }
    }

    #[must_use]
    pub fn count(&self, flag: LoadingFlag) -> u32 {
        match flag {
            LoadingFlag::Profile => self.profile,
            LoadingFlag::Message => self.message,
            LoadingFlag::SignUp => self.sign_up,
        }
    }
}

/// Sign-in modal contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub open: bool,
    pub username: String,
    pub password: String,
    /// Inline error shown under the form; empty when there is none.
    pub error: String,
}

impl FormState {
    /// Both credentials are filled in.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }

    pub fn clear_credentials(&mut self) {
        self.username.clear();
        self.password.clear();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

/// What a transient notice announces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    LoggedIn { name: String },
    Disconnected,
    Farewell,
}

impl NoticeKind {
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::LoggedIn { .. } => "Logged in",
            Self::Disconnected => "Disconnected",
            Self::Farewell => "See you",
        }
    }

    #[must_use]
    pub fn description(&self, app_name: &str) -> String {
        match self {
            Self::LoggedIn { name } => format!("Hello {name}! welcome to the {app_name}! 😎"),
            Self::Disconnected => "You have been disconnected due to timeout.".to_owned(),
            Self::Farewell => "Quitting already? See you again soon! 👋".to_owned(),
        }
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::Disconnected => Severity::Warning,
            Self::LoggedIn { .. } | Self::Farewell => Severity::Info,
        }
    }
}

/// A queued toast. The presentation layer dismisses it after `duration`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
}

impl Notice {
    #[must_use]
    pub fn duration(&self) -> Duration {
        NOTICE_DURATION
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub phase: Phase,
    pub profile_name: String,
    pub secret_message: String,
    pub loading: LoadingFlags,
    pub loading_holds: LoadingHolds,
    pub form: FormState,
    pub notices: Vec<Notice>,
    /// Bumped by every operation that takes ownership of the session; async
    /// steps compare against it to drop stale completions.
    pub epoch: u64,
    pub restore_attempted: bool,
    pub next_notice_id: u64,
}

impl SessionState {
    #[must_use]
    pub fn authenticated(&self) -> bool {
        self.phase == Phase::Authenticated
    }

    /// Queue a notice and return its id.
    pub fn push_notice(&mut self, kind: NoticeKind) -> u64 {
        self.next_notice_id += 1;
        let id = self.next_notice_id;
        self.notices.push(Notice { id, kind });
        id
    }

    pub fn dismiss_notice(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }

    /// Take a hold on `flag` and raise it.
    pub fn hold_loading(&mut self, flag: LoadingFlag) {
        *self.loading_holds.count_mut(flag) += 1;
        self.loading.set(flag, true);
    }

    /// Give back one hold on `flag`; it lowers when no holds remain.
    pub fn release_loading(&mut self, flag: LoadingFlag) {
        let count = self.loading_holds.count_mut(flag);
        *count = count.saturating_sub(1);
        if *count == 0 {
            self.loading.set(flag, false);
        }
    }

    /// Drop the session fields, leaving form, notices and counters alone.
    pub fn reset_session(&mut self) {
        self.phase = Phase::Anonymous;
        self.profile_name.clear();
        self.secret_message.clear();
    }
}

/// Where a controller keeps its `SessionState`.
///
/// Reads and writes are synchronous and never held across a suspension point.
pub trait StateCell {
    fn read<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R;

    fn write(&self, f: impl FnOnce(&mut SessionState));

    fn snapshot(&self) -> SessionState {
        self.read(Clone::clone)
    }
}

impl StateCell for Rc<RefCell<SessionState>> {
    fn read<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        f(&self.borrow())
    }

    fn write(&self, f: impl FnOnce(&mut SessionState)) {
        f(&mut self.borrow_mut());
    }
}
