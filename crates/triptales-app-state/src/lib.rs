//! Page controllers for the TripTales front end.
//!
//! Each controller is a plain state machine. Async drivers (`run_*`) take the
//! controller behind a `RefCell` plus an [`ApiClient`] and never hold a borrow
//! across an `.await`, so a page can keep firing events while a request is in
//! flight.
//!
//! [`ApiClient`]: triptales_client_core::ApiClient

use std::time::Duration;

use triptales_client_core::{RequestError, StorageError};

pub mod admin;
pub mod auth;
pub mod debounce;
pub mod explore;
pub mod modal;
pub mod signout;

pub use admin::{AdminController, AdminEffect};
pub use auth::{AuthController, AuthEffect, AuthTab, FormStatus};
pub use debounce::{DebounceToken, Debouncer};
pub use explore::{ExploreController, ExploreFilters, LoadTicket};
pub use modal::{ModalPhase, ModalState};
pub use signout::SignOutController;

pub const SEARCH_DEBOUNCE_DELAY: Duration = Duration::from_millis(300);
pub const LOGIN_REDIRECT_DELAY: Duration = Duration::from_millis(500);
pub const ADMIN_FAILURE_REDIRECT_DELAY: Duration = Duration::from_millis(700);
pub const MODAL_CLOSE_DELAY: Duration = Duration::from_millis(180);

pub const HOME_PAGE: &str = "index.html";
pub const LOGIN_PAGE: &str = "login.html";

/// Navigation the page should perform, optionally after a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub target: &'static str,
    pub delay: Duration,
}

impl Redirect {
    #[must_use]
    pub fn now(target: &'static str) -> Self {
        Self {
            target,
            delay: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn after(target: &'static str, delay: Duration) -> Self {
        Self { target, delay }
    }
}

pub(crate) fn storage_failure(error: StorageError) -> RequestError {
    tracing::warn!(%error, "failed to persist session state");
    RequestError::new(error.to_string())
}
