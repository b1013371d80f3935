use std::cell::RefCell;

use triptales_client_core::models::{LoginRequest, RegisterRequest, Session};
use triptales_client_core::{ApiClient, HttpTransport, KeyValueStore, RequestError};

use crate::{HOME_PAGE, LOGIN_REDIRECT_DELAY, Redirect, storage_failure};

pub const LOGGING_IN_MESSAGE: &str = "Logging in...";
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful. Redirecting to home page...";
pub const REGISTERING_MESSAGE: &str = "Creating account...";
pub const REGISTER_SUCCESS_MESSAGE: &str = "Registration successful. Please login.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

/// Status line and submit-button state for one form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormStatus {
    pub message: String,
    pub busy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEffect {
    Redirect(Redirect),
    ResetRegisterForm,
    PrefillLoginEmail(String),
}

#[derive(Debug, Default)]
pub struct AuthController {
    tab: AuthTab,
    login: FormStatus,
    register: FormStatus,
}

impl AuthController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn tab(&self) -> AuthTab {
        self.tab
    }

    #[must_use]
    pub fn login_status(&self) -> &FormStatus {
        &self.login
    }

    #[must_use]
    pub fn register_status(&self) -> &FormStatus {
        &self.register
    }

    /// Switching tabs always clears both status lines.
    pub fn select_tab(&mut self, tab: AuthTab) {
        self.tab = tab;
        self.login.message.clear();
        self.register.message.clear();
    }

    pub fn begin_login(&mut self) {
        self.login.message = LOGGING_IN_MESSAGE.to_string();
        self.login.busy = true;
    }

    pub fn finish_login(&mut self, result: Result<(), RequestError>) -> Vec<AuthEffect> {
        self.login.busy = false;
        match result {
            Ok(()) => {
                self.login.message = LOGIN_SUCCESS_MESSAGE.to_string();
                vec![AuthEffect::Redirect(Redirect::after(
                    HOME_PAGE,
                    LOGIN_REDIRECT_DELAY,
                ))]
            }
            Err(error) => {
                self.login.message = error.message;
                Vec::new()
            }
        }
    }

    pub fn begin_register(&mut self) {
        self.register.message = REGISTERING_MESSAGE.to_string();
        self.register.busy = true;
    }

    /// On success the page lands on the login tab with the email pre-filled
    /// and the confirmation shown under the login form.
    pub fn finish_register(
        &mut self,
        result: Result<(), RequestError>,
        email: &str,
    ) -> Vec<AuthEffect> {
        self.register.busy = false;
        match result {
            Ok(()) => {
                self.select_tab(AuthTab::Login);
                self.login.message = REGISTER_SUCCESS_MESSAGE.to_string();
                vec![
                    AuthEffect::ResetRegisterForm,
                    AuthEffect::PrefillLoginEmail(email.to_string()),
                ]
            }
            Err(error) => {
                self.register.message = error.message;
                Vec::new()
            }
        }
    }
}

pub async fn run_login<T, S>(
    cell: &RefCell<AuthController>,
    api: &ApiClient<T, S>,
    email: &str,
    password: &str,
    repaint: &dyn Fn(),
) -> Vec<AuthEffect>
where
    T: HttpTransport,
    S: KeyValueStore,
{
    cell.borrow_mut().begin_login();
    repaint();
    let request = LoginRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    };
    let result = match api.login(&request).await {
        Ok(response) => api
            .session()
            .persist(&Session {
                token: response.token,
                user: Some(response.user),
            })
            .map_err(storage_failure),
        Err(error) => Err(error),
    };
    let effects = cell.borrow_mut().finish_login(result);
    repaint();
    effects
}

pub async fn run_register<T, S>(
    cell: &RefCell<AuthController>,
    api: &ApiClient<T, S>,
    name: &str,
    email: &str,
    password: &str,
    repaint: &dyn Fn(),
) -> Vec<AuthEffect>
where
    T: HttpTransport,
    S: KeyValueStore,
{
    cell.borrow_mut().begin_register();
    repaint();
    let request = RegisterRequest {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        password: password.to_string(),
    };
    let result = api.register(&request).await;
    let effects = cell.borrow_mut().finish_register(result, &request.email);
    repaint();
    effects
}
