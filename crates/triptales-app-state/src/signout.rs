use std::cell::RefCell;
use std::time::Duration;

use triptales_client_core::{ApiClient, HttpTransport, KeyValueStore};

use crate::modal::ModalState;
use crate::{LOGIN_PAGE, Redirect};

#[derive(Debug, Default)]
pub struct SignOutController {
    modal: ModalState,
    confirming: bool,
}

impl SignOutController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut ModalState {
        &mut self.modal
    }

    /// The confirm button is disabled while this is set.
    #[must_use]
    pub fn is_confirming(&self) -> bool {
        self.confirming
    }

    pub fn open(&mut self) {
        self.modal.open();
    }

    pub fn close(&mut self) -> Option<Duration> {
        self.modal.close()
    }

    /// Escape only closes the dialog while it is open.
    pub fn on_escape(&mut self) -> Option<Duration> {
        if self.modal.is_open() {
            self.modal.close()
        } else {
            None
        }
    }
}

/// Best-effort server logout, then local sign-out. Always ends on the login
/// page, whether or not the server call succeeded.
pub async fn run_sign_out<T, S>(
    cell: &RefCell<SignOutController>,
    api: &ApiClient<T, S>,
    repaint: &dyn Fn(),
) -> Redirect
where
    T: HttpTransport,
    S: KeyValueStore,
{
    cell.borrow_mut().confirming = true;
    repaint();
    if api.session().has_session()
        && let Err(error) = api.logout().await
    {
        tracing::debug!(message = %error.message, "server logout failed; clearing local session anyway");
    }
    api.session().clear();
    {
        let mut controller = cell.borrow_mut();
        controller.confirming = false;
        controller.modal.close();
    }
    repaint();
    Redirect::now(LOGIN_PAGE)
}
