use std::cell::RefCell;

use triptales_client_core::models::{
    Itinerary, ItineraryInput, ItineraryQuery, ItineraryStatus, UserProfile,
};
use triptales_client_core::{ApiClient, HttpTransport, KeyValueStore, RequestError};

use crate::{ADMIN_FAILURE_REDIRECT_DELAY, LOGIN_PAGE, Redirect, storage_failure};

pub const SUBMITTING_MESSAGE: &str = "Submitting itinerary...";
pub const SUBMITTED_MESSAGE: &str = "Submitted. Waiting for admin review.";
pub const UPDATED_MESSAGE: &str = "Updated.";
pub const DELETED_MESSAGE: &str = "Deleted.";
pub const NOT_FOUND_MESSAGE: &str = "Itinerary not found";
pub const DELETE_CONFIRM_PROMPT: &str = "Delete this itinerary?";
pub const EDIT_TITLE_PROMPT: &str = "New title:";

#[must_use]
pub fn signed_in_message(user: &UserProfile) -> String {
    format!("Signed in as {} ({})", user.name, user.role)
}

#[must_use]
pub fn marked_message(status: ItineraryStatus) -> String {
    format!("Marked as {status}.")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminEffect {
    ResetItineraryForm,
}

/// Dashboard state: the signed-in user, their own submissions and, for
/// admins, the pending review queue.
#[derive(Debug, Default)]
pub struct AdminController {
    user: Option<UserProfile>,
    session_info: String,
    message: String,
    own: Vec<Itinerary>,
    review: Vec<Itinerary>,
    own_loaded: bool,
    review_loaded: bool,
    review_visible: bool,
}

impl AdminController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn session_info(&self) -> &str {
        &self.session_info
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn own_itineraries(&self) -> &[Itinerary] {
        &self.own
    }

    #[must_use]
    pub fn review_queue(&self) -> &[Itinerary] {
        &self.review
    }

    /// False until the first own-list response arrives; the table keeps its
    /// initial markup until then.
    #[must_use]
    pub fn has_loaded_own(&self) -> bool {
        self.own_loaded
    }

    #[must_use]
    pub fn has_loaded_review(&self) -> bool {
        self.review_loaded
    }

    #[must_use]
    pub fn is_review_visible(&self) -> bool {
        self.review_visible
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    fn signed_in(&mut self, user: UserProfile) {
        self.session_info = signed_in_message(&user);
        self.user = Some(user);
    }
}

async fn load_own<T, S>(
    cell: &RefCell<AdminController>,
    api: &ApiClient<T, S>,
    repaint: &dyn Fn(),
) -> Result<(), RequestError>
where
    T: HttpTransport,
    S: KeyValueStore,
{
    let items = api.list_itineraries(&ItineraryQuery::mine()).await?;
    {
        let mut admin = cell.borrow_mut();
        admin.own = items;
        admin.own_loaded = true;
    }
    repaint();
    Ok(())
}

async fn load_review<T, S>(
    cell: &RefCell<AdminController>,
    api: &ApiClient<T, S>,
    repaint: &dyn Fn(),
) -> Result<(), RequestError>
where
    T: HttpTransport,
    S: KeyValueStore,
{
    let items = api
        .list_itineraries(&ItineraryQuery::with_status(ItineraryStatus::Pending))
        .await?;
    {
        let mut admin = cell.borrow_mut();
        admin.review = items;
        admin.review_loaded = true;
    }
    repaint();
    Ok(())
}

fn announce(cell: &RefCell<AdminController>, message: impl Into<String>, repaint: &dyn Fn()) {
    cell.borrow_mut().set_message(message);
    repaint();
}

async fn boot<T, S>(
    cell: &RefCell<AdminController>,
    api: &ApiClient<T, S>,
    repaint: &dyn Fn(),
) -> Result<(), RequestError>
where
    T: HttpTransport,
    S: KeyValueStore,
{
    let me = api.me().await?;
    api.session().set_user(&me).map_err(storage_failure)?;
    let is_admin = me.is_admin();
    cell.borrow_mut().signed_in(me);
    repaint();
    load_own(cell, api, repaint).await?;
    if is_admin {
        cell.borrow_mut().review_visible = true;
        load_review(cell, api, repaint).await?;
    }
    Ok(())
}

/// Verifies the stored session and fills the dashboard. Returns where to go
/// instead when there is no usable session.
pub async fn run_boot<T, S>(
    cell: &RefCell<AdminController>,
    api: &ApiClient<T, S>,
    repaint: &dyn Fn(),
) -> Option<Redirect>
where
    T: HttpTransport,
    S: KeyValueStore,
{
    if !api.session().has_session() {
        return Some(Redirect::now(LOGIN_PAGE));
    }
    match boot(cell, api, repaint).await {
        Ok(()) => None,
        Err(error) => {
            if error.is_unauthorized() {
                tracing::info!("dashboard session rejected; signing out");
            } else {
                tracing::warn!(status = ?error.status, message = %error.message, "dashboard boot failed; signing out");
            }
            api.session().clear();
            announce(cell, error.message, repaint);
            Some(Redirect::after(LOGIN_PAGE, ADMIN_FAILURE_REDIRECT_DELAY))
        }
    }
}

async fn create<T, S>(
    cell: &RefCell<AdminController>,
    api: &ApiClient<T, S>,
    input: &ItineraryInput,
    effects: &mut Vec<AdminEffect>,
    repaint: &dyn Fn(),
) -> Result<(), RequestError>
where
    T: HttpTransport,
    S: KeyValueStore,
{
    api.create_itinerary(input).await?;
    effects.push(AdminEffect::ResetItineraryForm);
    announce(cell, SUBMITTED_MESSAGE, repaint);
    load_own(cell, api, repaint).await?;
    if api.session().user().is_some_and(|user| user.is_admin()) {
        load_review(cell, api, repaint).await?;
    }
    Ok(())
}

pub async fn run_create<T, S>(
    cell: &RefCell<AdminController>,
    api: &ApiClient<T, S>,
    input: ItineraryInput,
    repaint: &dyn Fn(),
) -> Vec<AdminEffect>
where
    T: HttpTransport,
    S: KeyValueStore,
{
    announce(cell, SUBMITTING_MESSAGE, repaint);
    let mut effects = Vec::new();
    if let Err(error) = create(cell, api, &input.trimmed(), &mut effects, repaint).await {
        announce(cell, error.message, repaint);
    }
    effects
}

async fn edit<T, S>(
    cell: &RefCell<AdminController>,
    api: &ApiClient<T, S>,
    id: i64,
    title: &str,
    repaint: &dyn Fn(),
) -> Result<(), RequestError>
where
    T: HttpTransport,
    S: KeyValueStore,
{
    let mine = api.list_itineraries(&ItineraryQuery::mine()).await?;
    let item = mine
        .iter()
        .find(|item| item.id == id)
        .ok_or_else(|| RequestError::new(NOT_FOUND_MESSAGE))?;
    api.update_itinerary(&item.with_title(title)).await?;
    announce(cell, UPDATED_MESSAGE, repaint);
    load_own(cell, api, repaint).await
}

/// Renames an itinerary. A dismissed or empty prompt does nothing.
pub async fn run_edit<T, S>(
    cell: &RefCell<AdminController>,
    api: &ApiClient<T, S>,
    id: i64,
    title: Option<&str>,
    repaint: &dyn Fn(),
) where
    T: HttpTransport,
    S: KeyValueStore,
{
    let Some(title) = title.filter(|title| !title.is_empty()) else {
        return;
    };
    if let Err(error) = edit(cell, api, id, title, repaint).await {
        announce(cell, error.message, repaint);
    }
}

async fn delete<T, S>(
    cell: &RefCell<AdminController>,
    api: &ApiClient<T, S>,
    id: i64,
    repaint: &dyn Fn(),
) -> Result<(), RequestError>
where
    T: HttpTransport,
    S: KeyValueStore,
{
    api.delete_itinerary(id).await?;
    announce(cell, DELETED_MESSAGE, repaint);
    load_own(cell, api, repaint).await
}

/// Deletes an itinerary once the user has confirmed.
pub async fn run_delete<T, S>(
    cell: &RefCell<AdminController>,
    api: &ApiClient<T, S>,
    id: i64,
    confirmed: bool,
    repaint: &dyn Fn(),
) where
    T: HttpTransport,
    S: KeyValueStore,
{
    if !confirmed {
        return;
    }
    if let Err(error) = delete(cell, api, id, repaint).await {
        announce(cell, error.message, repaint);
    }
}

async fn review<T, S>(
    cell: &RefCell<AdminController>,
    api: &ApiClient<T, S>,
    id: i64,
    status: ItineraryStatus,
    repaint: &dyn Fn(),
) -> Result<(), RequestError>
where
    T: HttpTransport,
    S: KeyValueStore,
{
    api.set_itinerary_status(id, status).await?;
    announce(cell, marked_message(status), repaint);
    load_review(cell, api, repaint).await?;
    load_own(cell, api, repaint).await
}

/// Approves or rejects a pending submission, then refreshes both tables.
pub async fn run_review<T, S>(
    cell: &RefCell<AdminController>,
    api: &ApiClient<T, S>,
    id: i64,
    status: ItineraryStatus,
    repaint: &dyn Fn(),
) where
    T: HttpTransport,
    S: KeyValueStore,
{
    if let Err(error) = review(cell, api, id, status, repaint).await {
        announce(cell, error.message, repaint);
    }
}
