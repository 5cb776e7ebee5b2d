//! State for the user-management view: the current page of users, the page
//! window, loading/error flags and the single edit modal.
//!
//! Edits and deletes are applied to the local page only after the API
//! acknowledges them; the page is never re-fetched afterwards. Loads are tagged
//! with a generation number and only the newest load may write its result, so a
//! slow response for an old page cannot overwrite a newer one.

use crate::{
    api::{ApiClient, AppError},
    features::users::{
        client,
        types::{PageWindow, User, UserPage, UserUpdate},
    },
    notify::{Notification, Notifier},
    routes::Route,
    storage::{Session, StorageError},
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

pub const MSG_LOAD_FAILED: &str = "Failed to fetch users";
pub const MSG_UPDATE_SUCCESS: &str = "User updated successfully";
pub const MSG_UPDATE_FAILED: &str = "Error updating user";
pub const MSG_DELETE_SUCCESS: &str = "User deleted successfully";
pub const MSG_DELETE_FAILED: &str = "Error deleting user";

/// Issued by [`UserListController::begin_load`]; hand it back with the result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    page: u32,
}

pub struct UserListController {
    api: ApiClient,
    session: Session,
    notifier: Arc<dyn Notifier>,
    window: PageWindow,
    users: Vec<User>,
    loading: bool,
    error: Option<String>,
    generation: u64,
    selected: Option<u64>,
    draft: UserUpdate,
    modal_open: bool,
}

impl UserListController {
    /// Starts in the loading state on page 1; call [`Self::mount`] to fetch it.
    pub fn new(api: ApiClient, session: Session, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            session,
            notifier,
            window: PageWindow::default(),
            users: Vec::new(),
            loading: true,
            error: None,
            generation: 0,
            selected: None,
            draft: UserUpdate::default(),
            modal_open: false,
        }
    }

    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    #[must_use]
    pub const fn window(&self) -> PageWindow {
        self.window
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    #[must_use]
    pub const fn selected(&self) -> Option<u64> {
        self.selected
    }

    #[must_use]
    pub fn user(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Loads the current page.
    pub async fn mount(&mut self) {
        self.load(self.window.page).await;
    }

    /// Moves to `page` and loads it. Selecting the current page does nothing.
    pub async fn set_page(&mut self, page: u32) {
        let page = page.max(1);
        if page == self.window.page {
            return;
        }
        self.load(page).await;
    }

    /// Fetches `page` and applies the result. Failures end up in [`Self::error`].
    #[instrument(skip(self))]
    pub async fn load(&mut self, page: u32) {
        let ticket = self.begin_load(page);
        let result = client::list_users(&self.api, ticket.page).await;
        self.apply_load(ticket, result);
    }

    /// Marks a load of `page` as in flight and supersedes any earlier one.
    pub fn begin_load(&mut self, page: u32) -> LoadTicket {
        self.generation += 1;
        self.window.page = page.max(1);
        self.loading = true;

        debug!(page = self.window.page, generation = self.generation, "loading users");

        LoadTicket {
            generation: self.generation,
            page: self.window.page,
        }
    }

    /// Applies a load result. Returns `false` and drops the result when a newer
    /// load has been started since `ticket` was issued.
    pub fn apply_load(&mut self, ticket: LoadTicket, result: Result<UserPage, AppError>) -> bool {
        if ticket.generation != self.generation {
            warn!(
                page = ticket.page,
                generation = ticket.generation,
                latest = self.generation,
                "discarding stale user page"
            );
            return false;
        }

        match result {
            Ok(page) => {
                info!(
                    page = ticket.page,
                    users = page.data.len(),
                    total_pages = page.total_pages,
                    "users loaded"
                );
                self.users = page.data;
                self.window.total_pages = page.total_pages;
                self.error = None;
            }
            Err(err) => {
                warn!(page = ticket.page, "failed to load users: {err}");
                let message = err.to_string();
                self.error = Some(if message.trim().is_empty() {
                    MSG_LOAD_FAILED.to_string()
                } else {
                    message
                });
            }
        }

        self.loading = false;
        true
    }

    /// Opens the edit modal with a draft copied from user `id`.
    pub fn open_edit(&mut self, id: u64) -> Option<&mut UserUpdate> {
        let draft = UserUpdate::from(self.user(id)?);
        self.draft = draft;
        self.selected = Some(id);
        self.modal_open = true;
        Some(&mut self.draft)
    }

    #[must_use]
    pub fn draft(&self) -> Option<&UserUpdate> {
        self.modal_open.then_some(&self.draft)
    }

    pub fn draft_mut(&mut self) -> Option<&mut UserUpdate> {
        if self.modal_open {
            Some(&mut self.draft)
        } else {
            None
        }
    }

    /// Closes the modal without saving; the draft is discarded.
    pub fn dismiss_edit(&mut self) {
        self.close_modal();
    }

    /// Sends the draft for the selected user. On success the local record is
    /// updated in place; the modal closes either way.
    ///
    /// # Errors
    /// Returns `AppError::Validation` when no user is selected (nothing is sent
    /// or notified), or the API error after notifying it.
    #[instrument(skip(self), fields(id = ?self.selected))]
    pub async fn confirm_edit(&mut self) -> Result<(), AppError> {
        let Some(id) = self.selected.filter(|_| self.modal_open) else {
            return Err(AppError::Validation(
                "No user is selected for editing.".to_string(),
            ));
        };
        let update = self.draft.clone();

        let result = client::update_user(&self.api, id, &update).await;
        match &result {
            Ok(()) => {
                info!(id, "user updated");
                self.notifier.notify(Notification::success(MSG_UPDATE_SUCCESS));
                if let Some(user) = self.users.iter_mut().find(|user| user.id == id) {
                    user.apply(&update);
                }
            }
            Err(err) => {
                warn!(id, "failed to update user: {err}");
                self.notifier.notify(Notification::error(MSG_UPDATE_FAILED));
            }
        }

        self.close_modal();
        result
    }

    /// Deletes user `id` and drops it from the local page. The page window is
    /// left as is, even if the page is now empty.
    ///
    /// # Errors
    /// Returns the API error after notifying it.
    #[instrument(skip(self))]
    pub async fn delete(&mut self, id: u64) -> Result<(), AppError> {
        match client::delete_user(&self.api, id).await {
            Ok(()) => {
                info!(id, "user deleted");
                self.notifier.notify(Notification::success(MSG_DELETE_SUCCESS));
                self.users.retain(|user| user.id != id);
                Ok(())
            }
            Err(err) => {
                warn!(id, "failed to delete user: {err}");
                self.notifier.notify(Notification::error(MSG_DELETE_FAILED));
                Err(err)
            }
        }
    }

    /// Ends the session and returns where to navigate.
    ///
    /// # Errors
    /// Returns an error if the token cannot be removed from storage.
    pub fn logout(&self) -> Result<Route, StorageError> {
        self.session.clear_token()?;
        info!("logged out");
        Ok(Route::Login)
    }

    fn close_modal(&mut self) {
        self.modal_open = false;
        self.selected = None;
        self.draft = UserUpdate::default();
    }
}
