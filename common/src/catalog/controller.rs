//! The catalog controller: loading, seeding and mutating penguin records.
//!
//! The controller owns one [`CatalogState`] for the lifetime of the page and
//! talks to a [`PenguinStore`]. After every successful mutation it re-fetches
//! the whole list instead of patching local state, so what is shown is always
//! a snapshot the store itself returned.
//!
//! Everything runs on a single cooperative executor. Operations may interleave
//! at `.await` points (two quick favorite toggles each trigger their own reload
//! and whichever reload resolves last wins), but the state cell is never
//! borrowed across an await, so a reader sees either the old or the new
//! snapshot. No store call is retried; failures are logged and reported.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use log::{debug, error};

use super::form::{FormField, PenguinForm};
use super::notifications::Notification;
use super::seed::{SeedOutcome, seed_if_empty};
use super::state::CatalogState;
use super::store::PenguinStore;
use crate::model::penguin::{Penguin, PenguinFields};

/// Receives the controller's side effects.
///
/// The browser app re-renders on `state_changed` and turns `notify` into a toast.
pub trait CatalogObserver {
    fn state_changed(&self);
    fn notify(&self, notification: Notification);
}

/// Handle to the catalog state and its store.
///
/// Cloning is cheap and every clone drives the same state, which lets an async
/// task own a handle while the UI keeps rendering from another.
pub struct CatalogController<S> {
    store: Rc<S>,
    state: Rc<RefCell<CatalogState>>,
    observer: Rc<dyn CatalogObserver>,
}

impl<S> Clone for CatalogController<S> {
    fn clone(&self) -> Self {
        Self {
            store: Rc::clone(&self.store),
            state: Rc::clone(&self.state),
            observer: Rc::clone(&self.observer),
        }
    }
}

impl<S: PenguinStore> CatalogController<S> {
    pub fn new(store: Rc<S>, observer: Rc<dyn CatalogObserver>) -> Self {
        Self {
            store,
            state: Rc::new(RefCell::new(CatalogState::default())),
            observer,
        }
    }

    /// Borrows the current state. Do not hold the guard across an await.
    pub fn state(&self) -> Ref<'_, CatalogState> {
        self.state.borrow()
    }

    pub fn snapshot(&self) -> CatalogState {
        self.state.borrow().clone()
    }

    fn mutate(&self, change: impl FnOnce(&mut CatalogState)) {
        change(&mut *self.state.borrow_mut());
        self.observer.state_changed();
    }

    /// Session start: one reload, then the seed check.
    ///
    /// Each step issues its own `list`, so a fresh session costs two round trips.
    pub async fn initialize(&self) {
        self.reload().await;
        self.seed().await;
    }

    /// Replaces `records` with the store's current list.
    ///
    /// On failure the previous records are kept. `is_loading` is cleared either way.
    pub async fn reload(&self) {
        self.mutate(|state| state.is_loading = true);

        match self.store.list().await {
            Ok(records) => {
                debug!("loaded {} penguins", records.len());
                self.mutate(|state| {
                    state.records = records;
                    state.is_loading = false;
                });
            }
            Err(e) => {
                error!("Error loading penguins: {}", e);
                self.mutate(|state| state.is_loading = false);
            }
        }
    }

    /// Writes the default records into an empty store, then reloads.
    ///
    /// A populated store is left untouched. A failing list skips seeding; a
    /// failing create stops it without a reload.
    pub async fn seed(&self) {
        match seed_if_empty(self.store.as_ref()).await {
            Ok(SeedOutcome::Seeded(count)) => {
                debug!("seeded {} default penguins", count);
                self.reload().await;
            }
            Ok(SeedOutcome::AlreadyPopulated) => {}
            Err(e) => error!("Error seeding penguins: {}", e),
        }
    }

    /// Flips `is_favorite` on `penguin` and reloads.
    ///
    /// The confirmation is worded from the value the record had when the user clicked.
    pub async fn toggle_favorite(&self, penguin: Penguin) {
        let mut fields = penguin.fields();
        fields.is_favorite = !penguin.is_favorite;

        match self.store.update(&penguin.id, fields.into()).await {
            Ok(_) => {
                self.observer
                    .notify(Notification::favorite_toggled(&penguin));
                self.reload().await;
            }
            Err(e) => {
                error!("Error updating favorite: {}", e);
                self.observer.notify(Notification::favorite_failed());
            }
        }
    }

    pub fn open_create_form(&self) {
        self.mutate(|state| {
            state.reset_form();
            state.is_modal_open = true;
        });
    }

    pub fn open_edit_form(&self, penguin: Penguin) {
        self.mutate(|state| {
            state.form = PenguinForm::from_penguin(&penguin);
            state.form_errors.clear();
            state.editing = Some(penguin);
            state.is_modal_open = true;
        });
    }

    /// Cancel: closes the modal and discards the form.
    pub fn close_form(&self) {
        self.mutate(|state| {
            state.is_modal_open = false;
            state.reset_form();
        });
    }

    pub fn set_field(&self, field: FormField, value: String) {
        self.mutate(|state| {
            if !value.trim().is_empty() {
                state.form_errors.retain(|e| e.field != field);
            }
            state.form.set(field, value);
        });
    }

    pub fn set_favorite_field(&self, is_favorite: bool) {
        self.mutate(|state| state.form.is_favorite = is_favorite);
    }

    /// Validates the form and, if every required input is filled, submits it.
    ///
    /// Blank required inputs are recorded in `form_errors` and nothing is sent.
    pub async fn submit_form(&self) {
        let validated = self.state.borrow().form.validate();
        match validated {
            Ok(fields) => {
                self.mutate(|state| state.form_errors.clear());
                self.submit(fields).await;
            }
            Err(errors) => self.mutate(|state| state.form_errors = errors),
        }
    }

    /// Updates the record being edited, or creates a new one when not editing.
    ///
    /// On success the modal closes, the form resets and the list reloads. On
    /// failure the modal stays open with the user's input intact.
    pub async fn submit(&self, fields: PenguinFields) {
        let editing_id = self.state.borrow().editing.as_ref().map(|p| p.id.clone());

        let result = match &editing_id {
            Some(id) => self.store.update(id, fields.into()).await,
            None => self.store.create(fields).await,
        };

        match result {
            Ok(saved) => {
                debug!("saved penguin {}", saved.id);
                self.mutate(|state| {
                    state.is_modal_open = false;
                    state.reset_form();
                });
                self.observer
                    .notify(Notification::saved(editing_id.is_some()));
                self.reload().await;
            }
            Err(e) => {
                error!("Error saving penguin: {}", e);
                self.observer.notify(Notification::save_failed());
            }
        }
    }

    /// Asks for confirmation before a delete.
    pub fn request_delete(&self, penguin: Penguin) {
        self.mutate(|state| state.pending_delete = Some(penguin));
    }

    /// Confirms the pending delete.
    ///
    /// The store has no delete operation, so this only tells the user so.
    /// No record is touched.
    pub fn confirm_delete(&self) {
        let pending = self.state.borrow_mut().pending_delete.take();
        if pending.is_some() {
            self.observer.notify(Notification::delete_unavailable());
        }
        self.observer.state_changed();
    }

    pub fn cancel_delete(&self) {
        self.mutate(|state| state.pending_delete = None);
    }
}
