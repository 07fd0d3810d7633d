//! The catalog page's behavior, independent of any renderer or transport.
//!
//! - `store`: the asynchronous record-store contract (`list`, `create`, `update`).
//! - `memory`: an in-process store satisfying that contract.
//! - `seed`: the canonical default records and the seed-if-empty routine.
//! - `form`: the add/edit form model and its validation boundary.
//! - `notifications`: user-visible status messages.
//! - `state` / `controller`: the catalog state and the operations that mutate it.

mod controller;
mod form;
mod memory;
mod notifications;
mod seed;
mod state;
mod store;

pub use controller::{CatalogController, CatalogObserver};
pub use form::{FormError, FormField, PenguinForm};
pub use memory::MemoryStore;
pub use notifications::{DeletePrompt, Notification, NotificationLevel};
pub use seed::{SeedOutcome, default_penguins, seed_if_empty};
pub use state::CatalogState;
pub use store::{PenguinStore, StoreError};
