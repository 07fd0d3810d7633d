use async_trait::async_trait;
use thiserror::Error;

use crate::model::penguin::{Penguin, PenguinFields, PenguinPatch};

/// Why a record-store call did not succeed.
///
/// Callers in this crate never branch on the variant: every failure is reported
/// to the user the same way. The variants exist for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("store rejected the request: {0}")]
    Rejected(String),
    #[error("no penguin with id {0}")]
    NotFound(String),
    #[error("malformed store response: {0}")]
    Decode(String),
}

/// The persistence collaborator behind the catalog.
///
/// Any backend honoring these three calls is interchangeable. There is no
/// delete: the catalog never removes records.
///
/// Futures are not required to be `Send` so that the browser client, which runs
/// on a single-threaded executor, can implement the trait directly.
#[async_trait(?Send)]
pub trait PenguinStore {
    /// All records, in the store's own order. An empty store is a success.
    async fn list(&self) -> Result<Vec<Penguin>, StoreError>;

    /// Persists a new record and returns it with its freshly assigned id.
    async fn create(&self, fields: PenguinFields) -> Result<Penguin, StoreError>;

    /// Applies `patch` to the record `id`; fails if the id is unknown.
    async fn update(&self, id: &str, patch: PenguinPatch) -> Result<Penguin, StoreError>;
}
