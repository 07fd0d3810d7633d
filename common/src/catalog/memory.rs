use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use super::store::{PenguinStore, StoreError};
use crate::model::penguin::{Penguin, PenguinFields, PenguinPatch};

/// A record store kept entirely in memory.
///
/// Ids are `penguin-<n>` with `n` strictly increasing, so an id is never handed
/// out twice. Records are listed in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RefCell<Vec<Penguin>>,
    next_id: Cell<u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    /// A copy of the current contents, bypassing the async contract.
    pub fn records(&self) -> Vec<Penguin> {
        self.records.borrow().clone()
    }
}

#[async_trait(?Send)]
impl PenguinStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Penguin>, StoreError> {
        Ok(self.records.borrow().clone())
    }

    async fn create(&self, fields: PenguinFields) -> Result<Penguin, StoreError> {
        let n = self.next_id.get() + 1;
        self.next_id.set(n);
        let penguin = fields.with_id(format!("penguin-{n}"));
        self.records.borrow_mut().push(penguin.clone());
        Ok(penguin)
    }

    async fn update(&self, id: &str, patch: PenguinPatch) -> Result<Penguin, StoreError> {
        let mut records = self.records.borrow_mut();
        let penguin = records
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        patch.apply_to(penguin);
        Ok(penguin.clone())
    }
}
