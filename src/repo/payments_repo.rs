use crate::domain::payment::PaymentRecord;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepoError {
    #[error("payment id {0} already exists")]
    DuplicateId(String),
}

/// Process-lifetime store of completed payments. Clones share the same map.
#[derive(Clone, Default)]
pub struct PaymentsRepo {
    inner: Arc<RwLock<HashMap<String, PaymentRecord>>>,
}

impl PaymentsRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids are generated fresh per payment, so a collision means something
    /// upstream is broken. The existing record is left untouched.
    pub async fn insert(&self, record: PaymentRecord) -> Result<(), RepoError> {
        let mut write = self.inner.write().await;
        match write.entry(record.id.clone()) {
            Entry::Occupied(e) => Err(RepoError::DuplicateId(e.key().clone())),
            Entry::Vacant(e) => {
                e.insert(record);
                Ok(())
            }
        }
    }

    pub async fn get(&self, id: &str) -> Option<PaymentRecord> {
        self.inner.read().await.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
