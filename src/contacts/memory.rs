//! In-process contact store
//!
//! Keeps contacts in insertion order behind a single lock. Useful for tests
//! and for running the API without a database.

use crate::contacts::models::{Contact, ContactPayload};
use crate::contacts::store::{ContactStore, StoreError, StoreResult};
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

/// [`ContactStore`] backed by a `Vec` in memory
#[derive(Debug, Default)]
pub struct InMemoryContactStore {
    contacts: RwLock<Vec<Contact>>,
}

impl InMemoryContactStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored contacts
    pub async fn len(&self) -> usize {
        self.contacts.read().await.len()
    }

    /// True when no contact is stored
    pub async fn is_empty(&self) -> bool {
        self.contacts.read().await.is_empty()
    }
}

fn has_name(contact: &Contact, name: Option<&str>) -> bool {
    contact.contact_name.as_deref() == name
}

#[async_trait]
impl ContactStore for InMemoryContactStore {
    async fn list(&self, limit: usize) -> StoreResult<Vec<Contact>> {
        let contacts = self.contacts.read().await;
        Ok(contacts.iter().take(limit).cloned().collect())
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Contact>> {
        let contacts = self.contacts.read().await;
        Ok(contacts.iter().find(|c| has_name(c, Some(name))).cloned())
    }

    async fn insert(&self, contact: Contact) -> StoreResult<()> {
        let mut contacts = self.contacts.write().await;
        let name = contact.contact_name.as_deref();
        if contacts.iter().any(|c| has_name(c, name)) {
            return Err(StoreError::Duplicate);
        }
        debug!(contact_name = ?contact.contact_name, "Inserted contact");
        contacts.push(contact);
        Ok(())
    }

    async fn update_by_name(&self, name: &str, changes: &ContactPayload) -> StoreResult<bool> {
        let mut contacts = self.contacts.write().await;
        let Some(index) = contacts.iter().position(|c| has_name(c, Some(name))) else {
            return Ok(false);
        };

        if let Some(new_name) = changes.contact_name.as_deref() {
            let taken = contacts
                .iter()
                .enumerate()
                .any(|(i, c)| i != index && has_name(c, Some(new_name)));
            if taken {
                return Err(StoreError::Duplicate);
            }
        }

        contacts[index].apply(changes);
        debug!(contact_name = %name, "Updated contact");
        Ok(true)
    }

    async fn delete_by_name(&self, name: &str) -> StoreResult<bool> {
        let mut contacts = self.contacts.write().await;
        let before = contacts.len();
        if let Some(index) = contacts.iter().position(|c| has_name(c, Some(name))) {
            contacts.remove(index);
        }
        let deleted = before - contacts.len();
        debug!(contact_name = %name, deleted, "Delete results");
        Ok(deleted > 0)
    }
}
