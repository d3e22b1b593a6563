//! Storage contract for the contacts collection

use crate::contacts::models::{Contact, ContactPayload};
use async_trait::async_trait;
use thiserror::Error;

/// Errors produced by a [`ContactStore`]
#[derive(Error, Debug)]
pub enum StoreError {
    /// A contact with the same name is already stored
    #[error("duplicate contact name")]
    Duplicate,

    /// Any other failure reported by the database driver
    #[error("{0}")]
    Backend(#[from] mongodb::error::Error),
}

/// Result alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Access to the contacts collection, keyed by `contact_name`
///
/// Names are matched exactly: case- and whitespace-sensitive. At most one
/// document exists per name; a missing name counts as a value of its own.
#[async_trait]
pub trait ContactStore: Send + Sync + 'static {
    /// Returns up to `limit` contacts in storage order
    async fn list(&self, limit: usize) -> StoreResult<Vec<Contact>>;

    /// Looks up a single contact by name
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Contact>>;

    /// Stores a new contact. Returns `Err(Duplicate)` if the name is taken.
    async fn insert(&self, contact: Contact) -> StoreResult<()>;

    /// Sets the fields present in `changes` on the contact named `name`.
    /// Returns `false` if no such contact exists, `Err(Duplicate)` if the
    /// change renames it onto a name that is already taken.
    async fn update_by_name(&self, name: &str, changes: &ContactPayload) -> StoreResult<bool>;

    /// Removes the contact named `name`.
    /// Returns `true` if a contact existed and was removed.
    async fn delete_by_name(&self, name: &str) -> StoreResult<bool>;
}
