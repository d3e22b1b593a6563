//! Contacts module
//!
//! Contact document model and the storage layer behind the contacts API.

pub mod memory;
pub mod models;
pub mod mongo;
pub mod store;

pub use memory::InMemoryContactStore;
pub use models::{Contact, ContactPayload};
pub use mongo::MongoContactStore;
pub use store::{ContactStore, StoreError, StoreResult};
