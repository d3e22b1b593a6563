//! MongoDB-backed contact store
//!
//! Holds one driver client for the lifetime of the process. Name uniqueness is
//! enforced by a unique index on `contact_name`; duplicate-key write errors
//! surface as [`StoreError::Duplicate`].

use crate::config::StorageConfig;
use crate::contacts::models::{Contact, ContactPayload};
use crate::contacts::store::{ContactStore, StoreError, StoreResult};
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{FindOptions, IndexOptions};
use mongodb::{Client, Collection, IndexModel};
use tracing::{debug, info, warn};

/// Server error code for unique index violations
const DUPLICATE_KEY_CODE: i32 = 11000;

/// [`ContactStore`] over a MongoDB collection
#[derive(Clone)]
pub struct MongoContactStore {
    collection: Collection<Contact>,
}

impl MongoContactStore {
    /// Connect to the configured database and prepare the collection
    ///
    /// # Arguments
    /// * `config` - Connection string, database and collection names
    ///
    /// # Returns
    /// * `Ok(MongoContactStore)` if the client could be created
    /// * `Err(StoreError)` if the connection string is invalid
    pub async fn connect(config: &StorageConfig) -> StoreResult<Self> {
        let client = Client::with_uri_str(&config.uri).await?;
        let collection = client
            .database(&config.database)
            .collection::<Contact>(&config.collection);

        info!(
            database = %config.database,
            collection = %config.collection,
            "Connected to MongoDB"
        );

        let store = Self { collection };
        if let Err(e) = store.ensure_unique_name_index().await {
            // Existing duplicates block index creation; serve anyway.
            warn!("Failed to create unique index on contact_name: {}", e);
        }
        Ok(store)
    }

    /// Untyped view of the collection for reads
    fn documents(&self) -> Collection<Document> {
        self.collection.clone_with_type()
    }

    /// Create the unique index on `contact_name` if it does not exist yet
    pub async fn ensure_unique_name_index(&self) -> StoreResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "contact_name": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        let result = self.collection.create_index(index, None).await?;
        debug!("Index ready: {}", result.index_name);
        Ok(())
    }
}

/// Read a field as text; non-string values written by older clients are
/// rendered instead of failing the whole read.
fn text_field(document: &Document, key: &str) -> Option<String> {
    match document.get(key)? {
        Bson::String(value) => Some(value.clone()),
        Bson::Null | Bson::Undefined => None,
        other => Some(other.to_string()),
    }
}

fn contact_from_document(document: &Document) -> Contact {
    Contact {
        contact_name: text_field(document, "contact_name"),
        phone_number: text_field(document, "phone_number"),
        message: text_field(document, "message"),
        image_url: text_field(document, "image_url"),
    }
}

fn name_filter(name: &str) -> Document {
    doc! { "contact_name": name }
}

/// Field-level `$set` body containing only the supplied fields
fn set_fields(changes: &ContactPayload) -> Document {
    let mut set = Document::new();
    let fields = [
        ("contact_name", &changes.contact_name),
        ("phone_number", &changes.phone_number),
        ("message", &changes.message),
        ("image_url", &changes.image_url),
    ];
    for (key, value) in fields {
        if let Some(value) = value {
            set.insert(key, value.as_str());
        }
    }
    set
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(e)) => e.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(e) => e.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

fn map_write_error(err: mongodb::error::Error) -> StoreError {
    if is_duplicate_key(&err) {
        StoreError::Duplicate
    } else {
        StoreError::Backend(err)
    }
}

#[async_trait]
impl ContactStore for MongoContactStore {
    async fn list(&self, limit: usize) -> StoreResult<Vec<Contact>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let options = FindOptions::builder().limit(limit).build();
        let cursor = self.documents().find(doc! {}, options).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        let contacts: Vec<Contact> = documents.iter().map(contact_from_document).collect();
        debug!("Fetched {} contacts", contacts.len());
        Ok(contacts)
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Contact>> {
        let contact = self
            .documents()
            .find_one(name_filter(name), None)
            .await?
            .map(|document| contact_from_document(&document));
        debug!(contact_name = %name, found = contact.is_some(), "Looked up contact");
        Ok(contact)
    }

    async fn insert(&self, contact: Contact) -> StoreResult<()> {
        let result = self
            .collection
            .insert_one(&contact, None)
            .await
            .map_err(map_write_error)?;
        debug!(
            contact_name = ?contact.contact_name,
            id = %result.inserted_id,
            "Document inserted"
        );
        Ok(())
    }

    async fn update_by_name(&self, name: &str, changes: &ContactPayload) -> StoreResult<bool> {
        let set = set_fields(changes);
        if set.is_empty() {
            return Ok(self.find_by_name(name).await?.is_some());
        }

        let result = self
            .collection
            .update_one(name_filter(name), doc! { "$set": set }, None)
            .await
            .map_err(map_write_error)?;
        debug!(
            contact_name = %name,
            matched = result.matched_count,
            modified = result.modified_count,
            "Update results"
        );
        Ok(result.matched_count > 0)
    }

    async fn delete_by_name(&self, name: &str) -> StoreResult<bool> {
        let result = self.collection.delete_one(name_filter(name), None).await?;
        debug!(
            contact_name = %name,
            deleted = result.deleted_count,
            "Delete results"
        );
        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_fields_only_present() {
        let changes = ContactPayload {
            phone_number: Some("555".to_string()),
            image_url: Some(String::new()),
            ..Default::default()
        };
        let set = set_fields(&changes);
        assert_eq!(set, doc! { "phone_number": "555", "image_url": "" });
    }

    #[test]
    fn test_set_fields_empty_payload() {
        assert!(set_fields(&ContactPayload::default()).is_empty());
    }

    #[test]
    fn test_contact_from_document_lenient() {
        let document = doc! {
            "_id": mongodb::bson::oid::ObjectId::new(),
            "contact_name": "Ada",
            "phone_number": 5551234_i64,
            "message": Bson::Null,
        };
        assert_eq!(
            contact_from_document(&document),
            Contact {
                contact_name: Some("Ada".to_string()),
                phone_number: Some("5551234".to_string()),
                message: None,
                image_url: None,
            }
        );
    }

    #[test]
    fn test_name_filter_is_exact() {
        assert_eq!(name_filter(" Ada"), doc! { "contact_name": " Ada" });
    }
}
