//! Contact API handlers
//!
//! Each handler performs a single store operation and maps its outcome to a
//! status code and JSON body.

use crate::contacts::{Contact, ContactPayload, StoreError};
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

/// Maximum number of contacts returned by the list endpoint
pub const MAX_LIST_LIMIT: usize = 100;

/// Message response
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    /// Human-readable message
    pub message: String,
}

impl MessageResponse {
    fn new(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}

/// Raw request body: any JSON object
pub type ContactBody = Result<Json<Map<String, Value>>, JsonRejection>;

/// Require a JSON object with at least one key, then read the contact fields
///
/// Keys other than the four contact fields count towards non-emptiness but
/// are otherwise ignored.
fn require_payload(body: ContactBody) -> Result<ContactPayload, AppError> {
    let Json(object) = body.map_err(|rejection| match rejection {
        JsonRejection::MissingJsonContentType(_) => AppError::EmptyBody,
        other => AppError::InvalidBody(other.body_text()),
    })?;

    if object.is_empty() {
        return Err(AppError::EmptyBody);
    }
    serde_json::from_value(Value::Object(object))
        .map_err(|e| AppError::InvalidBody(e.to_string()))
}

fn conflict(name: Option<String>) -> AppError {
    match name {
        Some(name) => AppError::Conflict(name),
        None => AppError::NamelessConflict,
    }
}

fn not_exist(name: &str) -> AppError {
    AppError::NotFound(format!("Contact with name {} does NOT exist.", name))
}

/// GET /contacts - List up to [`MAX_LIST_LIMIT`] contacts
pub async fn list_contacts(State(state): State<AppState>) -> Result<Json<Vec<Contact>>, AppError> {
    let contacts = state
        .store
        .list(MAX_LIST_LIMIT)
        .await
        .map_err(AppError::fetch("Error fetching contacts"))?;

    Ok(Json(contacts))
}

/// GET /contacts/:name - Get a contact by exact name
pub async fn get_contact(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Contact>, AppError> {
    debug!("Contact to find: {}", name);
    let contact = state
        .store
        .find_by_name(&name)
        .await
        .map_err(AppError::fetch("Error fetching contact"))?
        .ok_or_else(|| AppError::NotFound("Contact not found".to_string()))?;

    Ok(Json(contact))
}

/// POST /contacts - Create a contact
pub async fn create_contact(
    State(state): State<AppState>,
    body: ContactBody,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let contact = Contact::from(require_payload(body)?);
    let name = contact.contact_name.clone();

    match state.store.insert(contact).await {
        Ok(()) => {}
        Err(StoreError::Duplicate) => {
            return Err(conflict(name));
        }
        Err(e) => return Err(AppError::write("Failed to add contact")(e)),
    }

    info!(contact_name = ?name, "Contact created");
    Ok((
        StatusCode::CREATED,
        MessageResponse::new("New contact added successfully"),
    ))
}

/// PUT /contacts/:name - Update the fields supplied in the body
///
/// Fields missing from the body keep their stored value. The body may rename
/// the contact; the response always names the original contact.
pub async fn update_contact(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: ContactBody,
) -> Result<Json<MessageResponse>, AppError> {
    let changes = require_payload(body)?;

    let updated = match state.store.update_by_name(&name, &changes).await {
        Ok(updated) => updated,
        Err(StoreError::Duplicate) => {
            return Err(conflict(changes.contact_name.clone()));
        }
        Err(e) => return Err(AppError::write("Failed to update contact")(e)),
    };
    if !updated {
        return Err(not_exist(&name));
    }

    info!(contact_name = %name, "Contact updated");
    Ok(MessageResponse::new(format!(
        "Contact '{}' was UPDATED successfully.",
        name
    )))
}

/// DELETE /contacts/:name - Delete a contact
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    debug!("Contact to delete: {}", name);
    let deleted = state
        .store
        .delete_by_name(&name)
        .await
        .map_err(AppError::write("Internal Server Error"))?;
    if !deleted {
        return Err(not_exist(&name));
    }

    info!(contact_name = %name, "Contact deleted");
    Ok(MessageResponse::new(format!(
        "Contact {} was DELETED successfully.",
        name
    )))
}
