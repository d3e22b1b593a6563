//! Contact document and request payload types

use serde::{Deserialize, Serialize};

/// A stored contact
///
/// Mirrors the document layout in the collection. The storage-assigned `_id`
/// is ignored on read and never written by the service. Absent fields are
/// stored and rendered as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Contact {
    /// External key of the contact
    pub contact_name: Option<String>,
    /// Phone number, free-form
    pub phone_number: Option<String>,
    /// Message attached to the contact
    pub message: Option<String>,
    /// Avatar or picture URL
    pub image_url: Option<String>,
}

impl Contact {
    /// Apply the fields present in `changes`, keeping the rest untouched
    pub fn apply(&mut self, changes: &ContactPayload) {
        if let Some(name) = &changes.contact_name {
            self.contact_name = Some(name.clone());
        }
        if let Some(phone) = &changes.phone_number {
            self.phone_number = Some(phone.clone());
        }
        if let Some(message) = &changes.message {
            self.message = Some(message.clone());
        }
        if let Some(url) = &changes.image_url {
            self.image_url = Some(url.clone());
        }
    }
}

impl From<ContactPayload> for Contact {
    fn from(payload: ContactPayload) -> Self {
        Self {
            contact_name: payload.contact_name,
            phone_number: payload.phone_number,
            message: payload.message,
            image_url: payload.image_url,
        }
    }
}

/// Request body for create and update
///
/// Unknown keys are ignored and JSON `null` counts as absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ContactPayload {
    /// New or updated contact name
    #[serde(default)]
    pub contact_name: Option<String>,
    /// New or updated phone number
    #[serde(default)]
    pub phone_number: Option<String>,
    /// New or updated message
    #[serde(default)]
    pub message: Option<String>,
    /// New or updated image URL
    #[serde(default)]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_ignores_unknown_and_null() {
        let payload: ContactPayload =
            serde_json::from_value(json!({"nickname": "x", "message": null})).unwrap();
        assert_eq!(payload, ContactPayload::default());
    }

    #[test]
    fn test_payload_rejects_non_string_fields() {
        let result = serde_json::from_value::<ContactPayload>(json!({"phone_number": 5551234}));
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_keeps_absent_fields() {
        let mut contact = Contact {
            contact_name: Some("Ada".to_string()),
            phone_number: Some("555".to_string()),
            message: Some("hi".to_string()),
            image_url: None,
        };
        contact.apply(&ContactPayload {
            phone_number: Some("777".to_string()),
            ..Default::default()
        });

        assert_eq!(contact.contact_name.as_deref(), Some("Ada"));
        assert_eq!(contact.phone_number.as_deref(), Some("777"));
        assert_eq!(contact.message.as_deref(), Some("hi"));
        assert_eq!(contact.image_url, None);
    }

    #[test]
    fn test_apply_empty_string_overrides() {
        let mut contact = Contact {
            contact_name: Some("Ada".to_string()),
            ..Default::default()
        };
        contact.apply(&ContactPayload {
            contact_name: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(contact.contact_name.as_deref(), Some(""));
    }

    #[test]
    fn test_contact_serializes_absent_fields_as_null() {
        let contact = Contact {
            contact_name: Some("Ada".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&contact).unwrap();
        assert_eq!(
            value,
            json!({
                "contact_name": "Ada",
                "phone_number": null,
                "message": null,
                "image_url": null,
            })
        );
    }
}
