//! Contact and meeting records
//!
//! Records hold only validated field types, so deserializing a JSON
//! document re-runs every field parser. A document that loads is fully
//! valid; there is no partially-loaded state.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::fields::{Address, Email, MeetingName, Name, OtherPhones, Phone, Venue, When};

/// A scheduled meeting with a contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub name: MeetingName,
    pub venue: Venue,
    pub when: When,
}

/// One entry in the contact book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub name: Name,
    pub phone: Phone,
    #[serde(default)]
    pub other_phones: OtherPhones,
    pub email: Email,
    pub address: Address,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub meetings: Vec<Meeting>,
    #[serde(default)]
    pub flagged: bool,
}

impl Contact {
    /// Cross-field check: other numbers must not repeat the main phone
    pub fn validate_phones(&self) -> crate::Result<()> {
        self.other_phones.check_against_main(&self.phone)
    }
}

/// Failure to load a contacts document
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Malformed JSON, a missing field, or a field that failed validation
    #[error("Invalid contacts file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Contact #{index}: {source}")]
    Invalid {
        index: usize,
        source: ValidationError,
    },
}

/// Load and fully validate a JSON array of contacts
///
/// # Errors
/// `LoadError::Json` for syntax errors and field validation failures,
/// `LoadError::Invalid` (1-based index) for cross-field violations.
pub fn load_contacts(json: &str) -> Result<Vec<Contact>, LoadError> {
    let contacts: Vec<Contact> = serde_json::from_str(json)?;

    for (i, contact) in contacts.iter().enumerate() {
        contact
            .validate_phones()
            .map_err(|source| LoadError::Invalid {
                index: i + 1,
                source,
            })?;
    }

    tracing::info!(count = contacts.len(), "loaded contacts");
    Ok(contacts)
}
