//! Uploaded identity document.

use crate::{DocumentStatus, DocumentType};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: Uuid,
    /// Original file name
    pub name: String,
    #[serde(rename = "type")]
    pub document_type: DocumentType,
    pub status: DocumentStatus,
    pub upload_date: DateTime<Utc>,
    /// Local preview reference of the uploaded blob
    pub url: String,
}

impl Document {
    pub fn new(id: Uuid, name: String, document_type: DocumentType, url: String) -> Self {
        Self {
            id,
            name,
            document_type,
            status: DocumentStatus::Pending,
            upload_date: Utc::now(),
            url,
        }
    }
}
