use fan_core::DocumentType;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTypeRequest {
    pub document_type: DocumentType,
}
