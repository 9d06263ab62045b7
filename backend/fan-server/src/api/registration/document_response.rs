use fan_core::Document;

use serde::Serialize;

/// Single uploaded document
#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub document: Document,
}
