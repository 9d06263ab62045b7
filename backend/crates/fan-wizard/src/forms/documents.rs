use crate::{Result, WizardError};

use fan_config::DocumentConfig;
use fan_core::validators::generate_id;
use fan_core::{Document, DocumentType};

use serde::{Deserialize, Serialize};

const BYTES_PER_MEGABYTE: u64 = 1024 * 1024;

/// File metadata handed over by the upload boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentUpload {
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentLimits {
    pub max_size_bytes: u64,
    pub allowed_mime_types: Vec<String>,
}

impl Default for DocumentLimits {
    fn default() -> Self {
        let config = DocumentConfig::default();
        Self {
            max_size_bytes: config.max_size_bytes,
            allowed_mime_types: config.allowed_mime_types,
        }
    }
}

impl DocumentLimits {
    pub fn check(&self, upload: &DocumentUpload) -> Result<()> {
        if upload.file_name.trim().is_empty() {
            return Err(WizardError::file_constraint("Nenhum arquivo selecionado"));
        }

        if upload.size_bytes > self.max_size_bytes {
            return Err(WizardError::file_constraint(format!(
                "O tamanho do arquivo excede o limite de {}",
                Self::describe_size(self.max_size_bytes)
            )));
        }

        let allowed = self
            .allowed_mime_types
            .iter()
            .any(|mime| mime.eq_ignore_ascii_case(upload.mime_type.trim()));
        if !allowed {
            return Err(WizardError::file_constraint(
                "Apenas arquivos JPEG, PNG e PDF são permitidos",
            ));
        }

        Ok(())
    }

    fn describe_size(bytes: u64) -> String {
        if bytes >= BYTES_PER_MEGABYTE {
            format!("{}MB", bytes / BYTES_PER_MEGABYTE)
        } else {
            format!("{} bytes", bytes)
        }
    }
}

/// Step 4: identity document uploads.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentsForm {
    selected_type: DocumentType,
    error: Option<String>,
    #[serde(skip)]
    limits: DocumentLimits,
}

impl DocumentsForm {
    pub fn new(limits: DocumentLimits) -> Self {
        Self {
            selected_type: DocumentType::default(),
            error: None,
            limits,
        }
    }

    pub fn selected_type(&self) -> DocumentType {
        self.selected_type
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn select_type(&mut self, document_type: DocumentType) {
        self.selected_type = document_type;
    }

    /// Accept an upload as a new pending document of the selected type.
    ///
    /// A rejected file replaces any previous error; an accepted one clears it.
    pub fn upload(&mut self, upload: &DocumentUpload) -> Result<Document> {
        if let Err(e) = self.limits.check(upload) {
            self.error = Some(e.user_message());
            return Err(e);
        }
        self.error = None;

        let id = generate_id();
        Ok(Document::new(
            id,
            upload.file_name.trim().to_string(),
            self.selected_type,
            format!("blob:local/{}", id),
        ))
    }
}

impl Default for DocumentsForm {
    fn default() -> Self {
        Self::new(DocumentLimits::default())
    }
}
