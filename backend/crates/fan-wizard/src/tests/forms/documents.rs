use crate::{DocumentLimits, DocumentUpload, DocumentsForm, WizardError};

use fan_core::{DocumentStatus, DocumentType};

use googletest::prelude::*;

fn upload(mime_type: &str, size_bytes: u64) -> DocumentUpload {
    DocumentUpload {
        file_name: "rg-frente.png".to_string(),
        mime_type: mime_type.to_string(),
        size_bytes,
    }
}

#[test]
fn given_new_form_when_read_then_identity_card_selected() {
    let form = DocumentsForm::default();

    assert_that!(form.selected_type(), eq(DocumentType::IdentityCard));
}

#[test]
fn given_allowed_file_when_uploaded_then_pending_document_of_selected_type() {
    // Given
    let mut form = DocumentsForm::default();
    form.select_type(DocumentType::Passport);

    // When
    let document = form.upload(&upload("image/png", 1024)).unwrap();

    // Then
    assert_that!(document.name, eq("rg-frente.png"));
    assert_that!(document.document_type, eq(DocumentType::Passport));
    assert_that!(document.status, eq(DocumentStatus::Pending));
    assert_that!(document.url, starts_with("blob:"));
}

#[test]
fn given_file_over_limit_when_uploaded_then_file_constraint_error() {
    let mut form = DocumentsForm::default();

    let result = form.upload(&upload("application/pdf", 5 * 1024 * 1024 + 1));

    assert!(matches!(result, Err(WizardError::FileConstraint { .. })));
    assert_that!(
        form.error(),
        some(eq("O tamanho do arquivo excede o limite de 5MB"))
    );
}

#[test]
fn given_file_exactly_at_limit_when_uploaded_then_accepted() {
    let mut form = DocumentsForm::default();

    assert_that!(
        form.upload(&upload("image/jpeg", 5 * 1024 * 1024)),
        ok(anything())
    );
}

#[test]
fn given_disallowed_type_when_uploaded_then_file_constraint_error() {
    let mut form = DocumentsForm::default();

    let result = form.upload(&upload("image/gif", 10));

    assert!(matches!(result, Err(WizardError::FileConstraint { .. })));
    assert_that!(
        form.error(),
        some(eq("Apenas arquivos JPEG, PNG e PDF são permitidos"))
    );
}

#[test]
fn given_previous_error_when_next_upload_succeeds_then_error_cleared() {
    let mut form = DocumentsForm::default();
    let _ = form.upload(&upload("text/plain", 10));

    form.upload(&upload("IMAGE/PNG", 10)).unwrap();

    assert_that!(form.error(), none());
}

#[test]
fn given_custom_small_limit_when_uploaded_then_message_in_bytes() {
    let mut form = DocumentsForm::new(DocumentLimits {
        max_size_bytes: 100,
        allowed_mime_types: vec!["application/pdf".to_string()],
    });

    let _ = form.upload(&upload("application/pdf", 101));

    assert_that!(
        form.error(),
        some(eq("O tamanho do arquivo excede o limite de 100 bytes"))
    );
}

#[test]
fn given_two_uploads_when_accepted_then_ids_differ() {
    let mut form = DocumentsForm::default();

    let first = form.upload(&upload("image/png", 1)).unwrap();
    let second = form.upload(&upload("image/png", 1)).unwrap();

    assert_that!(first.id, not(eq(second.id)));
}
