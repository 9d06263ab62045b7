use crate::ApiError;

use fan_db::DbError;
use fan_wizard::WizardError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn render(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let (status, json) = render(ApiError::not_found("Document 1 not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Document 1 not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_field_error_maps_to_validation_with_field() {
    let error = ApiError::from(WizardError::field("email", "E-mail é obrigatório"));

    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "email");
    assert_eq!(json["error"]["message"], "E-mail é obrigatório");
}

#[tokio::test]
async fn test_file_constraint_maps_to_400() {
    let error = ApiError::from(WizardError::file_constraint(
        "Apenas arquivos JPEG, PNG e PDF são permitidos",
    ));

    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "FILE_CONSTRAINT");
}

#[tokio::test]
async fn test_duplicate_maps_to_409() {
    let error = ApiError::from(WizardError::duplicate("Este interesse já foi adicionado"));

    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "DUPLICATE");
    assert_eq!(json["error"]["message"], "Este interesse já foi adicionado");
}

#[tokio::test]
async fn test_navigation_maps_to_bad_request() {
    let error = ApiError::from(WizardError::navigation("not on summary"));

    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_storage_error_hides_details() {
    let error = ApiError::from(DbError::Initialization {
        message: "disk /var/secret is full".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert!(
        !json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("/var/secret")
    );
}

#[tokio::test]
async fn test_invalid_uuid_maps_to_bad_request() {
    let error = ApiError::from(uuid::Uuid::parse_str("not-a-uuid").unwrap_err());

    let (status, _) = render(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
