use uuid::Uuid;

/// Opaque key for list items (documents, profiles)
pub fn generate_id() -> Uuid {
    Uuid::new_v4()
}
