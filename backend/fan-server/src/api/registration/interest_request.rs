use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct InterestRequest {
    pub interest: String,
}
