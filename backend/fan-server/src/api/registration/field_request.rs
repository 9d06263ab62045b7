use serde::Deserialize;

/// Keystroke in a wizard field. `F` is the step's field enum.
#[derive(Debug, Deserialize)]
pub struct FieldChangeRequest<F> {
    pub field: F,
    #[serde(default)]
    pub value: String,
}

/// Focus left a wizard field
#[derive(Debug, Deserialize)]
pub struct FieldBlurRequest<F> {
    pub field: F,
}
