use serde::{Deserialize, Serialize};

/// Postal address collected on the address step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Partial address; only the keys that are `Some` overwrite the target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AddressPatch {
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

impl Address {
    /// Merge key-wise so sibling fields survive a single-field update
    pub fn apply(&mut self, patch: AddressPatch) {
        if let Some(street) = patch.street {
            self.street = street;
        }
        if let Some(number) = patch.number {
            self.number = number;
        }
        if let Some(complement) = patch.complement {
            self.complement = if complement.is_empty() {
                None
            } else {
                Some(complement)
            };
        }
        if let Some(neighborhood) = patch.neighborhood {
            self.neighborhood = neighborhood;
        }
        if let Some(city) = patch.city {
            self.city = city;
        }
        if let Some(state) = patch.state {
            self.state = state;
        }
        if let Some(zip_code) = patch.zip_code {
            self.zip_code = zip_code;
        }
    }

    /// Street, city and state are the minimum for the step to count as filled
    pub fn has_minimum_fields(&self) -> bool {
        !self.street.is_empty() && !self.city.is_empty() && !self.state.is_empty()
    }
}
