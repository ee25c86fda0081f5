use serde::{Deserialize, Serialize};

/// One address from the provider's email listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRecord {
    #[serde(rename = "email")]
    pub address: String,
    #[serde(rename = "primary", default)]
    pub is_primary: bool,
    #[serde(rename = "verified", default)]
    pub is_verified: bool,
}

impl EmailRecord {
    pub fn new(address: impl Into<String>, is_primary: bool, is_verified: bool) -> Self {
        Self {
            address: address.into(),
            is_primary,
            is_verified,
        }
    }
}
