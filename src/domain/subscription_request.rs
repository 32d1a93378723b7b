use std::collections::BTreeMap;

use super::FormState;

/// Merge field the provider stores the first name under.
const FIRST_NAME_FIELD: &str = "FNAME";
/// Merge field tagging the page a signup came from.
const SOURCE_PATH_FIELD: &str = "PATHNAME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionRequest {
    pub email: String,
    pub fields: BTreeMap<String, String>,
}

impl SubscriptionRequest {
    pub fn from_form(state: &FormState, source_path: Option<&str>) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(FIRST_NAME_FIELD.to_string(), state.first_name.clone());
        if let Some(path) = source_path {
            fields.insert(SOURCE_PATH_FIELD.to_string(), path.to_string());
        }
        Self {
            email: state.email.clone(),
            fields,
        }
    }
}
