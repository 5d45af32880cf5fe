use serde::{Deserialize, Serialize};

/// What the visitor typed into the contact form.
///
/// Subject is optional by validation rule only; an empty string means "no
/// subject".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}
