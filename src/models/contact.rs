use std::fmt;

use serde::{Deserialize, Serialize};

/// Patient details typed into the booking form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    /// Optional reason for the visit, kept as the appointment note
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Phone,
    Email,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactField::Name => write!(f, "name"),
            ContactField::Phone => write!(f, "phone"),
            ContactField::Email => write!(f, "email"),
        }
    }
}

impl ContactDetails {
    /// First required field left blank, in form order. Presence only, formats are not checked.
    pub fn missing_field(&self) -> Option<ContactField> {
        [
            (ContactField::Name, &self.name),
            (ContactField::Phone, &self.phone),
            (ContactField::Email, &self.email),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }

    pub fn note(&self) -> Option<String> {
        let reason = self.reason.trim();
        (!reason.is_empty()).then(|| reason.to_string())
    }
}
