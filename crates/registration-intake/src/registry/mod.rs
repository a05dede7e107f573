//! Registration records and their append-only in-memory log.

mod memory;

pub use memory::RegistrationLog;

use crate::error::IntakeError;
use crate::validation::{validate_fields, RequiredFields};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Whitespace stripped from form values: the set browsers trim from input
/// values, which adds U+FEFF and leaves out U+0085 compared to `char::is_whitespace`.
fn is_form_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

fn trim_form_value(value: &str) -> &str {
    value.trim_matches(is_form_whitespace)
}

/// Raw form values as read from the form surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormFields {
    pub name: String,
    pub surname1: String,
    /// Optional and never validated.
    pub surname2: String,
    pub phone: String,
    pub identity_code: String,
    pub email: String,
}

impl FormFields {
    /// Trim every field and uppercase the identity code.
    pub fn normalize(self) -> Self {
        Self {
            name: trim_form_value(&self.name).to_string(),
            surname1: trim_form_value(&self.surname1).to_string(),
            surname2: trim_form_value(&self.surname2).to_string(),
            phone: trim_form_value(&self.phone).to_string(),
            identity_code: trim_form_value(&self.identity_code).to_uppercase(),
            email: trim_form_value(&self.email).to_string(),
        }
    }

    /// Borrow the fields that go through whitelist validation.
    pub fn required(&self) -> RequiredFields<'_> {
        RequiredFields {
            name: &self.name,
            surname1: &self.surname1,
            phone: &self.phone,
            identity_code: &self.identity_code,
            email: &self.email,
        }
    }
}

/// Form values that have been normalized and passed every whitelist check.
///
/// The only way to obtain one is through `TryFrom<FormFields>`, which is what
/// keeps invalid data out of the [`RegistrationLog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSubmission {
    fields: FormFields,
}

impl ValidatedSubmission {
    /// Full name: given name and surnames joined by single spaces, empty
    /// segments omitted.
    pub fn full_name(&self) -> String {
        [
            self.fields.name.as_str(),
            self.fields.surname1.as_str(),
            self.fields.surname2.as_str(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }
}

impl TryFrom<FormFields> for ValidatedSubmission {
    type Error = IntakeError;

    fn try_from(fields: FormFields) -> Result<Self, Self::Error> {
        let fields = fields.normalize();
        if !validate_fields(&fields.required()) {
            return Err(IntakeError::InvalidSubmission);
        }
        Ok(Self { fields })
    }
}

/// An accepted registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    /// Sequential identifier, starting at 1
    pub id: u64,

    /// Given name plus one or two surnames
    pub full_name: String,

    /// Ten-digit phone number
    pub phone: String,

    /// CURP, uppercase
    pub identity_code: String,

    pub email: String,

    /// When the record was created, serialized as e.g. `2024-01-01T00:00:00.000Z`
    #[serde(serialize_with = "serialize_millis")]
    pub registered_at: DateTime<Utc>,
}

impl RegistrationRecord {
    fn new(id: u64, submission: ValidatedSubmission) -> Self {
        let full_name = submission.full_name();
        let FormFields {
            phone,
            identity_code,
            email,
            ..
        } = submission.fields;

        Self {
            id,
            full_name,
            phone,
            identity_code,
            email,
            registered_at: Utc::now(),
        }
    }

    /// Displayed columns, in table order.
    pub fn table_cells(&self) -> [&str; 4] {
        [
            self.full_name.as_str(),
            self.phone.as_str(),
            self.identity_code.as_str(),
            self.email.as_str(),
        ]
    }
}

fn serialize_millis<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}
