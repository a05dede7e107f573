//! In-memory form surface.

use super::{FieldId, FormSurface};
use crate::registry::FormFields;
use std::collections::BTreeMap;

/// Form inputs kept in a map keyed by field identifier.
#[derive(Debug, Clone, Default)]
pub struct MemoryForm {
    values: BTreeMap<FieldId, String>,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Type a value into an input, replacing what was there.
    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Fill every input from a snapshot.
    pub fn fill(&mut self, fields: FormFields) {
        self.set(FieldId::Name, fields.name);
        self.set(FieldId::Surname1, fields.surname1);
        self.set(FieldId::Surname2, fields.surname2);
        self.set(FieldId::Phone, fields.phone);
        self.set(FieldId::IdentityCode, fields.identity_code);
        self.set(FieldId::Email, fields.email);
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(String::is_empty)
    }
}

impl From<FormFields> for MemoryForm {
    fn from(fields: FormFields) -> Self {
        let mut form = Self::new();
        form.fill(fields);
        form
    }
}

impl FormSurface for MemoryForm {
    fn value(&self, field: FieldId) -> String {
        self.values.get(&field).cloned().unwrap_or_default()
    }

    fn reset(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_inputs_read_empty() {
        let form = MemoryForm::new();
        assert_eq!(form.value(FieldId::Email), "");
        assert!(form.is_empty());
    }

    #[test]
    fn test_set_and_reset() {
        let mut form = MemoryForm::new();
        form.set(FieldId::Phone, "5512345678");
        assert_eq!(form.value(FieldId::Phone), "5512345678");
        assert!(!form.is_empty());

        form.reset();
        assert_eq!(form.value(FieldId::Phone), "");
        assert!(form.is_empty());
    }

    #[test]
    fn test_from_form_fields() {
        let form = MemoryForm::from(FormFields {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            ..FormFields::default()
        });

        assert_eq!(form.value(FieldId::Name), "Ana");
        assert_eq!(form.value(FieldId::Email), "ana@example.com");
        assert_eq!(form.value(FieldId::Surname1), "");
    }
}
