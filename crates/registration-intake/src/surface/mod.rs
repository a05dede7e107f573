//! UI surfaces the intake module reads from and writes to.
//!
//! The host owns the actual widgets; the module only sees these traits.

mod html;
mod memory;

pub use html::{escape_html, HtmlStatus, HtmlTable};
pub use memory::MemoryForm;

use crate::registry::FormFields;
use std::fmt;

/// Stable identifiers of the form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    Name,
    Surname1,
    Surname2,
    Phone,
    IdentityCode,
    Email,
}

impl FieldId {
    pub const ALL: [FieldId; 6] = [
        FieldId::Name,
        FieldId::Surname1,
        FieldId::Surname2,
        FieldId::Phone,
        FieldId::IdentityCode,
        FieldId::Email,
    ];

    /// Identifier as used by the host's input elements.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Surname1 => "surname1",
            FieldId::Surname2 => "surname2",
            FieldId::Phone => "phone",
            FieldId::IdentityCode => "identityCode",
            FieldId::Email => "email",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A form-like input surface.
pub trait FormSurface {
    /// Current raw value of an input. Missing inputs read as empty.
    fn value(&self, field: FieldId) -> String;

    /// Clear every input.
    fn reset(&mut self);

    /// Snapshot all inputs, untrimmed.
    fn read_fields(&self) -> FormFields {
        FormFields {
            name: self.value(FieldId::Name),
            surname1: self.value(FieldId::Surname1),
            surname2: self.value(FieldId::Surname2),
            phone: self.value(FieldId::Phone),
            identity_code: self.value(FieldId::IdentityCode),
            email: self.value(FieldId::Email),
        }
    }
}

/// A single table cell holding literal display text.
///
/// Surfaces must show the content as text and never parse it as markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCell(String);

impl TextCell {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One row of literal text cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<TextCell>,
}

impl TableRow {
    pub fn texts(&self) -> Vec<&str> {
        self.cells.iter().map(TextCell::as_str).collect()
    }
}

/// A table-like output surface that only ever grows.
pub trait TableSurface {
    fn append_row(&mut self, row: TableRow);
}

/// A show/hide status element with a single text slot.
pub trait StatusSurface {
    fn show(&mut self, message: &str);
    fn hide(&mut self);
}

/// The submit event the host dispatches to the module.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the host to skip its own submission behavior.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// The three surfaces the module is attached to.
#[derive(Debug, Default)]
pub struct Surfaces<F, T, S> {
    pub form: F,
    pub table: T,
    pub status: S,
}

impl<F, T, S> Surfaces<F, T, S> {
    pub fn new(form: F, table: T, status: S) -> Self {
        Self {
            form,
            table,
            status,
        }
    }
}
