//! Table rendering of accepted registrations.

use crate::registry::RegistrationRecord;
use crate::surface::{TableRow, TableSurface, TextCell};

/// Build the row for a record: full name, phone, identity code, email.
pub fn record_row(record: &RegistrationRecord) -> TableRow {
    TableRow {
        cells: record.table_cells().into_iter().map(TextCell::new).collect(),
    }
}

/// Append exactly one row for `record` to the table.
pub fn append_record<T: TableSurface + ?Sized>(table: &mut T, record: &RegistrationRecord) {
    table.append_row(record_row(record));
}
