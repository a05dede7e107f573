//! HTML-producing table and status surfaces.

use super::{StatusSurface, TableRow, TableSurface};

/// Class that hides the status element, as in the page stylesheet.
const HIDDEN_CLASS: &str = "d-none";

/// Escape a string for safe inclusion in HTML text content.
///
/// Replaces the five HTML special characters with entity references so cell
/// text is always displayed literally.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Table surface that keeps rows as literal text and renders escaped markup.
#[derive(Debug, Clone, Default)]
pub struct HtmlTable {
    rows: Vec<TableRow>,
}

impl HtmlTable {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Rows as appended, with their literal text.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Render one row as a `<tr>` element.
    pub fn render_row(row: &TableRow) -> String {
        let mut html = String::from("<tr>");
        for cell in &row.cells {
            html.push_str("<td>");
            html.push_str(&escape_html(cell.as_str()));
            html.push_str("</td>");
        }
        html.push_str("</tr>");
        html
    }

    /// Render the table body.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<tbody id=\"registrations\">\n");
        for row in &self.rows {
            html.push_str("  ");
            html.push_str(&Self::render_row(row));
            html.push('\n');
        }
        html.push_str("</tbody>");
        html
    }
}

impl TableSurface for HtmlTable {
    fn append_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }
}

/// Status surface that tracks visibility and text, rendered as an alert box.
#[derive(Debug, Clone, Default)]
pub struct HtmlStatus {
    visible: bool,
    text: String,
}

impl HtmlStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn to_html(&self) -> String {
        let class = if self.visible {
            "alert alert-danger".to_string()
        } else {
            format!("alert alert-danger {}", HIDDEN_CLASS)
        };
        format!(
            "<div id=\"status\" class=\"{}\" role=\"alert\">{}</div>",
            class,
            escape_html(&self.text)
        )
    }
}

impl StatusSurface for HtmlStatus {
    fn show(&mut self, message: &str) {
        self.text = message.to_string();
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}
