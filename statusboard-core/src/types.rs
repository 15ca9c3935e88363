//! Domain types for dashboard pages.
//!
//! A [`Table`] is an ordered sequence of rows; the first row is the header by
//! convention. Cells are [`HtmlText`], so module state may mix untrusted text
//! with pre-composed safe markup (the index page's link cells). A [`Page`] is
//! built fresh on every publish cycle and discarded once written.

use crate::html::HtmlText;

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// A single row of table cells, each escaped individually on render.
pub type TableRow = Vec<HtmlText>;

/// Tabular module state. First row is the header; an empty table is skipped
/// entirely by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn new(rows: Vec<TableRow>) -> Self {
        Table { rows }
    }

    /// Build a table from anything cell-convertible. Mostly a test and
    /// collaborator convenience.
    pub fn from_rows<R, C, T>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = T>,
        T: Into<HtmlText>,
    {
        Table {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The header row, if any.
    pub fn header(&self) -> Option<&TableRow> {
        self.rows.first()
    }

    /// All rows after the header.
    pub fn body(&self) -> &[TableRow] {
        if self.rows.is_empty() {
            &[]
        } else {
            &self.rows[1..]
        }
    }
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// One dashboard document, assembled per publish cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    /// Background color as 6 hex digits, no `#`.
    pub background: String,
    pub tables: Vec<Table>,
    /// Free text; newlines become `<br/>` on render.
    pub description: String,
    /// Output filename override (without extension). Defaults to the title.
    pub filename: Option<String>,
    /// Whether to emit the "Return to Index" link. False on the index itself.
    pub back_link: bool,
}

impl Page {
    /// Fixed palette color for dashboard pages.
    pub const DASHBOARD_BACKGROUND: &'static str = "DCDCDC";

    /// A module dashboard page with the standard palette and a back link.
    pub fn dashboard(
        title: impl Into<String>,
        tables: Vec<Table>,
        description: impl Into<String>,
    ) -> Self {
        Page {
            title: title.into(),
            background: Self::DASHBOARD_BACKGROUND.to_string(),
            tables,
            description: description.into(),
            filename: None,
            back_link: true,
        }
    }

    /// The top-level index page: fixed `index` filename, no back link.
    pub fn index(title: impl Into<String>, tables: Vec<Table>) -> Self {
        Page {
            title: title.into(),
            background: Self::DASHBOARD_BACKGROUND.to_string(),
            tables,
            description: String::new(),
            filename: Some("index".to_string()),
            back_link: false,
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Filename (without extension) the page is written under.
    pub fn output_name(&self) -> &str {
        self.filename.as_deref().unwrap_or(&self.title)
    }
}

// ---------------------------------------------------------------------------
// Channel roster
// ---------------------------------------------------------------------------

/// One channel participant with their privilege level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chatter {
    pub name: String,
    pub level: String,
}

impl Chatter {
    pub fn new(name: impl Into<String>, level: impl Into<String>) -> Self {
        Chatter {
            name: name.into(),
            level: level.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_has_no_header_or_body() {
        let table = Table::default();
        assert!(table.is_empty());
        assert!(table.header().is_none());
        assert!(table.body().is_empty());
    }

    #[test]
    fn header_only_table_has_empty_body() {
        let table = Table::from_rows([["A", "B"]]);
        assert!(!table.is_empty());
        assert_eq!(table.header().unwrap().len(), 2);
        assert!(table.body().is_empty());
    }

    #[test]
    fn body_excludes_the_header_row() {
        let table = Table::from_rows([["H1", "H2"], ["a", "b"], ["c", "d"]]);
        assert_eq!(table.body().len(), 2);
    }

    #[test]
    fn page_output_name_defaults_to_title() {
        let page = Page::dashboard("UpTime", vec![], "d");
        assert_eq!(page.output_name(), "UpTime");
    }

    #[test]
    fn page_output_name_honors_override() {
        let page = Page::dashboard("Chatters", vec![], "").with_filename("chatters");
        assert_eq!(page.output_name(), "chatters");
    }

    #[test]
    fn index_page_has_no_back_link() {
        let page = Page::index("MyBot", vec![]);
        assert!(!page.back_link);
        assert_eq!(page.output_name(), "index");
    }
}
