//! Rows of the transient lookup table built from a site listing.

use serde::{Deserialize, Serialize};

/// A view as listed on the site, with its parent workbook flattened in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewRow {
    pub id: String,
    /// Display title.
    pub name: String,
    /// URL-safe name, the value matched during resolution.
    pub view_url_name: String,
    pub content_url: String,
    pub workbook_id: Option<String>,
    pub workbook_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkbookRow {
    pub id: String,
    pub name: String,
    pub content_url: String,
}

/// A listing row that can be looked up by name.
pub trait Listed {
    fn id(&self) -> &str;

    /// The field compared against the requested name.
    fn match_name(&self) -> &str;
}

impl Listed for ViewRow {
    fn id(&self) -> &str {
        &self.id
    }

    fn match_name(&self) -> &str {
        &self.view_url_name
    }
}

impl Listed for WorkbookRow {
    fn id(&self) -> &str {
        &self.id
    }

    fn match_name(&self) -> &str {
        &self.name
    }
}
