//! Name → identifier lookup over a fresh site listing.
//!
//! Views are matched on their URL name, workbooks on their display name.
//! Matching is exact and case-sensitive.

use crate::error::ResolveError;
use crate::models::export::SourceKind;
use crate::models::listing::{Listed, ViewRow, WorkbookRow};

/// Return the id of the first row whose match field equals `name`.
pub fn find_id<T: Listed>(rows: &[T], kind: SourceKind, name: &str) -> Result<String, ResolveError> {
    rows.iter()
        .find(|row| row.match_name() == name)
        .map(|row| row.id().to_string())
        .ok_or_else(|| ResolveError::NotFound {
            kind,
            name: name.to_string(),
        })
}

pub fn find_view_id(rows: &[ViewRow], view_url_name: &str) -> Result<String, ResolveError> {
    find_id(rows, SourceKind::View, view_url_name)
}

pub fn find_workbook_id(rows: &[WorkbookRow], name: &str) -> Result<String, ResolveError> {
    find_id(rows, SourceKind::Workbook, name)
}
