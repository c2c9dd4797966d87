use thiserror::Error;

use crate::models::export::SourceKind;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("PDF source: {0} invalid, please select between View or Workbook")]
    InvalidSourceKind(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no {kind} named {name:?} is visible on this site")]
    NotFound { kind: SourceKind, name: String },
}
