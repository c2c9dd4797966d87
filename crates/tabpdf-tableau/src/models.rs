//! JSON payloads of the Tableau REST API.
//!
//! Tableau returns pagination counters as strings and omits list wrappers'
//! inner arrays when a page is empty, hence the defaults below.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tabpdf_core::models::listing::{ViewRow, WorkbookRow};

use crate::error::TableauError;

#[derive(Debug, Serialize)]
pub struct SignInRequest<'a> {
    pub credentials: SignInCredentials<'a>,
}

#[derive(Debug, Serialize)]
pub struct SignInCredentials<'a> {
    pub name: &'a str,
    pub password: &'a str,
    pub site: SiteSelector<'a>,
}

#[derive(Debug, Serialize)]
pub struct SiteSelector<'a> {
    #[serde(rename = "contentUrl")]
    pub content_url: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct SignInResponse {
    pub credentials: SessionCredentials,
}

#[derive(Debug, Deserialize)]
pub struct SessionCredentials {
    pub token: String,
    pub site: SiteRef,
}

#[derive(Debug, Deserialize)]
pub struct SiteRef {
    pub id: String,
    #[serde(rename = "contentUrl", default)]
    pub content_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page_number: String,
    pub page_size: String,
    pub total_available: String,
}

impl Pagination {
    pub fn total(&self) -> Result<usize, TableauError> {
        self.total_available.parse().map_err(|_| {
            TableauError::InvalidResponse(format!(
                "totalAvailable is not a number: {:?}",
                self.total_available
            ))
        })
    }
}

/// One page of a list endpoint.
pub trait Paged: DeserializeOwned {
    type Item;

    fn into_page(self) -> (Pagination, Vec<Self::Item>);
}

#[derive(Debug, Deserialize)]
pub struct ViewsResponse {
    pub pagination: Pagination,
    #[serde(default)]
    pub views: ViewList,
}

#[derive(Debug, Default, Deserialize)]
pub struct ViewList {
    #[serde(default)]
    pub view: Vec<ViewItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub content_url: String,
    #[serde(default)]
    pub view_url_name: String,
    #[serde(default)]
    pub workbook: Option<WorkbookRef>,
}

#[derive(Debug, Deserialize)]
pub struct WorkbookRef {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl From<ViewItem> for ViewRow {
    fn from(item: ViewItem) -> Self {
        let (workbook_id, workbook_name) = match item.workbook {
            Some(wb) => (Some(wb.id), wb.name),
            None => (None, None),
        };
        ViewRow {
            id: item.id,
            name: item.name,
            view_url_name: item.view_url_name,
            content_url: item.content_url,
            workbook_id,
            workbook_name,
        }
    }
}

impl Paged for ViewsResponse {
    type Item = ViewRow;

    fn into_page(self) -> (Pagination, Vec<ViewRow>) {
        let rows = self.views.view.into_iter().map(ViewRow::from).collect();
        (self.pagination, rows)
    }
}

#[derive(Debug, Deserialize)]
pub struct WorkbooksResponse {
    pub pagination: Pagination,
    #[serde(default)]
    pub workbooks: WorkbookList,
}

#[derive(Debug, Default, Deserialize)]
pub struct WorkbookList {
    #[serde(default)]
    pub workbook: Vec<WorkbookItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkbookItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub content_url: String,
}

impl From<WorkbookItem> for WorkbookRow {
    fn from(item: WorkbookItem) -> Self {
        WorkbookRow {
            id: item.id,
            name: item.name,
            content_url: item.content_url,
        }
    }
}

impl Paged for WorkbooksResponse {
    type Item = WorkbookRow;

    fn into_page(self) -> (Pagination, Vec<WorkbookRow>) {
        let rows = self
            .workbooks
            .workbook
            .into_iter()
            .map(WorkbookRow::from)
            .collect();
        (self.pagination, rows)
    }
}

/// Error envelope: `{"error": {"summary", "detail", "code"}}`.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub detail: String,
}
