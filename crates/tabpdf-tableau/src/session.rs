use std::future::Future;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tabpdf_core::models::credentials::CredentialBundle;
use tabpdf_core::models::listing::{ViewRow, WorkbookRow};
use tabpdf_core::params::FlattenedViewParams;
use tracing::{debug, info};

use crate::client::{AUTH_HEADER, check_status};
use crate::error::TableauError;
use crate::models::{Paged, ViewsResponse, WorkbooksResponse};

/// Largest page size Tableau accepts for list endpoints.
pub const PAGE_SIZE: usize = 1000;

/// View listing fields. The default set carries only the parent workbook's
/// id, so its name is requested explicitly.
pub const VIEW_FIELDS: &str = "_default_,workbook.name";

/// Opens a [`DashboardSession`] from a credential bundle.
pub trait Connector {
    type Session: DashboardSession + Send + Sync;

    fn sign_in(
        &self,
        creds: &CredentialBundle,
    ) -> impl Future<Output = Result<Self::Session, TableauError>> + Send;
}

/// An authenticated session against one site.
pub trait DashboardSession {
    /// All views visible to the signed-in user, across every page.
    fn list_views(&self) -> impl Future<Output = Result<Vec<ViewRow>, TableauError>> + Send;

    /// All workbooks visible to the signed-in user, across every page.
    fn list_workbooks(&self)
    -> impl Future<Output = Result<Vec<WorkbookRow>, TableauError>> + Send;

    /// Render a single view as PDF.
    fn view_pdf(
        &self,
        view_id: &str,
        params: &FlattenedViewParams,
    ) -> impl Future<Output = Result<Vec<u8>, TableauError>> + Send;

    /// Render every sheet of a workbook as one PDF.
    fn workbook_pdf(
        &self,
        workbook_id: &str,
        params: &FlattenedViewParams,
    ) -> impl Future<Output = Result<Vec<u8>, TableauError>> + Send;

    /// Invalidate the session token.
    fn sign_out(self) -> impl Future<Output = Result<(), TableauError>> + Send;
}

/// [`DashboardSession`] over the Tableau REST API.
#[derive(Debug)]
pub struct TableauSession {
    http: Client,
    api_base: String,
    token: SecretString,
    site_id: String,
}

impl TableauSession {
    pub fn new(http: Client, api_base: String, token: SecretString, site_id: String) -> Self {
        Self {
            http,
            api_base,
            token,
            site_id,
        }
    }

    pub fn site_id(&self) -> &str {
        &self.site_id
    }

    fn site_url(&self, path: &str) -> String {
        format!("{}/sites/{}/{path}", self.api_base, self.site_id)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, TableauError> {
        let response = self
            .http
            .get(url)
            .header(AUTH_HEADER, self.token.expose_secret())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        Ok(check_status(response).await?.json().await?)
    }

    /// Walk every page of a list endpoint. Stops on an empty page or once
    /// `totalAvailable` rows are collected.
    async fn list_all<P: Paged>(
        &self,
        resource: &str,
        fields: Option<&str>,
    ) -> Result<Vec<P::Item>, TableauError> {
        let mut rows = Vec::new();
        let mut page = 1;

        loop {
            let mut path = format!("{resource}?pageSize={PAGE_SIZE}&pageNumber={page}");
            if let Some(fields) = fields {
                path.push_str("&fields=");
                path.push_str(fields);
            }

            let (pagination, items) = self
                .get_json::<P>(&self.site_url(&path))
                .await?
                .into_page();
            let total = pagination.total()?;
            let fetched = items.len();
            rows.extend(items);

            if fetched == 0 || rows.len() >= total {
                break;
            }
            page += 1;
        }

        Ok(rows)
    }

    async fn get_pdf(&self, path: &str, params: &FlattenedViewParams) -> Result<Vec<u8>, TableauError> {
        // Params are pre-encoded; append them as-is.
        let mut url = self.site_url(path);
        let query = params.query_string();
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }

        debug!(url = %url, "requesting pdf");

        let response = self
            .http
            .get(&url)
            .header(AUTH_HEADER, self.token.expose_secret())
            .send()
            .await?;
        let bytes = check_status(response).await?.bytes().await?;
        Ok(bytes.to_vec())
    }
}

impl DashboardSession for TableauSession {
    async fn list_views(&self) -> Result<Vec<ViewRow>, TableauError> {
        let rows = self
            .list_all::<ViewsResponse>("views", Some(VIEW_FIELDS))
            .await?;
        debug!(count = rows.len(), "listed views");
        Ok(rows)
    }

    async fn list_workbooks(&self) -> Result<Vec<WorkbookRow>, TableauError> {
        let rows = self.list_all::<WorkbooksResponse>("workbooks", None).await?;
        debug!(count = rows.len(), "listed workbooks");
        Ok(rows)
    }

    async fn view_pdf(&self, view_id: &str, params: &FlattenedViewParams) -> Result<Vec<u8>, TableauError> {
        self.get_pdf(&format!("views/{view_id}/pdf"), params).await
    }

    async fn workbook_pdf(
        &self,
        workbook_id: &str,
        params: &FlattenedViewParams,
    ) -> Result<Vec<u8>, TableauError> {
        self.get_pdf(&format!("workbooks/{workbook_id}/pdf"), params)
            .await
    }

    async fn sign_out(self) -> Result<(), TableauError> {
        let response = self
            .http
            .post(format!("{}/auth/signout", self.api_base))
            .header(AUTH_HEADER, self.token.expose_secret())
            .send()
            .await?;
        check_status(response).await?;

        info!("signed out of tableau");
        Ok(())
    }
}
