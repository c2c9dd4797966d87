//! In-memory stand-ins for the secret store, Tableau, S3, and SES.
//!
//! Every fake writes into a shared [`Calls`] log so tests can assert on what
//! was (and was not) touched.

#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use secrecy::SecretString;
use tabpdf_core::models::credentials::CredentialBundle;
use tabpdf_core::models::listing::{ViewRow, WorkbookRow};
use tabpdf_core::params::FlattenedViewParams;
use tabpdf_notify::Mailer;
use tabpdf_notify::error::NotifyError;
use tabpdf_notify::message::Email;
use tabpdf_secrets::SecretProvider;
use tabpdf_secrets::error::SecretsError;
use tabpdf_storage::ObjectSink;
use tabpdf_storage::error::StorageError;
use tabpdf_tableau::error::TableauError;
use tabpdf_tableau::{Connector, DashboardSession};

#[derive(Debug, Default)]
pub struct Calls {
    pub secret_ids: Vec<String>,
    pub sign_ins: usize,
    pub sign_outs: usize,
    pub listings: Vec<&'static str>,
    /// (endpoint, id, query string)
    pub renders: Vec<(&'static str, String, String)>,
    /// (bucket, key, body)
    pub stored: Vec<(String, String, Vec<u8>)>,
    /// (bucket, key, expiry)
    pub presigned: Vec<(String, String, Duration)>,
    pub sent: Vec<Email>,
}

#[derive(Clone, Default)]
pub struct Recorder(Arc<Mutex<Calls>>);

impl Recorder {
    pub fn calls(&self) -> MutexGuard<'_, Calls> {
        self.0.lock().unwrap()
    }
}

pub fn bundle() -> CredentialBundle {
    CredentialBundle {
        server: "https://tableau.example.com".to_string(),
        api_version: "3.19".to_string(),
        username: "report-bot".to_string(),
        password: SecretString::new("pw".into()),
        site_name: "Analytics".to_string(),
        site_url: "analytics".to_string(),
    }
}

pub fn views() -> Vec<ViewRow> {
    vec![ViewRow {
        id: "view-42".to_string(),
        name: "Sales Overview".to_string(),
        view_url_name: "SalesOverview".to_string(),
        content_url: "Superstore/sheets/SalesOverview".to_string(),
        workbook_id: Some("wb-7".to_string()),
        workbook_name: Some("Superstore".to_string()),
    }]
}

pub fn workbooks() -> Vec<WorkbookRow> {
    vec![WorkbookRow {
        id: "wb-7".to_string(),
        name: "Superstore".to_string(),
        content_url: "Superstore".to_string(),
    }]
}

pub struct FakeSecrets {
    pub calls: Recorder,
    pub fail: bool,
}

impl SecretProvider for FakeSecrets {
    async fn credentials(&self, secret_id: &str) -> Result<CredentialBundle, SecretsError> {
        self.calls.calls().secret_ids.push(secret_id.to_string());
        if self.fail {
            return Err(SecretsError::GetSecretValue(
                "ResourceNotFoundException: secret not found".to_string(),
            ));
        }
        Ok(bundle())
    }
}

#[derive(Clone)]
pub struct FakeTableau {
    pub calls: Recorder,
    pub fail_sign_in: bool,
    pub fail_render: bool,
    pub fail_sign_out: bool,
}

impl FakeTableau {
    pub fn new(calls: Recorder) -> Self {
        Self {
            calls,
            fail_sign_in: false,
            fail_render: false,
            fail_sign_out: false,
        }
    }
}

fn api_error(status: u16, message: &str) -> TableauError {
    TableauError::Api {
        status,
        url: "https://tableau.example.com".to_string(),
        message: message.to_string(),
    }
}

impl Connector for FakeTableau {
    type Session = FakeTableau;

    async fn sign_in(&self, _creds: &CredentialBundle) -> Result<FakeTableau, TableauError> {
        self.calls.calls().sign_ins += 1;
        if self.fail_sign_in {
            return Err(api_error(401, "401001 Signin Error"));
        }
        Ok(self.clone())
    }
}

impl DashboardSession for FakeTableau {
    async fn list_views(&self) -> Result<Vec<ViewRow>, TableauError> {
        self.calls.calls().listings.push("views");
        Ok(views())
    }

    async fn list_workbooks(&self) -> Result<Vec<WorkbookRow>, TableauError> {
        self.calls.calls().listings.push("workbooks");
        Ok(workbooks())
    }

    async fn view_pdf(&self, view_id: &str, params: &FlattenedViewParams) -> Result<Vec<u8>, TableauError> {
        self.calls
            .calls()
            .renders
            .push(("view", view_id.to_string(), params.query_string()));
        if self.fail_render {
            return Err(api_error(500, "render failed"));
        }
        Ok(b"%PDF view".to_vec())
    }

    async fn workbook_pdf(
        &self,
        workbook_id: &str,
        params: &FlattenedViewParams,
    ) -> Result<Vec<u8>, TableauError> {
        self.calls
            .calls()
            .renders
            .push(("workbook", workbook_id.to_string(), params.query_string()));
        if self.fail_render {
            return Err(api_error(500, "render failed"));
        }
        Ok(b"%PDF workbook".to_vec())
    }

    async fn sign_out(self) -> Result<(), TableauError> {
        self.calls.calls().sign_outs += 1;
        if self.fail_sign_out {
            return Err(api_error(500, "sign-out failed"));
        }
        Ok(())
    }
}

pub struct FakeSink {
    pub calls: Recorder,
    pub fail: bool,
}

impl ObjectSink for FakeSink {
    async fn store_pdf(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
        if self.fail {
            return Err(StorageError::PutObject("AccessDenied".to_string()));
        }
        self.calls
            .calls()
            .stored
            .push((bucket.to_string(), key.to_string(), body));
        Ok(())
    }

    async fn signed_url(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, StorageError> {
        if self.fail {
            return Err(StorageError::Presign("no credentials".to_string()));
        }
        self.calls
            .calls()
            .presigned
            .push((bucket.to_string(), key.to_string(), expires_in));
        Ok(format!(
            "https://{bucket}.s3.us-east-1.amazonaws.com/{key}?X-Amz-Expires={}",
            expires_in.as_secs()
        ))
    }
}

pub struct FakeMailer {
    pub calls: Recorder,
    pub reject: Vec<String>,
}

impl Mailer for FakeMailer {
    async fn send(&self, email: &Email) -> Result<(), NotifyError> {
        self.calls.calls().sent.push(email.clone());
        if self.reject.contains(&email.to) {
            return Err(NotifyError::SendEmail(format!(
                "MessageRejected: {}",
                email.to
            )));
        }
        Ok(())
    }
}
