use reqwest::{Client, Response};
use secrecy::{ExposeSecret, SecretString};
use tabpdf_core::models::credentials::CredentialBundle;
use tracing::{debug, info};

use crate::error::TableauError;
use crate::models::{ErrorEnvelope, SignInCredentials, SignInRequest, SignInResponse, SiteSelector};
use crate::session::{Connector, TableauSession};

/// Header carrying the session token on every authenticated request.
pub const AUTH_HEADER: &str = "X-Tableau-Auth";

/// Entry point to the Tableau REST API. Holds only the HTTP client; each
/// sign-in yields an independent [`TableauSession`].
#[derive(Clone, Default)]
pub struct TableauClient {
    http: Client,
}

impl TableauClient {
    pub fn new(http: Client) -> Self {
        Self { http }
    }

    /// Sign in with username/password against the bundle's site.
    pub async fn sign_in(&self, creds: &CredentialBundle) -> Result<TableauSession, TableauError> {
        let api_base = creds.api_base();
        info!(
            server = %creds.server,
            site = %creds.site_name,
            username = %creds.username,
            "connecting to tableau"
        );

        let body = SignInRequest {
            credentials: SignInCredentials {
                name: &creds.username,
                password: creds.password.expose_secret(),
                site: SiteSelector {
                    content_url: &creds.site_url,
                },
            },
        };

        let response = self
            .http
            .post(format!("{api_base}/auth/signin"))
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&body)
            .send()
            .await?;
        let response = check_status(response).await?;

        let signed_in: SignInResponse = response.json().await?;
        let credentials = signed_in.credentials;
        if credentials.token.is_empty() {
            return Err(TableauError::InvalidResponse(
                "sign-in returned an empty token".to_string(),
            ));
        }

        debug!(site_id = %credentials.site.id, "signed in");

        Ok(TableauSession::new(
            self.http.clone(),
            api_base,
            SecretString::new(credentials.token.into()),
            credentials.site.id,
        ))
    }
}

impl Connector for TableauClient {
    type Session = TableauSession;

    async fn sign_in(&self, creds: &CredentialBundle) -> Result<TableauSession, TableauError> {
        TableauClient::sign_in(self, creds).await
    }
}

/// Pass successful responses through; turn anything else into
/// [`TableauError::Api`], preferring Tableau's own error summary.
pub(crate) async fn check_status(response: Response) -> Result<Response, TableauError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "could not read error response body".to_string());

    let message = match serde_json::from_str::<ErrorEnvelope>(&body) {
        Ok(envelope) => format!(
            "{} {}: {}",
            envelope.error.code, envelope.error.summary, envelope.error.detail
        ),
        Err(_) => body,
    };

    Err(TableauError::Api {
        status: status.as_u16(),
        url,
        message,
    })
}
