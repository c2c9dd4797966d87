use secrecy::SecretString;
use serde::{Deserialize, Deserializer};

/// Tableau sign-in details, as stored in the credential secret.
///
/// Lives for a single invocation. The password is never logged; `Debug`
/// prints it redacted.
#[derive(Debug, Deserialize)]
pub struct CredentialBundle {
    /// Base URL of the Tableau Server or Tableau Cloud pod, e.g.
    /// `https://prod-useast-b.online.tableau.com`.
    pub server: String,
    /// REST API version, e.g. `3.19`.
    pub api_version: String,
    pub username: String,
    #[serde(deserialize_with = "secret_string")]
    pub password: SecretString,
    pub site_name: String,
    /// Site content URL. Empty for the default site.
    pub site_url: String,
}

impl CredentialBundle {
    /// Root of the versioned REST API, without a trailing slash.
    pub fn api_base(&self) -> String {
        format!(
            "{}/api/{}",
            self.server.trim_end_matches('/'),
            self.api_version
        )
    }
}

fn secret_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SecretString, D::Error> {
    let s = String::deserialize(deserializer)?;
    Ok(SecretString::new(s.into()))
}
