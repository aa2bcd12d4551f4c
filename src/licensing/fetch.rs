use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, warn};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use url::Url;

/// Default limit on how long a license download may take.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Retrieves license text referenced by a package's `license_url`.
pub trait LicenseFetcher {
    /// Returns the body when the server answers 200 OK and `None` for any
    /// other status. Transport failures are errors.
    fn fetch(&self, url: &Url) -> Result<Option<Vec<u8>>>;
}

/// Fetches license text over HTTP(S).
pub struct HttpLicenseFetcher {
    client: Client,
}

impl HttpLicenseFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("initializing HTTP client")?;
        Ok(HttpLicenseFetcher { client })
    }
}

impl LicenseFetcher for HttpLicenseFetcher {
    fn fetch(&self, url: &Url) -> Result<Option<Vec<u8>>> {
        debug!("Retrieving license from {url}");
        let response = self
            .client
            .get(url.clone())
            .send()
            .with_context(|| format!("retrieving license from {url}"))?;
        let status = response.status();
        if status != StatusCode::OK {
            warn!("Retrieving license from {url} returned {status}");
            return Ok(None);
        }
        let body = response
            .bytes()
            .with_context(|| format!("reading license from {url}"))?;
        Ok(Some(body.to_vec()))
    }
}
