//! # Transport
//!
//! HTTP access to the portal. Operations take any [`Fetch`] so that tests
//! can serve canned documents.

use std::{cell::OnceCell, io::Read};

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;

use crate::package::errors::TransportError;

/// A response: status code and the full body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response body.
    pub body: Vec<u8>,
}

/// Something that can perform an HTTP GET.
pub trait Fetch {
    /// Fetches `url`, whatever the status code of the response.
    fn get(&self, url: &str) -> Result<Response, TransportError>;
}

/// Fetches `url` and requires a 200 response.
///
/// # Returns
///
/// The response body on success, or [`TransportError::Status`] for any
/// other status code.
pub fn get_ok(fetch: &impl Fetch, url: &str) -> Result<Vec<u8>, TransportError> {
    log::debug!("GET {url}");
    let response = fetch.get(url)?;
    if response.status != 200 {
        return Err(TransportError::Status {
            url: url.to_string(),
            status: response.status,
        });
    }
    Ok(response.body)
}

/// A blocking HTTP client that shows download progress on standard error.
///
/// The underlying client is built on the first request, so a client that
/// cannot be built fails that request rather than the whole invocation.
#[derive(Debug, Default)]
pub struct HttpClient {
    client: OnceCell<Client>,
}

impl HttpClient {
    /// Creates the client without building it yet.
    pub fn new() -> HttpClient {
        HttpClient::default()
    }

    fn client(&self) -> Result<&Client, TransportError> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }
        let client = Client::builder()
            .user_agent(concat!("clisnarf/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(TransportError::Client)?;
        Ok(self.client.get_or_init(|| client))
    }
}

impl Fetch for HttpClient {
    fn get(&self, url: &str) -> Result<Response, TransportError> {
        let response = self
            .client()?
            .get(url)
            .send()
            .map_err(|error| TransportError::Request {
                url: url.to_string(),
                error,
            })?;
        let status = response.status().as_u16();

        // Show a byte count when the size is known, otherwise a spinner.
        let progress_bar = match response.content_length() {
            Some(length) => {
                let progress_bar = ProgressBar::new(length);
                progress_bar.set_style(
                    ProgressStyle::default_bar()
                        .template("{bar:40.white/white} {bytes}/{total_bytes} {msg}")
                        .map_err(|error| TransportError::ProgressBar(error.to_string()))?
                        .progress_chars("##-"),
                );
                progress_bar
            }
            None => ProgressBar::new_spinner(),
        };
        progress_bar.set_message(format!("Fetching {url}"));

        let mut body = Vec::new();
        progress_bar
            .wrap_read(response)
            .read_to_end(&mut body)
            .map_err(|error| TransportError::Read {
                url: url.to_string(),
                error,
            })?;
        progress_bar.finish_and_clear();

        Ok(Response { status, body })
    }
}
