// src/net.rs
// One blocking HTTP(S) GET for the sheet export.

use std::fmt;
use std::time::Duration;

use crate::config::consts::{FETCH_TIMEOUT_SECS, USER_AGENT};

#[derive(Debug)]
pub enum FetchError {
    /// Server answered, but not with a 2xx.
    Status(u16, String),
    /// DNS, TLS, connect, timeout, body decode...
    Transport(reqwest::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Status(code, url) => write!(f, "HTTP error: {} {}", code, url),
            FetchError::Transport(e) => write!(f, "request failed: {}", e),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Transport(e) => Some(e),
            FetchError::Status(..) => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self { FetchError::Transport(e) }
}

/// GET `url` and return the body as text.
pub fn http_get(url: &str) -> Result<String, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()?;

    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16(), s!(url)));
    }
    Ok(resp.text()?)
}
