// src/services/session.rs

//! Session bootstrap.
//!
//! The search API hands out an `XSRF-TOKEN` cookie on an unauthenticated
//! GET; the token must be echoed back in the `X-XSRF-TOKEN` header of every
//! search request. The server also assigns an `EURES_JVSE_SESSIONID` cookie
//! that goes into the request body and may rotate between pages.

use std::sync::Arc;

use reqwest::Client;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::config::HttpConfig;
use crate::error::{AppError, Result};

/// Cookie carrying the CSRF token, set on the bootstrap GET.
pub const XSRF_COOKIE: &str = "XSRF-TOKEN";

/// Cookie carrying the server-assigned session id.
pub const SESSION_COOKIE: &str = "EURES_JVSE_SESSIONID";

const XSRF_HEADER: HeaderName = HeaderName::from_static("x-xsrf-token");

/// A ready-to-use handle on the search API.
///
/// Holds the configured client, the shared cookie jar, and the parsed
/// endpoint URL. Created once per run and discarded at process exit.
pub struct Session {
    client: Client,
    jar: Arc<Jar>,
    api_url: Url,
}

impl Session {
    /// Bootstrap a session against the configured endpoint.
    ///
    /// Fails with [`AppError::Bootstrap`] when the initial GET does not
    /// leave an `XSRF-TOKEN` cookie in the jar.
    pub async fn bootstrap(config: &HttpConfig) -> Result<Session> {
        let api_url = Url::parse(&config.api_url)
            .map_err(|e| AppError::config(format!("invalid API URL {}: {e}", config.api_url)))?;
        let jar = Arc::new(Jar::default());

        // Unauthenticated GET to receive the XSRF-TOKEN cookie. The status
        // is irrelevant; only the cookie matters.
        let probe = Client::builder()
            .user_agent(&config.user_agent)
            .cookie_provider(Arc::clone(&jar))
            .build()?;
        probe.get(api_url.clone()).send().await?;

        let token = cookie_value(jar.as_ref(), &api_url, XSRF_COOKIE)
            .ok_or_else(|| AppError::bootstrap("no XSRF-TOKEN cookie after initial request"))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/plain, */*"),
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            XSRF_HEADER,
            HeaderValue::from_str(&token)
                .map_err(|e| AppError::bootstrap(format!("unusable XSRF token: {e}")))?,
        );

        let client = Client::builder()
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .cookie_provider(Arc::clone(&jar))
            .build()?;

        Ok(Session {
            client,
            jar,
            api_url,
        })
    }

    /// The client carrying the default headers and cookie jar.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// The parsed search endpoint.
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Current server-assigned session id, if any.
    ///
    /// Read fresh from the jar on every call since the server may rotate
    /// the cookie between pages. Absent before the first search response.
    pub fn session_id(&self) -> Option<String> {
        cookie_value(self.jar.as_ref(), &self.api_url, SESSION_COOKIE)
    }
}

/// Look up a cookie value by name for the given URL.
fn cookie_value(jar: &Jar, url: &Url, name: &str) -> Option<String> {
    let header = jar.cookies(url)?;
    let cookies = header.to_str().ok()?;
    cookies.split(';').map(str::trim).find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}
