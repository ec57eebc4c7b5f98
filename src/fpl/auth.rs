//! Authenticated FPL access: the login flow and session reuse.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{ACCEPT_LANGUAGE, REFERER};
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{info, warn};

use crate::config::{
    Config, Credentials, AUTH_SESSION_TTL, FPL_API_BASE_URL, FPL_LOGIN_URL, LOGIN_APP,
    LOGIN_REDIRECT_URI, REQUEST_TIMEOUT, USER_AGENT,
};
use crate::error::{FplError, Result};

/// A logged-in session: a cookie-carrying client and its login time.
#[derive(Clone)]
struct AuthSession {
    client: Client,
    obtained_at: Instant,
}

/// Manages the session lifecycle for authenticated `entry/` endpoints.
///
/// Sessions are cached for [`AUTH_SESSION_TTL`] and shared across calls.
/// A call that finds its cached session rejected discards it and logs in
/// again exactly once before giving up.
pub struct Authenticator {
    credentials: Option<Credentials>,
    login_url: Url,
    api_base: String,
    session_ttl: Duration,
    session: Mutex<Option<AuthSession>>,
}

impl Authenticator {
    /// Authenticator against the production FPL endpoints.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_urls(config, FPL_LOGIN_URL, FPL_API_BASE_URL)
    }

    /// Authenticator against alternate endpoints.
    pub fn with_urls(config: &Config, login_url: &str, api_base: impl Into<String>) -> Result<Self> {
        Self::with_urls_and_ttl(config, login_url, api_base, AUTH_SESSION_TTL)
    }

    /// Authenticator with an explicit session TTL.
    pub fn with_urls_and_ttl(
        config: &Config,
        login_url: &str,
        api_base: impl Into<String>,
        session_ttl: Duration,
    ) -> Result<Self> {
        let login_url = Url::parse(login_url)
            .map_err(|e| FplError::config(format!("invalid login URL: {e}")))?;
        Ok(Authenticator {
            credentials: config.credentials(),
            login_url,
            api_base: api_base.into(),
            session_ttl,
            session: Mutex::new(None),
        })
    }

    /// Whether email and password are configured.
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// GET an authenticated endpoint as parsed JSON.
    ///
    /// Reuses the cached session while it is younger than the session TTL.
    /// A failure on a cached session triggers one re-login and one retry;
    /// a failure right after a fresh login is final and drops the session.
    pub async fn fetch(&self, endpoint: &str) -> Result<Value> {
        if let Some(session) = self.current_session() {
            match self.session_get(&session, endpoint).await {
                Ok(data) => return Ok(data),
                Err(err) => {
                    warn!(endpoint, error = %err, "cached session rejected, re-authenticating");
                    self.discard_session();
                }
            }
        }

        let session = self.login().await?;
        self.store_session(session.clone());

        match self.session_get(&session, endpoint).await {
            Ok(data) => Ok(data),
            Err(err) => {
                self.discard_session();
                Err(err)
            }
        }
    }

    /// Run the login flow and return a fresh session.
    ///
    /// Mirrors the official web client: prime a cookie jar from the login
    /// page, echo the `csrftoken` cookie into the form, then POST the
    /// credentials.
    async fn login(&self) -> Result<AuthSession> {
        let credentials = self.credentials.as_ref().ok_or_else(|| {
            FplError::config("FPL_EMAIL and FPL_PASSWORD must be set for authenticated endpoints")
        })?;

        let jar = Arc::new(Jar::default());
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_provider(Arc::clone(&jar))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        // Prime the jar; a missing csrftoken is tolerated below.
        client
            .get(self.login_url.clone())
            .header(ACCEPT_LANGUAGE, "en")
            .send()
            .await?;

        let csrf_token =
            cookie_value(jar.as_ref(), &self.login_url, "csrftoken").unwrap_or_default();

        let form = [
            ("login", credentials.email.as_str()),
            ("password", credentials.password.as_str()),
            ("app", LOGIN_APP),
            ("redirect_uri", LOGIN_REDIRECT_URI),
            ("csrfmiddlewaretoken", csrf_token.as_str()),
        ];

        let response = client
            .post(self.login_url.clone())
            .header(ACCEPT_LANGUAGE, "en")
            .header(REFERER, self.login_url.as_str())
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !(status.is_success() || status.is_redirection()) {
            return Err(FplError::Authentication {
                status: status.to_string(),
            });
        }

        info!(%status, "FPL login succeeded");
        Ok(AuthSession {
            client,
            obtained_at: Instant::now(),
        })
    }

    async fn session_get(&self, session: &AuthSession, endpoint: &str) -> Result<Value> {
        let url = format!("{}/{}", self.api_base, endpoint);
        let response = session.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FplError::RemoteFetch {
                status: status.to_string(),
                endpoint: endpoint.to_string(),
            });
        }
        Ok(response.json().await?)
    }

    fn current_session(&self) -> Option<AuthSession> {
        let guard = self.session.lock().unwrap();
        guard
            .as_ref()
            .filter(|s| s.obtained_at.elapsed() < self.session_ttl)
            .cloned()
    }

    fn store_session(&self, session: AuthSession) {
        *self.session.lock().unwrap() = Some(session);
    }

    fn discard_session(&self) {
        *self.session.lock().unwrap() = None;
    }
}

/// Look up a cookie by name for `url` in the jar.
fn cookie_value(jar: &Jar, url: &Url, name: &str) -> Option<String> {
    let header = jar.cookies(url)?;
    let raw = header.to_str().ok()?;
    raw.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}
