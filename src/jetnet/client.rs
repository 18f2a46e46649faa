//! Typed JETNET request wrapper.
//!
//! JETNET reports most failures inside HTTP 200 responses, so every call here runs
//! the body through [`classify_envelope`] regardless of transport status. An
//! invalid-token classification is worth exactly one re-login-and-retry cycle per
//! logical call, driven by [`ErrorRetryStrategy`]; everything else surfaces
//! immediately.

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::warn;

use crate::{
    error::{retry::ErrorRetryStrategy, upstream::UpstreamError},
    jetnet::session::{SessionManager, SharedSession},
    Error,
};

/// Upper bound on pages walked per paged call. JETNET windows (12 months of
/// flights, 10 years of history) fit comfortably; the cap keeps one logical call
/// from turning into an unbounded crawl if the upstream miscounts pages.
pub const MAX_PAGES: u32 = 10;

#[derive(Clone, Copy)]
enum Method {
    Get,
    Post,
}

/// Shared client for all JETNET endpoints.
///
/// Holds the reqwest client (which carries the configured total-request timeout)
/// and the [`SessionManager`] used for the invalid-token re-login path.
#[derive(Clone)]
pub struct JetnetClient {
    http: reqwest::Client,
    base_url: String,
    manager: SessionManager,
}

impl JetnetClient {
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        manager: SessionManager,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            manager,
        }
    }

    pub fn manager(&self) -> &SessionManager {
        &self.manager
    }

    /// `GET {base}{endpoint}/{apiToken}{suffix}`
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        session: &SharedSession,
        endpoint: &str,
        suffix: &str,
    ) -> Result<T, Error> {
        self.call(session, Method::Get, endpoint, suffix, None).await
    }

    /// `POST {base}{endpoint}/{apiToken}` with a JSON body
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        session: &SharedSession,
        endpoint: &str,
        body: &Value,
    ) -> Result<T, Error> {
        self.call(session, Method::Post, endpoint, "", Some(body))
            .await
    }

    /// Walk a `pagenumber`/`pagecount` paged endpoint, concatenating records.
    pub(crate) async fn post_paged<T, R, F>(
        &self,
        session: &SharedSession,
        endpoint: &str,
        mut body: Value,
        extract: F,
    ) -> Result<Vec<R>, Error>
    where
        T: DeserializeOwned,
        F: Fn(T) -> (Option<u32>, Vec<R>),
    {
        let mut records = Vec::new();

        for page in 1..=MAX_PAGES {
            body["pagenumber"] = json!(page);
            let response: T = self.post(session, endpoint, &body).await?;
            let (page_count, mut page_records) = extract(response);
            records.append(&mut page_records);

            if page >= page_count.unwrap_or(1) {
                break;
            }
        }

        Ok(records)
    }

    /// Execute one logical call: send, and on an invalid-token classification
    /// refresh the session and retry exactly once.
    async fn call<T: DeserializeOwned>(
        &self,
        session: &SharedSession,
        method: Method,
        endpoint: &str,
        suffix: &str,
        body: Option<&Value>,
    ) -> Result<T, Error> {
        let (bearer_token, api_token) = session.read().await.token_pair();

        let first_attempt = self
            .send_once(&bearer_token, &api_token, method, endpoint, suffix, body)
            .await;

        match first_attempt {
            Ok(value) => Ok(value),
            Err(error) => match error.to_retry_strategy() {
                ErrorRetryStrategy::ReloginAndRetry => {
                    warn!(%endpoint, "JETNET invalidated the token pair, re-logging in and retrying once");
                    self.manager.refresh(session, &api_token).await?;

                    let (bearer_token, api_token) = session.read().await.token_pair();
                    self.send_once(&bearer_token, &api_token, method, endpoint, suffix, body)
                        .await
                }
                ErrorRetryStrategy::Surface => Err(error),
            },
        }
    }

    async fn send_once<T: DeserializeOwned>(
        &self,
        bearer_token: &str,
        api_token: &str,
        method: Method,
        endpoint: &str,
        suffix: &str,
        body: Option<&Value>,
    ) -> Result<T, Error> {
        let url = format!("{}{}/{}{}", self.base_url, endpoint, api_token, suffix);

        let request = match method {
            Method::Get => self.http.get(&url),
            Method::Post => {
                let request = self.http.post(&url);
                match body {
                    Some(body) => request.json(body),
                    None => request,
                }
            }
        };

        let response = request
            .bearer_auth(bearer_token)
            .send()
            .await
            .map_err(UpstreamError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Http {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
            }
            .into());
        }

        let value: Value = response.json().await.map_err(UpstreamError::from)?;
        classify_envelope(&value)?;

        let parsed = serde_json::from_value(value)
            .map_err(|e| UpstreamError::DataShape(format!("{endpoint}: {e}")))?;

        Ok(parsed)
    }
}

/// Classify JETNET's application-level success/failure envelope.
///
/// Two shapes exist: a `responsestatus` string whose trimmed uppercase value
/// starting with `ERROR` or `INVALID` marks failure (`TOKEN` in the failing status
/// distinguishes an invalid token), and an RFC 7807 style `{title, status}` pair
/// where 401/403 or a token/unauthorized title marks the token invalid.
pub(crate) fn classify_envelope(body: &Value) -> Result<(), UpstreamError> {
    if let Some(raw) = body.get("responsestatus").and_then(Value::as_str) {
        let upper = raw.trim().to_uppercase();
        if upper.starts_with("ERROR") || upper.starts_with("INVALID") {
            if upper.contains("TOKEN") {
                return Err(UpstreamError::InvalidToken {
                    status: raw.to_string(),
                });
            }
            return Err(UpstreamError::Api {
                status: raw.to_string(),
            });
        }
        return Ok(());
    }

    let title = body.get("title").and_then(Value::as_str);
    let status = body.get("status").and_then(Value::as_u64);
    if let (Some(title), Some(status)) = (title, status) {
        let lowered = title.to_lowercase();
        if status == 401 || status == 403 || lowered.contains("token") || lowered.contains("unauthorized")
        {
            return Err(UpstreamError::InvalidToken {
                status: format!("{status} {title}"),
            });
        }
        return Err(UpstreamError::Api {
            status: format!("{status} {title}"),
        });
    }

    Ok(())
}
