use reqwest::{Client, Method};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use tracing::debug;
use url::Url;

use crate::config::{normalize_base_url, ApiKey, Config};
use crate::error::{MagnetError, Result};

const USER_AGENT: &str = concat!("magnet-cli/", env!("CARGO_PKG_VERSION"));

/// Query parameters for GET requests. Absent and empty values are never sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `key=value` unless the value is `None` or `""`.
    pub fn set<V: Into<String>>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value.map(Into::into).filter(|v| !v.is_empty()) {
            self.pairs.push((key.to_string(), value));
        }
        self
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Stateless client for the Magnet REST API. Each instance captures its key
/// and base URL at construction.
pub struct MagnetClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl MagnetClient {
    pub fn new(api_key: impl Into<String>, base_url: &str) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: normalize_base_url(base_url),
        })
    }

    /// Build a client from an already validated key and the configured base URL.
    pub fn from_config(config: &Config, api_key: &ApiKey) -> Result<Self> {
        Self::new(api_key.as_str(), &config.base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &QueryParams) -> Result<T> {
        self.request::<T, ()>(Method::GET, path, Some(query), None)
            .await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        self.request(Method::POST, path, None, Some(body)).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        self.request(Method::PUT, path, None, Some(body)).await
    }

    /// Absolute URL for a server-relative `path`, with non-empty query pairs appended.
    pub fn url(&self, path: &str, query: Option<&QueryParams>) -> Result<Url> {
        let raw = format!("{}{}", self.base_url, path);
        let mut url = Url::parse(&raw).map_err(|e| MagnetError::InvalidUrl(format!("{raw}: {e}")))?;

        if let Some(query) = query.filter(|q| !q.is_empty()) {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &query.pairs {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&QueryParams>,
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path, query)?;
        debug!(%method, %url, "sending request");

        let mut request = self
            .http
            .request(method, url)
            .header("x-api-key", &self.api_key);

        if let Some(body) = body {
            let encoded = serde_json::to_vec(body).map_err(MagnetError::Encode)?;
            request = request
                .header("Content-Type", "application/json")
                .body(encoded);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(status = status.as_u16(), bytes = text.len(), "received response");

        let parsed = parse_body(&text);

        if !status.is_success() {
            let code = status.as_u16();
            return Err(MagnetError::Api {
                status: code,
                message: error_message(code, parsed.as_ref()),
                body: parsed,
            });
        }

        // An empty or unparseable success body reads as "no content".
        let value = parsed.unwrap_or_else(|| Value::Object(Map::new()));
        serde_json::from_value(value).map_err(MagnetError::Decode)
    }
}

fn parse_body(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    serde_json::from_str(text).ok()
}

/// First human-readable field of an error body: `error`, `details`,
/// `message`, then the joined `issues` list.
fn extract_message(body: &Value) -> Option<String> {
    let text_field = |name: &str| {
        body.get(name)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    text_field("error")
        .or_else(|| text_field("details"))
        .or_else(|| text_field("message"))
        .or_else(|| {
            let issues: Vec<&str> = body
                .get("issues")?
                .as_array()?
                .iter()
                .filter_map(|issue| match issue {
                    Value::String(s) => Some(s.as_str()),
                    other => other.get("message").and_then(Value::as_str),
                })
                .filter(|s| !s.is_empty())
                .collect();
            (!issues.is_empty()).then(|| issues.join("; "))
        })
}

/// Decorate an API error message for its status code.
pub fn error_message(code: u16, body: Option<&Value>) -> String {
    let text = body
        .and_then(extract_message)
        .unwrap_or_else(|| format!("HTTP {code}"));

    match code {
        401 => format!("Unauthorized: {text} Check your API key. Set MAGNET_API_KEY."),
        403 => format!("Forbidden: {text}"),
        400 => format!("Bad request: {text}"),
        404 => format!("Not found: {text}"),
        500 => format!("Server error: {text}"),
        _ => format!("Error {code}: {text}"),
    }
}

/// Percent-encode an identifier so it stays a single path segment.
pub fn path_segment(id: &str) -> String {
    url::form_urlencoded::byte_serialize(id.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
