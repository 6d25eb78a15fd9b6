use serde_json::Value;

use crate::query::{QueryString, Unit};
use crate::{ClientError, Result};

/// The vendor's documented endpoint, used when no base URL is given.
pub static DEFAULT_BASE_URL: &str = "https://app.zipcodebase.com/api/v1";

static HEADER_API_KEY: &str = "apikey";
static HEADER_CONTENT_TYPE: &str = "Content-Type";

static DEFAULT_COUNTRY: &str = "US";
const DEFAULT_LIMIT: u32 = 100;

/// An outbound request described as plain data. Built fresh per call;
/// the method is always `GET`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Executes a single HTTP round-trip. Implementations map their own
/// failures to `ClientError::Transport` and never panic.
pub trait HttpTransport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse>;
}

/// Default transport backed by `reqwest::blocking`. The inner client's
/// connection pool is the only state shared between calls.
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for ReqwestTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let mut builder = self.client.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let response = builder
            .send()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

/// Client for the Zipcodebase postal code API.
///
/// Holds the API key and base URL set at construction and carries no other
/// state between calls. Every operation issues exactly one GET through the
/// shared executor and resolves to either the decoded JSON payload or a
/// `ClientError` value; success payloads are returned as opaque
/// `serde_json::Value` trees, unvalidated and unshaped.
pub struct Client {
    base_url: String,
    api_key: String,
    transport: Box<dyn HttpTransport>,
}

impl Client {
    /// Create a client against the vendor's documented endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(DEFAULT_BASE_URL),
            api_key: api_key.into(),
            transport: Box::new(ReqwestTransport::new()),
        }
    }

    /// Point the client at a different base URL. The URL is normalized to
    /// end with exactly one `/` before paths are appended.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = normalize_base_url(base_url);
        self
    }

    /// Swap the HTTP transport, e.g. for a stub in tests.
    pub fn with_transport(mut self, transport: Box<dyn HttpTransport>) -> Self {
        self.transport = transport;
        self
    }

    /// Location information for a comma-separated list of postal codes.
    pub fn postal_code_info(&self, codes: &str, country: Option<&str>) -> Result<Value> {
        let query = QueryString::new()
            .append("codes", codes)
            .append("country", country.unwrap_or(DEFAULT_COUNTRY));
        self.request("search", &query)
    }

    /// Distance from `code` to each postal code in `compare` (comma-separated,
    /// max 100 values, all within the same country).
    pub fn calculate_distance(
        &self,
        code: &str,
        compare: &str,
        country: Option<&str>,
        unit: Option<Unit>,
    ) -> Result<Value> {
        let query = QueryString::new()
            .append("code", code)
            .append("compare", compare)
            .append("country", country.unwrap_or(DEFAULT_COUNTRY))
            .append("unit", unit.unwrap_or_default());
        self.request("distance", &query)
    }

    /// Postal codes within `radius` of `code`. Max radius 500.
    pub fn codes_within_radius(
        &self,
        code: &str,
        radius: u32,
        country: Option<&str>,
        unit: Option<Unit>,
    ) -> Result<Value> {
        let query = QueryString::new()
            .append("code", code)
            .append("radius", radius)
            .append("country", country.unwrap_or(DEFAULT_COUNTRY))
            .append("unit", unit.unwrap_or_default());
        self.request("radius", &query)
    }

    /// Postal codes within `distance` of any of the given comma-separated
    /// codes. Max distance 500.
    pub fn codes_within_distance(
        &self,
        codes: &str,
        distance: u32,
        country: Option<&str>,
        unit: Option<Unit>,
    ) -> Result<Value> {
        let query = QueryString::new()
            .append("codes", codes)
            .append("distance", distance)
            .append("country", country.unwrap_or(DEFAULT_COUNTRY))
            .append("unit", unit.unwrap_or_default());
        self.request("match", &query)
    }

    /// Postal codes for a city. `state_name` narrows the search to one
    /// province and is left out of the query when `None`.
    pub fn codes_by_city(
        &self,
        city: &str,
        country: Option<&str>,
        state_name: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Value> {
        let query = QueryString::new()
            .append("city", city)
            .append("country", country.unwrap_or(DEFAULT_COUNTRY))
            .append_opt("state_name", state_name)
            .append("limit", limit.unwrap_or(DEFAULT_LIMIT));
        self.request("code/city", &query)
    }

    /// Postal codes for a state/province. Province names for a country can
    /// be retrieved with `states_by_country`.
    pub fn codes_by_state(
        &self,
        state_name: &str,
        country: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Value> {
        let query = QueryString::new()
            .append("state_name", state_name)
            .append("country", country.unwrap_or(DEFAULT_COUNTRY))
            .append("limit", limit.unwrap_or(DEFAULT_LIMIT));
        self.request("code/state", &query)
    }

    /// The list of states/provinces for a country.
    pub fn states_by_country(&self, country: Option<&str>) -> Result<Value> {
        let query = QueryString::new().append("country", country.unwrap_or(DEFAULT_COUNTRY));
        self.request("country/province", &query)
    }

    /// Remaining request credits for the account.
    pub fn credits(&self) -> Result<Value> {
        self.request("status", &QueryString::new())
    }

    /// Compose the endpoint URL and run the shared GET executor.
    fn request(&self, path: &str, query: &QueryString) -> Result<Value> {
        let mut url = format!("{}{}", self.base_url, path);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.build());
        }
        let request = HttpRequest {
            method: "GET".to_string(),
            url,
            headers: vec![
                (HEADER_API_KEY.to_string(), self.api_key.clone()),
                (HEADER_CONTENT_TYPE.to_string(), "application/json".to_string()),
            ],
        };
        let response = self.transport.execute(&request)?;
        self.handle_response(response)
    }

    /// A 200 body is decoded as JSON; any other status carries the body
    /// through as literal text, even when it happens to be JSON.
    fn handle_response(&self, response: HttpResponse) -> Result<Value> {
        if response.status == 200 {
            serde_json::from_str(&response.body).map_err(|e| ClientError::Decode(e.to_string()))
        } else {
            Err(ClientError::Remote {
                status: response.status,
                body: response.body,
            })
        }
    }
}

/// Trim any trailing slashes, then add exactly one.
fn normalize_base_url(base_url: &str) -> String {
    format!("{}/", base_url.trim_end_matches('/'))
}
