//! HTTP transport for the Apps Script backend
//!
//! One fixed URL serves every logical operation; the endpoint discriminator
//! travels as a query parameter (GET) or a JSON body field (POST).
//!
//! The backend answers the first request with a redirect stub whose body is
//! unusable, so automatic redirect following is disabled and the identical
//! request is explicitly re-issued once against the redirect target. This is
//! a compensation for that specific backend, not a general HTTP feature.

use anyhow::{Context, Result};
use reqwest::blocking::{Client, Response};
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use serde_json::{Map, Value};
use url::Url;

use crate::domain::result::{Error, Result as CoreResult};
use crate::domain::ApiResponse;
use crate::ports::{ApiRequest, Method, Transport};

/// Blocking HTTP transport over the single backend URL
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
    api_url: Url,
}

impl HttpTransport {
    /// Create a transport for the given backend URL.
    pub fn new(api_url: &str) -> Result<Self> {
        let url = Url::parse(api_url)
            .with_context(|| format!("Invalid backend URL: {}", api_url))?;

        // No timeout: Apps Script cold starts can take a long while, and the
        // contract has no timeout policy. Redirects are handled by hand.
        let client = Client::builder()
            .redirect(Policy::none())
            .timeout(None)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_url: url,
        })
    }

    /// Build the request URL and (for POST) the body with the endpoint tag
    /// injected.
    fn prepare(&self, request: &ApiRequest) -> CoreResult<(Url, Option<Value>)> {
        match request.method {
            Method::Get => {
                let mut url = self.api_url.clone();
                {
                    let mut pairs = url.query_pairs_mut();
                    pairs.append_pair("endpoint", request.endpoint.as_str());
                    if let Some(Value::Object(fields)) = &request.data {
                        for (key, value) in fields {
                            match value {
                                Value::Null => {}
                                Value::String(s) => {
                                    pairs.append_pair(key, s);
                                }
                                other => {
                                    pairs.append_pair(key, &other.to_string());
                                }
                            }
                        }
                    }
                }
                Ok((url, None))
            }
            Method::Post => {
                let mut body = match &request.data {
                    Some(Value::Object(fields)) => fields.clone(),
                    Some(_) => {
                        return Err(Error::transport("POST data must be a JSON object"));
                    }
                    None => Map::new(),
                };
                body.insert(
                    "endpoint".to_string(),
                    Value::String(request.endpoint.as_str().to_string()),
                );
                Ok((self.api_url.clone(), Some(Value::Object(body))))
            }
        }
    }

    fn execute(&self, url: &Url, method: Method, body: Option<&Value>) -> CoreResult<Response> {
        let builder = match method {
            Method::Get => self.client.get(url.as_str()),
            Method::Post => {
                let builder = self.client.post(url.as_str());
                match body {
                    Some(json) => builder.json(json),
                    None => builder,
                }
            }
        };

        builder.send().map_err(map_request_error)
    }

    /// Resolve the redirect target of a stub response, if there is one.
    fn redirect_target(&self, from: &Url, response: &Response) -> Option<Url> {
        let location = response.headers().get(LOCATION)?.to_str().ok()?;
        from.join(location).ok()
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &ApiRequest) -> CoreResult<ApiResponse> {
        let (url, body) = self.prepare(request)?;
        let response = self.execute(&url, request.method, body.as_ref())?;

        // Redirect stub: re-issue the identical request once against the
        // target and surface only the second body.
        if response.status().is_redirection() {
            if let Some(target) = self.redirect_target(&url, &response) {
                let followed = self.execute(&target, request.method, body.as_ref())?;
                return parse_body(followed);
            }
        }

        parse_body(response)
    }
}

/// Parse the response body as JSON regardless of HTTP status: the backend
/// always answers 200 with a `success` flag, so anything unparseable is a
/// transport failure.
fn parse_body(response: Response) -> CoreResult<ApiResponse> {
    response
        .json::<ApiResponse>()
        .map_err(|e| Error::transport(format!("Failed to parse backend response: {}", e)))
}

/// Map request errors to user-friendly messages
fn map_request_error(error: reqwest::Error) -> Error {
    if error.is_connect() {
        Error::transport("Unable to connect to the Naozi backend")
    } else {
        Error::transport(format!("Backend request failed: {}", error))
    }
}
