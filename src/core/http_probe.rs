use crate::core::{Probe, ProbeOutcome, ProbeRequest};
use crate::utils::error::Result;
use reqwest::Client;
use serde_json::Value;
use std::error::Error as StdError;

const USER_AGENT: &str = concat!("fn-probe/", env!("CARGO_PKG_VERSION"));

/// `Probe` backed by a reqwest client.
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    pub fn new() -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Probe for HttpProbe {
    async fn probe(&self, request: &ProbeRequest) -> ProbeOutcome {
        let mut builder = self.client.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        tracing::debug!("Sending GET {}", request.url);
        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("Request did not complete (timeout: {})", e.is_timeout());
                return ProbeOutcome::Failure {
                    status: e.status().map(|s| s.as_u16()),
                    body: None,
                    message: error_chain(&e),
                };
            }
        };

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                return ProbeOutcome::Failure {
                    status: Some(status.as_u16()),
                    body: None,
                    message: error_chain(&e),
                };
            }
        };
        let body = decode_body(&bytes);

        if status.is_success() {
            ProbeOutcome::Success {
                status: status.as_u16(),
                body: body.unwrap_or(Value::Null),
            }
        } else {
            ProbeOutcome::Failure {
                status: Some(status.as_u16()),
                body,
                message: format!("Request failed with status code {}", status.as_u16()),
            }
        }
    }
}

/// Empty bodies decode to `None`; anything that is not JSON is kept as a string.
pub fn decode_body(bytes: &[u8]) -> Option<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    match serde_json::from_slice(bytes) {
        Ok(value) => Some(value),
        Err(_) => Some(Value::String(String::from_utf8_lossy(bytes).into_owned())),
    }
}

fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
