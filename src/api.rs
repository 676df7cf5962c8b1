//! Authenticated JSON request wrapper.
//!
//! Every page talks to the backend through this one path: cookies ride along
//! by default, bodies are JSON in and out, and failures are logged once here
//! with the URL before being handed back to the caller.

use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::http::{Method, RequestOptions, resolve};
use crate::traits::{HttpTransport, LogSink};

/// Issue a request and parse the JSON response body.
///
/// Defaults: GET, credentials included, `Content-Type: application/json`.
/// Caller headers merge over the defaults (caller wins per name); the other
/// options replace their defaults outright.
///
/// The body is parsed before the status is checked, so on a non-2xx response
/// the server's `message` field can become the error text; when that field
/// is missing or not a non-empty string the error reads
/// `HTTP <status>: <status text>`. Transport failures and unparseable bodies
/// surface as their own variants. Every failure is reported through `sink`
/// exactly once, with the URL.
pub async fn api_request<T, L>(
    transport: &T,
    sink: &L,
    url: &str,
    options: RequestOptions,
) -> Result<Value, ApiError>
where
    T: HttpTransport,
    L: LogSink,
{
    match run(transport, url, options).await {
        Ok(value) => Ok(value),
        Err(err) => {
            sink.error(
                &format!("API request failed: {}", url),
                Some(&err.to_string()),
            );
            Err(err)
        }
    }
}

async fn run<T: HttpTransport>(
    transport: &T,
    url: &str,
    options: RequestOptions,
) -> Result<Value, ApiError> {
    let response = transport.execute(url, resolve(options)).await?;
    let data: Value = serde_json::from_str(&response.body)?;
    if !response.is_ok() {
        return Err(ApiError::Status {
            status: response.status,
            message: error_message(&data, response.status, &response.status_text),
        });
    }
    Ok(data)
}

fn error_message(data: &Value, status: u16, status_text: &str) -> String {
    match data.get("message").and_then(Value::as_str) {
        Some(message) if !message.is_empty() => message.to_string(),
        _ => format!("HTTP {}: {}", status, status_text),
    }
}

/// POST `body` as JSON to `url`.
///
/// Serialization failures surface as [`ApiError::Json`] before any request
/// goes out, and nothing is logged for them.
pub async fn api_post<T, L, B>(
    transport: &T,
    sink: &L,
    url: &str,
    body: &B,
) -> Result<Value, ApiError>
where
    T: HttpTransport,
    L: LogSink,
    B: Serialize + ?Sized,
{
    let body = serde_json::to_string(body)?;
    let options = RequestOptions {
        method: Some(Method::Post),
        body: Some(body),
        ..RequestOptions::default()
    };
    api_request(transport, sink, url, options).await
}

/// DELETE `url`.
pub async fn api_delete<T, L>(transport: &T, sink: &L, url: &str) -> Result<Value, ApiError>
where
    T: HttpTransport,
    L: LogSink,
{
    let options = RequestOptions {
        method: Some(Method::Delete),
        ..RequestOptions::default()
    };
    api_request(transport, sink, url, options).await
}
