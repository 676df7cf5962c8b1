use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestCredentials, RequestInit, Response};

use super::js_error_message;
use crate::error::TransportError;
use crate::http::{Credentials, HttpRequest, HttpResponse};
use crate::traits::HttpTransport;

/// fetch-backed transport for the live page.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl HttpTransport for FetchTransport {
    async fn execute(&self, url: &str, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let window = web_sys::window().ok_or_else(|| TransportError("no window".to_string()))?;

        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        init.set_credentials(credentials(request.credentials));
        let headers = Headers::new().map_err(|err| TransportError(js_error_message(&err)))?;
        for (name, value) in &request.headers {
            headers
                .append(name, value)
                .map_err(|err| TransportError(js_error_message(&err)))?;
        }
        init.set_headers(headers.as_ref());
        if let Some(body) = &request.body {
            init.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(url, &init)
            .map_err(|err| TransportError(js_error_message(&err)))?;
        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|err| TransportError(js_error_message(&err)))?;
        let response: Response = response
            .dyn_into()
            .map_err(|_| TransportError("fetch did not produce a Response".to_string()))?;

        let text = response
            .text()
            .map_err(|err| TransportError(js_error_message(&err)))?;
        let body = JsFuture::from(text)
            .await
            .map_err(|err| TransportError(js_error_message(&err)))?
            .as_string()
            .unwrap_or_default();

        Ok(HttpResponse {
            status: response.status(),
            status_text: response.status_text(),
            body,
        })
    }
}

fn credentials(mode: Credentials) -> RequestCredentials {
    match mode {
        Credentials::Include => RequestCredentials::Include,
        Credentials::SameOrigin => RequestCredentials::SameOrigin,
        Credentials::Omit => RequestCredentials::Omit,
    }
}
