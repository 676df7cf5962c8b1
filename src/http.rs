//! Request and response shapes handed to an [`HttpTransport`](crate::traits::HttpTransport).

/// HTTP method of an outgoing request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
}

impl Method {
    /// Wire form of the verb.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
            Method::Head => "HEAD",
        }
    }

    /// Case-insensitive parse of a verb string.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_uppercase().as_str() {
            "GET" => Some(Method::Get),
            "POST" => Some(Method::Post),
            "PUT" => Some(Method::Put),
            "DELETE" => Some(Method::Delete),
            "PATCH" => Some(Method::Patch),
            "HEAD" => Some(Method::Head),
            _ => None,
        }
    }
}

/// Cookie mode of a request, mirroring the fetch `credentials` option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Credentials {
    Include,
    SameOrigin,
    Omit,
}

impl Credentials {
    pub fn as_str(self) -> &'static str {
        match self {
            Credentials::Include => "include",
            Credentials::SameOrigin => "same-origin",
            Credentials::Omit => "omit",
        }
    }

    /// Parse the fetch-style mode string; unknown modes fall back to
    /// [`Credentials::Include`] so session cookies keep flowing.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "same-origin" => Credentials::SameOrigin,
            "omit" => Credentials::Omit,
            _ => Credentials::Include,
        }
    }
}

/// Caller-supplied overrides for a single request.
///
/// Unset fields fall back to the wrapper defaults: GET, cookies included,
/// a JSON content type, no body.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    pub method: Option<Method>,
    /// Extra headers, merged over the defaults. Matching names (compared
    /// case-insensitively) replace the default; later entries for the same
    /// name win.
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub credentials: Option<Credentials>,
}

/// Fully resolved request handed to the transport.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub credentials: Credentials,
}

/// Raw response surface: status line plus unparsed body text.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    /// Success check with `Response.ok` semantics (status 200-299).
    pub fn is_ok(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// Apply the wrapper defaults to `options`.
pub(crate) fn resolve(options: RequestOptions) -> HttpRequest {
    let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
    for (name, value) in options.headers {
        match headers
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            Some(slot) => *slot = (name, value),
            None => headers.push((name, value)),
        }
    }
    HttpRequest {
        method: options.method.unwrap_or(Method::Get),
        headers,
        body: options.body,
        credentials: options.credentials.unwrap_or(Credentials::Include),
    }
}
