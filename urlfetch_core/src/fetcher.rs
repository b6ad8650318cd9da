// The Fetcher component - scheme-validated fire-and-forget GET with callbacks

use crate::error::FetchError;
use crate::transport::{HttpTransport, ReqwestTransport};
use log::warn;
use std::sync::Arc;
use url::Url;

/// One-shot caller-supplied callback receiving one text argument.
///
/// `FnOnce` doubles as the completion guard: a callback cannot be invoked
/// twice for the same request, the compiler rejects it.
pub type Callback = Box<dyn FnOnce(String) + Send>;

/// Returns true when the URL scheme is on the http/https allow-list.
///
/// This is a security boundary: schemes that reach into local resources
/// (file, data, platform resource bundles) must never reach the transport,
/// or a crafted URL could read arbitrary local files through this API.
pub fn allowed_scheme(url: &Url) -> bool {
    let scheme = url.scheme();
    scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
}

/// Issues asynchronous GET requests and reports each outcome through exactly
/// one of two caller-supplied callbacks.
///
/// Requests are independent: they share only the transport, and completions
/// carry no ordering guarantee relative to each other. There are no retries
/// and no timeout; every failure is terminal for its request.
pub struct Fetcher<T: HttpTransport> {
    transport: Arc<T>,
}

impl Fetcher<ReqwestTransport> {
    pub fn new() -> Self {
        Self::with_transport(ReqwestTransport::new())
    }
}

impl Default for Fetcher<ReqwestTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HttpTransport + 'static> Fetcher<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Fire-and-forget GET. Returns immediately after dispatch; on completion
    /// `on_success` receives the response body as text, or `on_error` (when
    /// present) receives a human-readable message. Failures with no error
    /// callback are logged instead. No error is ever returned synchronously.
    ///
    /// URLs with a scheme outside the http/https allow-list are rejected
    /// before any network I/O.
    pub fn get(&self, url: Url, on_success: Callback, on_error: Option<Callback>) {
        if !allowed_scheme(&url) {
            warn!("get: rejected non-http(s) URL scheme: {}", url.scheme());
            let err = FetchError::RejectedScheme(url.scheme().to_string());
            report_failure(&url, &err, on_error);
            return;
        }

        let transport = Arc::clone(&self.transport);
        tokio::spawn(async move {
            match transport.get_text(&url).await {
                Ok(body) => on_success(body),
                Err(err) => report_failure(&url, &err, on_error),
            }
        });
    }

    /// Convenience over string input: parses the URL, then follows the same
    /// contract as [`get`](Self::get). A parse failure takes the error path
    /// without any network I/O.
    pub fn get_url(&self, url: &str, on_success: Callback, on_error: Option<Callback>) {
        match Url::parse(url) {
            Ok(parsed) => self.get(parsed, on_success, on_error),
            Err(e) => {
                warn!("get: invalid URL {:?}: {}", url, e);
                let err = FetchError::InvalidUrl(e);
                if let Some(on_error) = on_error {
                    on_error(err.to_string());
                }
            }
        }
    }
}

fn report_failure(url: &Url, err: &FetchError, on_error: Option<Callback>) {
    match on_error {
        Some(on_error) => on_error(err.to_string()),
        None => warn!("get: request to {} failed: {}", url, err),
    }
}
