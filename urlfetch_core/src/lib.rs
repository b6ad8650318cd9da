// Urlfetch Core Library
// Scheme-validated asynchronous GET with success/error callbacks

pub mod error;
pub mod fetcher;
pub mod transport;

// Re-exports
pub use error::{FetchError, FetchResult, SCHEME_REJECTED_MESSAGE};
pub use fetcher::{allowed_scheme, Callback, Fetcher};
pub use transport::{HttpTransport, ReqwestTransport};
