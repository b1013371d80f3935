//! Shared client core for the TripTales web front end.
//!
//! Everything here is rendering-agnostic: the browser shell and the native
//! test harnesses plug in their own [`transport::HttpTransport`] and
//! [`session::KeyValueStore`] implementations.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod transport;

pub use api::{ApiClient, RequestOptions};
pub use config::ClientConfig;
pub use error::{FALLBACK_ERROR_MESSAGE, RequestError};
pub use session::{KeyValueStore, MemoryStore, SessionStore, StorageError};
pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};
