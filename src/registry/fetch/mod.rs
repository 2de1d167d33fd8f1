//! Transport for registry documents.

pub mod http;

pub use http::{AuthHeader, HttpFetcher};
