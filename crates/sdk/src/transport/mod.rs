//! Transport layer for the Shopify client.

pub mod http;

pub use http::HttpTransport;
