//! HTTP client layer: `IdpHttp` with bearer auth and a one-shot conflict retry.

pub mod client;
pub mod config;
pub mod options;
pub mod response;
pub(crate) mod retry;

pub use client::IdpHttp;
pub use config::HttpConfig;
pub use options::RequestOptions;
pub use response::{ApiResponse, Discard};

pub use reqwest::Method;
