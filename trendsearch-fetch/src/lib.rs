// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Trendsearch Fetch
//!
//! HTTP execution layer for the Trendsearch client: URL construction,
//! request pacing, retries with backoff, cookie replay, and the Google
//! wire-format quirks (the `)]}'` security prefix and the `batchexecute`
//! envelope).
//!
//! ## Key Types
//!
//! - [`FetchRuntime`] - Pacing + retry + timeout pipeline over a transport
//! - [`HttpTransport`] - The transport seam; [`ReqwestTransport`] in
//!   production, scripted implementations in tests
//! - [`RateLimiter`] / [`RateLimitPolicy`] - FIFO concurrency and spacing
//! - [`RetryPolicy`] - Exponential backoff with jitter
//! - [`build_url`] / [`QueryValue`] - Query-string assembly
//! - [`parse_batchexecute`] / [`extract_batchexecute_payload`] - Envelope
//!   decoding for the trending feed endpoints

pub mod batchexecute;
pub mod cookies;
pub mod prefix;
pub mod rate_limit;
pub mod retry;
pub mod transport;
pub mod url;

pub use batchexecute::{extract_batchexecute_payload, parse_batchexecute, BatchexecuteFrame};
pub use cookies::{CookieStore, MemoryCookieStore};
pub use prefix::strip_google_prefix;
pub use rate_limit::{RateLimitPolicy, RateLimiter};
pub use retry::{default_should_retry, run_with_retry, RetryPolicy};
pub use transport::{
    FetchConfig, FetchRuntime, HttpMethod, HttpTransport, OutboundRequest, RawResponse,
    ReqwestTransport, DEFAULT_USER_AGENT,
};
pub use url::{build_url, encode_form, encode_path_segment, QueryValue};
