//! Client library for the Lockstep Platform API.
//!
//! One [`LockstepApi`] per session holds the credential and the transport.
//! Resource clients borrowed from it map each endpoint to a single call of
//! [`LockstepApi::send_request`], which returns an [`Envelope`]: HTTP error
//! statuses are data, only transport failures are `Err`.
//!
//! # Example
//!
//! ```ignore
//! use lockstep::prelude::*;
//!
//! let api = LockstepApi::builder(Environment::Sandbox)
//!     .api_key(std::env::var("LOCKSTEP_API_KEY")?)
//!     .app_name("billing-sync")
//!     .build()?;
//!
//! let page = api
//!     .payments()
//!     .query_payments(&SearchlightQuery::new().filter("paymentAmount gt 100").page_size(50))
//!     .await?;
//!
//! match page.into_result() {
//!     Ok(payments) => println!("{payments}"),
//!     Err(error) => eprintln!("rejected: {error}"),
//! }
//! ```

mod api;
pub mod clients;
mod client;
mod config;
mod connector;
pub mod middleware;
pub mod models;
pub mod prelude;

pub use api::{
    CallOptions, Credential, DEFAULT_TIMEOUT, Environment, LockstepApi, LockstepApiBuilder,
    NO_BODY, PRODUCTION_URL, SANDBOX_URL, SDK_TYPE, SDK_VERSION,
};
pub use client::{BoxedService, HyperClient, HyperClientBuilder, ServiceFuture};
pub use clients::{AgingReportQuery, SearchlightQuery};
pub use config::ClientConfig;

// Re-export tower for middleware composition
pub use tower;

// Re-export core types
pub use lockstep_core::{
    ContentType, DecodeFailure, Envelope, Error, ErrorPayload, HttpClient, Method, ParamLocation,
    QueryParams, QueryValue, Request, RequestBuilder, Response, Result, Segment, ToQueryValue,
    from_json, segment, set_header,
};

// Re-export http types for status codes and headers
pub use lockstep_core::{StatusCode, header};
