//! Core types for the Lockstep Platform SDK.
//!
//! This crate holds everything that does not touch the network:
//! - [`Method`] - the platform's HTTP verbs
//! - [`Request`] and [`RequestBuilder`] - outgoing requests
//! - [`Response`] - raw transport responses
//! - [`Envelope`] and [`ErrorPayload`] - the classified result of a call
//! - [`QueryParams`] and [`ToQueryValue`] - query parameter mapping
//! - [`segment`] - path segment encoding for identifiers
//! - [`Error`] and [`Result`] - transport-level failures
//! - [`HttpClient`] - the transport boundary

mod body;
mod client;
mod envelope;
mod error;
mod method;
mod path;
pub mod prelude;
mod query;
mod request;
mod response;

pub use body::{ContentType, from_json, from_json_value, to_json};
pub use client::HttpClient;
pub use envelope::{DecodeFailure, Envelope, ErrorPayload};
pub use error::{Error, Result};
pub use method::Method;
pub use path::{Segment, segment};
pub use query::{ParamLocation, QueryParams, QueryValue, ToQueryValue};
pub use request::{Request, RequestBuilder, set_header};
pub use response::Response;

// Re-export http crate types for status codes and headers
pub use http::{StatusCode, header};
