//! Prelude module for convenient imports.
//!
//! ```ignore
//! use lockstep_core::prelude::*;
//! ```

pub use crate::{
    ContentType, Envelope, Error, ErrorPayload, HttpClient, Method, QueryParams, Request,
    RequestBuilder, Response, Result, ToQueryValue, from_json, segment, to_json,
};
