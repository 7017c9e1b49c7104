//! Prelude module for convenient imports.
//!
//! ```ignore
//! use lockstep::prelude::*;
//! ```

pub use crate::{
    AgingReportQuery, CallOptions, ClientConfig, Credential, Envelope, Environment, Error,
    ErrorPayload, HttpClient, HyperClient, LockstepApi, Method, NO_BODY, QueryParams, Result,
    SearchlightQuery, StatusCode,
};
pub use serde::{Deserialize, Serialize};
