//! Tower middleware for [`HyperClient`](crate::HyperClient).
//!
//! Any `tower::Layer` over [`BoxedService`](crate::BoxedService) can be added
//! with [`HyperClientBuilder::layer`](crate::HyperClientBuilder::layer); the
//! layers shipped here cover the SDK's own needs.

mod logging;

pub use logging::{LogLevel, Logging, LoggingLayer};
