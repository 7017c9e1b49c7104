//! Connection settings of the default [`HyperClient`](crate::HyperClient).
//!
//! These shape the connection pool only. How long one platform call may take
//! belongs to the pipeline: [`LockstepApiBuilder::timeout`] sets it for every
//! call and [`CallOptions::timeout`] for a single one.
//!
//! [`LockstepApiBuilder::timeout`]: crate::LockstepApiBuilder::timeout
//! [`CallOptions::timeout`]: crate::CallOptions::timeout

use std::time::Duration;

/// Connection pool settings of the default transport.
///
/// ```
/// use std::time::Duration;
/// use lockstep::ClientConfig;
///
/// let config = ClientConfig {
///     pool_idle_per_host: 4,
///     ..ClientConfig::default()
/// };
/// assert_eq!(config.connect_timeout, Duration::from_secs(10));
/// assert!(config.exchange_timeout.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Deadline for the TCP connect to the platform host.
    pub connect_timeout: Duration,
    /// Idle keep-alive connections kept per host.
    pub pool_idle_per_host: usize,
    /// How long an idle connection stays in the pool.
    pub pool_idle_timeout: Duration,
    /// Deadline the transport itself puts on one request/response exchange.
    ///
    /// Unset by default: behind a [`LockstepApi`](crate::LockstepApi) the
    /// pipeline bounds every call. Set it when the transport is used on its own.
    pub exchange_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            pool_idle_per_host: 32,
            pool_idle_timeout: Duration::from_secs(90),
            exchange_timeout: None,
        }
    }
}
