//! The request pipeline shared by every resource client.
//!
//! [`LockstepApi`] owns the base URL, the credential and the transport. Its
//! single entry point, [`LockstepApi::send_request`], turns a request
//! descriptor into exactly one network call and classifies the outcome into
//! an [`Envelope`]. HTTP error statuses and undecodable bodies are returned,
//! not raised; only transport failures surface as `Err`.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use bytes::Bytes;
use lockstep_core::{
    Envelope, Error, ErrorPayload, HttpClient, Method, QueryParams, Request, Result, set_header,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{Instrument, debug, info_span, warn};
use url::Url;

use crate::clients::{
    ActivitiesClient, AttachmentsClient, CodeDefinitionsClient, ContactsClient,
    CurrenciesClient, InvoiceHistoryClient, PaymentApplicationsClient, PaymentsClient,
    ReportsClient,
};
use crate::{ClientConfig, HyperClient};

/// Base URL of the sandbox environment.
pub const SANDBOX_URL: &str = "https://api.sbx.lockstep.io/";

/// Base URL of the production environment.
pub const PRODUCTION_URL: &str = "https://api.lockstep.io/";

/// Value of the `SdkType` header.
pub const SDK_TYPE: &str = "Rust";

/// Value of the `SdkVersion` header.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Timeout of a platform call unless the builder or [`CallOptions`] say otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Body argument for calls that send no payload.
pub const NO_BODY: Option<&'static ()> = None;

/// Platform environment a [`LockstepApi`] talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// `https://api.sbx.lockstep.io/`
    Sandbox,
    /// `https://api.lockstep.io/`
    Production,
    /// Any other deployment, e.g. a local mock server.
    Custom(Url),
}

impl Environment {
    /// Base URL of the environment, always ending with `/`.
    pub fn base_url(&self) -> Result<Url> {
        let mut url = match self {
            Self::Sandbox => Url::parse(SANDBOX_URL)?,
            Self::Production => Url::parse(PRODUCTION_URL)?,
            Self::Custom(url) => url.clone(),
        };
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}

impl FromStr for Environment {
    type Err = Error;

    /// Accepts `sbx`, `prd`, or an absolute URL.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "sbx" => Ok(Self::Sandbox),
            "prd" => Ok(Self::Production),
            other => Ok(Self::Custom(Url::parse(other)?)),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sandbox => f.write_str("sbx"),
            Self::Production => f.write_str("prd"),
            Self::Custom(url) => write!(f, "{url}"),
        }
    }
}

/// Credential attached to every request.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// Sent as `Api-Key: <key>`.
    ApiKey(String),
    /// Sent as `Authorization: Bearer <token>`.
    Bearer(String),
}

impl Credential {
    /// Header name and value carrying this credential.
    #[must_use]
    pub fn header(&self) -> (&'static str, String) {
        match self {
            Self::ApiKey(key) => ("Api-Key", key.clone()),
            Self::Bearer(token) => ("Authorization", format!("Bearer {token}")),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiKey(_) => f.write_str("ApiKey([redacted])"),
            Self::Bearer(_) => f.write_str("Bearer([redacted])"),
        }
    }
}

/// Per-call overrides for [`LockstepApi::send_request_with`].
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    /// Replaces the pipeline's timeout for this call.
    pub timeout: Option<Duration>,
    /// Extra headers; they win over the pipeline's headers of the same name,
    /// compared ignoring case.
    pub headers: HashMap<String, String>,
}

impl CallOptions {
    /// Empty overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timeout for this call.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add a header for this call.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        set_header(&mut self.headers, name.into(), value.into());
        self
    }
}

/// Client for the Lockstep Platform.
///
/// Construct once per session and share by reference; resource clients
/// returned by [`payments`](Self::payments) and friends borrow it and hold no
/// configuration of their own.
///
/// # Example
///
/// ```ignore
/// use lockstep::{Environment, LockstepApi};
///
/// let api = LockstepApi::builder(Environment::Sandbox)
///     .api_key("my-api-key")
///     .app_name("billing-sync")
///     .build()?;
///
/// let envelope = api.payments().retrieve_payment("abc123", None).await?;
/// if envelope.is_success() {
///     println!("{:?}", envelope.value());
/// }
/// ```
pub struct LockstepApi<C = HyperClient> {
    base_url: Url,
    headers: HashMap<String, String>,
    timeout: Duration,
    transport: C,
}

impl<C> fmt::Debug for LockstepApi<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LockstepApi")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl LockstepApi {
    /// Create a builder for the given environment.
    #[must_use]
    pub fn builder(environment: Environment) -> LockstepApiBuilder {
        LockstepApiBuilder::new(environment)
    }
}

impl<C: HttpClient> LockstepApi<C> {
    /// Base URL every path is resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Default request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Headers sent with every request.
    #[must_use]
    pub fn default_headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// The underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &C {
        &self.transport
    }

    /// Send one request and classify the response.
    ///
    /// `path` is already interpolated; `params` entries with absent values
    /// are dropped and lists become repeated keys. `body`, when present, is
    /// sent as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error only when no HTTP response was obtained
    /// (connection, TLS, timeout), or when `body` cannot be serialized,
    /// in which case nothing is sent.
    pub async fn send_request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        params: &QueryParams,
    ) -> Result<Envelope<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_request_with(method, path, body, params, &CallOptions::default())
            .await
    }

    /// [`send_request`](Self::send_request) with per-call overrides.
    ///
    /// # Errors
    ///
    /// Same as [`send_request`](Self::send_request).
    pub async fn send_request_with<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        params: &QueryParams,
        options: &CallOptions,
    ) -> Result<Envelope<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.build_request(method, path, body, params, options)?;
        let timeout = options.timeout.unwrap_or(self.timeout);
        let span = info_span!("lockstep_request", %method, path);

        async move {
            debug!(url = %request.url(), "dispatching request");

            let exchange = self.transport.execute(request);
            let response = match tokio::time::timeout(timeout, exchange).await {
                Ok(Ok(response)) => response,
                Ok(Err(err)) => {
                    warn!(error = %err, "transport failure");
                    return Err(err);
                }
                Err(_) => {
                    warn!(?timeout, "request timed out");
                    return Err(Error::Timeout);
                }
            };

            let envelope = Envelope::<T>::from_response(response);
            match envelope.error().and_then(ErrorPayload::as_decode_failure) {
                Some(failure) => {
                    warn!(
                        status = envelope.status(),
                        %failure,
                        "response body could not be decoded"
                    );
                }
                None => {
                    debug!(
                        status = envelope.status(),
                        success = envelope.is_success(),
                        "response classified"
                    );
                }
            }
            Ok(envelope)
        }
        .instrument(span)
        .await
    }

    fn build_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        params: &QueryParams,
        options: &CallOptions,
    ) -> Result<Request> {
        let url = self.base_url.join(path.trim_start_matches('/'))?;

        let mut builder = Request::<Bytes>::builder(method, url)
            .query_pairs(params.pairs())
            .headers(self.headers.clone())
            .headers(options.headers.clone());
        if let Some(body) = body {
            builder = builder.json(body)?;
        }

        Ok(builder.build())
    }

    /// Activities resource.
    #[must_use]
    pub const fn activities(&self) -> ActivitiesClient<'_, C> {
        ActivitiesClient::new(self)
    }

    /// Attachments resource.
    #[must_use]
    pub const fn attachments(&self) -> AttachmentsClient<'_, C> {
        AttachmentsClient::new(self)
    }

    /// Code definitions resource.
    #[must_use]
    pub const fn code_definitions(&self) -> CodeDefinitionsClient<'_, C> {
        CodeDefinitionsClient::new(self)
    }

    /// Contacts resource.
    #[must_use]
    pub const fn contacts(&self) -> ContactsClient<'_, C> {
        ContactsClient::new(self)
    }

    /// Currencies resource.
    #[must_use]
    pub const fn currencies(&self) -> CurrenciesClient<'_, C> {
        CurrenciesClient::new(self)
    }

    /// Invoice history resource.
    #[must_use]
    pub const fn invoice_history(&self) -> InvoiceHistoryClient<'_, C> {
        InvoiceHistoryClient::new(self)
    }

    /// Payment applications resource.
    #[must_use]
    pub const fn payment_applications(&self) -> PaymentApplicationsClient<'_, C> {
        PaymentApplicationsClient::new(self)
    }

    /// Payments resource.
    #[must_use]
    pub const fn payments(&self) -> PaymentsClient<'_, C> {
        PaymentsClient::new(self)
    }

    /// Reports resource.
    #[must_use]
    pub const fn reports(&self) -> ReportsClient<'_, C> {
        ReportsClient::new(self)
    }
}

/// Builder for [`LockstepApi`].
#[derive(Debug, Clone)]
pub struct LockstepApiBuilder {
    environment: Environment,
    credential: Option<Credential>,
    app_name: Option<String>,
    headers: Vec<(String, String)>,
    timeout: Option<Duration>,
    client_config: ClientConfig,
}

impl LockstepApiBuilder {
    /// Create a builder for the given environment.
    #[must_use]
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            credential: None,
            app_name: None,
            headers: Vec::new(),
            timeout: None,
            client_config: ClientConfig::default(),
        }
    }

    /// Authenticate with an API key.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.credential = Some(Credential::ApiKey(key.into()));
        self
    }

    /// Authenticate with a bearer token.
    #[must_use]
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.credential = Some(Credential::Bearer(token.into()));
        self
    }

    /// Set the credential directly.
    #[must_use]
    pub fn credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Name of the calling application, sent as `ApplicationName`.
    #[must_use]
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    /// Add a header sent with every request.
    ///
    /// Replaces a built-in header of the same name, compared ignoring case.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the timeout of every call; [`DEFAULT_TIMEOUT`] when unset.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Connection settings of the default [`HyperClient`] transport.
    #[must_use]
    pub fn client_config(mut self, config: ClientConfig) -> Self {
        self.client_config = config;
        self
    }

    /// Build with the default [`HyperClient`] transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment's base URL is invalid.
    pub fn build(self) -> Result<LockstepApi> {
        let transport = HyperClient::builder()
            .config(&self.client_config)
            .with_logging()
            .build();
        self.build_with(transport)
    }

    /// Build with a caller-supplied transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment's base URL is invalid.
    pub fn build_with<C: HttpClient>(self, transport: C) -> Result<LockstepApi<C>> {
        let base_url = self.environment.base_url()?;

        let mut headers = HashMap::from([
            ("Accept".to_string(), "application/json".to_string()),
            ("SdkType".to_string(), SDK_TYPE.to_string()),
            ("SdkVersion".to_string(), SDK_VERSION.to_string()),
        ]);
        if let Some(app_name) = self.app_name {
            headers.insert("ApplicationName".to_string(), app_name);
        }
        if let Some(credential) = &self.credential {
            let (name, value) = credential.header();
            headers.insert(name.to_string(), value);
        }
        for (name, value) in self.headers {
            set_header(&mut headers, name, value);
        }

        Ok(LockstepApi {
            base_url,
            headers,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            transport,
        })
    }
}
