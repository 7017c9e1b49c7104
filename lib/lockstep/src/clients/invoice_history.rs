//! Audit trail of invoice changes.

use lockstep_core::{Envelope, HttpClient, Method, QueryParams, Result, segment};

use super::SearchlightQuery;
use crate::HyperClient;
use crate::api::{LockstepApi, NO_BODY};

/// Operations on `/api/v1/InvoiceHistory`.
pub struct InvoiceHistoryClient<'a, C = HyperClient> {
    api: &'a LockstepApi<C>,
}

impl<'a, C: HttpClient> InvoiceHistoryClient<'a, C> {
    pub(crate) const fn new(api: &'a LockstepApi<C>) -> Self {
        Self { api }
    }

    /// Every recorded change to one invoice.
    pub async fn retrieve_invoice_history(&self, id: &str) -> Result<Envelope> {
        let path = format!("/api/v1/InvoiceHistory/{}", segment(id)?);
        let params = QueryParams::new().path("id", id);
        self.api.send_request(Method::Get, &path, NO_BODY, &params).await
    }

    /// Query invoice history.
    pub async fn query_invoice_history(&self, query: &SearchlightQuery) -> Result<Envelope> {
        self.api
            .send_request(
                Method::Get,
                "/api/v1/InvoiceHistory/query",
                NO_BODY,
                &query.to_params(),
            )
            .await
    }
}
