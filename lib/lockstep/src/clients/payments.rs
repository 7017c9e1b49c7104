//! Payments received from customers or sent to vendors.

use lockstep_core::{Envelope, HttpClient, Method, QueryParams, Result, segment};
use serde::Serialize;

use super::SearchlightQuery;
use crate::HyperClient;
use crate::api::{LockstepApi, NO_BODY};
use crate::models::PaymentDetailHeaderModel;

/// Operations on `/api/v1/Payments`.
pub struct PaymentsClient<'a, C = HyperClient> {
    api: &'a LockstepApi<C>,
}

impl<'a, C: HttpClient> PaymentsClient<'a, C> {
    pub(crate) const fn new(api: &'a LockstepApi<C>) -> Self {
        Self { api }
    }

    /// Retrieve one payment.
    pub async fn retrieve_payment(&self, id: &str, include: Option<&str>) -> Result<Envelope> {
        let path = format!("/api/v1/Payments/{}", segment(id)?);
        let params = QueryParams::new().path("id", id).query("include", include);
        self.api.send_request(Method::Get, &path, NO_BODY, &params).await
    }

    /// Update the fields present in `body`.
    pub async fn update_payment<B>(&self, id: &str, body: &B) -> Result<Envelope>
    where
        B: Serialize + ?Sized,
    {
        let path = format!("/api/v1/Payments/{}", segment(id)?);
        let params = QueryParams::new().path("id", id);
        self.api
            .send_request(Method::Patch, &path, Some(body), &params)
            .await
    }

    /// Delete one payment.
    pub async fn delete_payment(&self, id: &str) -> Result<Envelope> {
        let path = format!("/api/v1/Payments/{}", segment(id)?);
        let params = QueryParams::new().path("id", id);
        self.api
            .send_request(Method::Delete, &path, NO_BODY, &params)
            .await
    }

    /// Create one or more payments.
    pub async fn create_payments<B>(&self, body: &B) -> Result<Envelope>
    where
        B: Serialize + ?Sized,
    {
        self.api
            .send_request(Method::Post, "/api/v1/Payments", Some(body), &QueryParams::new())
            .await
    }

    /// Query payments.
    pub async fn query_payments(&self, query: &SearchlightQuery) -> Result<Envelope> {
        self.api
            .send_request(Method::Get, "/api/v1/Payments/query", NO_BODY, &query.to_params())
            .await
    }

    /// Query the payment summary view.
    pub async fn query_payment_summary_view(&self, query: &SearchlightQuery) -> Result<Envelope> {
        self.api
            .send_request(
                Method::Get,
                "/api/v1/Payments/views/summary",
                NO_BODY,
                &query.to_params(),
            )
            .await
    }

    /// Aggregated payment figures for the account.
    pub async fn retrieve_payment_detail_header(
        &self,
    ) -> Result<Envelope<PaymentDetailHeaderModel>> {
        self.api
            .send_request(
                Method::Get,
                "/api/v1/Payments/views/detail-header",
                NO_BODY,
                &QueryParams::new(),
            )
            .await
    }

    /// Query the payment detail view.
    pub async fn query_payment_detail_view(&self, query: &SearchlightQuery) -> Result<Envelope> {
        self.api
            .send_request(
                Method::Get,
                "/api/v1/Payments/views/detail",
                NO_BODY,
                &query.to_params(),
            )
            .await
    }
}
