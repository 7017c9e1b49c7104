//! Payment applications: the link between a payment and the invoice it pays.

use lockstep_core::{Envelope, HttpClient, Method, QueryParams, Result, segment};
use serde::Serialize;

use super::SearchlightQuery;
use crate::HyperClient;
use crate::api::{LockstepApi, NO_BODY};

/// Operations on `/api/v1/PaymentApplications`.
pub struct PaymentApplicationsClient<'a, C = HyperClient> {
    api: &'a LockstepApi<C>,
}

impl<'a, C: HttpClient> PaymentApplicationsClient<'a, C> {
    pub(crate) const fn new(api: &'a LockstepApi<C>) -> Self {
        Self { api }
    }

    /// Retrieve one payment application.
    pub async fn retrieve_payment_application(
        &self,
        id: &str,
        include: Option<&str>,
    ) -> Result<Envelope> {
        let path = format!("/api/v1/PaymentApplications/{}", segment(id)?);
        let params = QueryParams::new().path("id", id).query("include", include);
        self.api.send_request(Method::Get, &path, NO_BODY, &params).await
    }

    /// Update the fields present in `body`.
    pub async fn update_payment_application<B>(&self, id: &str, body: &B) -> Result<Envelope>
    where
        B: Serialize + ?Sized,
    {
        let path = format!("/api/v1/PaymentApplications/{}", segment(id)?);
        let params = QueryParams::new().path("id", id);
        self.api
            .send_request(Method::Patch, &path, Some(body), &params)
            .await
    }

    /// Delete one payment application.
    pub async fn delete_payment_application(&self, id: &str) -> Result<Envelope> {
        let path = format!("/api/v1/PaymentApplications/{}", segment(id)?);
        let params = QueryParams::new().path("id", id);
        self.api
            .send_request(Method::Delete, &path, NO_BODY, &params)
            .await
    }

    /// Create one or more payment applications.
    pub async fn create_payment_applications<B>(&self, body: &B) -> Result<Envelope>
    where
        B: Serialize + ?Sized,
    {
        self.api
            .send_request(
                Method::Post,
                "/api/v1/PaymentApplications",
                Some(body),
                &QueryParams::new(),
            )
            .await
    }

    /// Query payment applications.
    pub async fn query_payment_applications(&self, query: &SearchlightQuery) -> Result<Envelope> {
        self.api
            .send_request(
                Method::Get,
                "/api/v1/PaymentApplications/query",
                NO_BODY,
                &query.to_params(),
            )
            .await
    }
}
