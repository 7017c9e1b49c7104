//! Contacts: people at customer and vendor companies.

use lockstep_core::{Envelope, HttpClient, Method, QueryParams, Result, segment};
use serde::Serialize;

use super::SearchlightQuery;
use crate::HyperClient;
use crate::api::{LockstepApi, NO_BODY};

/// Operations on `/api/v1/Contacts`.
pub struct ContactsClient<'a, C = HyperClient> {
    api: &'a LockstepApi<C>,
}

impl<'a, C: HttpClient> ContactsClient<'a, C> {
    pub(crate) const fn new(api: &'a LockstepApi<C>) -> Self {
        Self { api }
    }

    /// Retrieve one contact.
    pub async fn retrieve_contact(&self, id: &str, include: Option<&str>) -> Result<Envelope> {
        let path = format!("/api/v1/Contacts/{}", segment(id)?);
        let params = QueryParams::new().path("id", id).query("include", include);
        self.api.send_request(Method::Get, &path, NO_BODY, &params).await
    }

    /// Update the fields present in `body`.
    pub async fn update_contact<B>(&self, id: &str, body: &B) -> Result<Envelope>
    where
        B: Serialize + ?Sized,
    {
        let path = format!("/api/v1/Contacts/{}", segment(id)?);
        let params = QueryParams::new().path("id", id);
        self.api
            .send_request(Method::Patch, &path, Some(body), &params)
            .await
    }

    /// Disable one contact. Contacts are never hard-deleted.
    pub async fn disable_contact(&self, id: &str) -> Result<Envelope> {
        let path = format!("/api/v1/Contacts/{}", segment(id)?);
        let params = QueryParams::new().path("id", id);
        self.api
            .send_request(Method::Delete, &path, NO_BODY, &params)
            .await
    }

    /// Create one or more contacts.
    pub async fn create_contacts<B>(&self, body: &B) -> Result<Envelope>
    where
        B: Serialize + ?Sized,
    {
        self.api
            .send_request(Method::Post, "/api/v1/Contacts", Some(body), &QueryParams::new())
            .await
    }

    /// Query contacts.
    pub async fn query_contacts(&self, query: &SearchlightQuery) -> Result<Envelope> {
        self.api
            .send_request(Method::Get, "/api/v1/Contacts/query", NO_BODY, &query.to_params())
            .await
    }
}
