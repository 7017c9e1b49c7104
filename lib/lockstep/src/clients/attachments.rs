//! Attachments: files linked to accounting records.

use lockstep_core::{Envelope, HttpClient, Method, QueryParams, Result, segment};
use serde::Serialize;

use super::SearchlightQuery;
use crate::HyperClient;
use crate::api::{LockstepApi, NO_BODY};

/// Operations on `/api/v1/Attachments`.
pub struct AttachmentsClient<'a, C = HyperClient> {
    api: &'a LockstepApi<C>,
}

impl<'a, C: HttpClient> AttachmentsClient<'a, C> {
    pub(crate) const fn new(api: &'a LockstepApi<C>) -> Self {
        Self { api }
    }

    /// Retrieve one attachment's metadata.
    pub async fn retrieve_attachment(&self, id: &str, include: Option<&str>) -> Result<Envelope> {
        let path = format!("/api/v1/Attachments/{}", segment(id)?);
        let params = QueryParams::new().path("id", id).query("include", include);
        self.api.send_request(Method::Get, &path, NO_BODY, &params).await
    }

    /// Update the fields present in `body`.
    pub async fn update_attachment<B>(&self, id: &str, body: &B) -> Result<Envelope>
    where
        B: Serialize + ?Sized,
    {
        let path = format!("/api/v1/Attachments/{}", segment(id)?);
        let params = QueryParams::new().path("id", id);
        self.api
            .send_request(Method::Patch, &path, Some(body), &params)
            .await
    }

    /// Archive one attachment. The platform keeps archived files.
    pub async fn archive_attachment(&self, id: &str) -> Result<Envelope> {
        let path = format!("/api/v1/Attachments/{}", segment(id)?);
        let params = QueryParams::new().path("id", id);
        self.api
            .send_request(Method::Delete, &path, NO_BODY, &params)
            .await
    }

    /// Retrieve a download link for one attachment.
    pub async fn download_attachment(&self, id: &str) -> Result<Envelope> {
        let path = format!("/api/v1/Attachments/{}/download", segment(id)?);
        let params = QueryParams::new().path("id", id);
        self.api.send_request(Method::Get, &path, NO_BODY, &params).await
    }

    /// Register an attachment against the record `object_id` of `table_name`.
    pub async fn upload_attachment(
        &self,
        table_name: Option<&str>,
        object_id: Option<&str>,
    ) -> Result<Envelope> {
        let params = QueryParams::new()
            .query("tableName", table_name)
            .query("objectId", object_id);
        self.api
            .send_request(Method::Post, "/api/v1/Attachments", NO_BODY, &params)
            .await
    }

    /// Query attachments.
    pub async fn query_attachments(&self, query: &SearchlightQuery) -> Result<Envelope> {
        self.api
            .send_request(Method::Get, "/api/v1/Attachments/query", NO_BODY, &query.to_params())
            .await
    }
}
