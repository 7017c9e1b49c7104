//! Code definitions: the platform's lookup codes.

use lockstep_core::{Envelope, HttpClient, Method, QueryParams, Result, segment};

use super::SearchlightQuery;
use crate::HyperClient;
use crate::api::{LockstepApi, NO_BODY};

/// Operations on `/api/v1/CodeDefinitions`.
pub struct CodeDefinitionsClient<'a, C = HyperClient> {
    api: &'a LockstepApi<C>,
}

impl<'a, C: HttpClient> CodeDefinitionsClient<'a, C> {
    pub(crate) const fn new(api: &'a LockstepApi<C>) -> Self {
        Self { api }
    }

    /// Retrieve one code definition.
    pub async fn retrieve_code_definition(
        &self,
        id: &str,
        include: Option<&str>,
    ) -> Result<Envelope> {
        let path = format!("/api/v1/CodeDefinitions/{}", segment(id)?);
        let params = QueryParams::new().path("id", id).query("include", include);
        self.api.send_request(Method::Get, &path, NO_BODY, &params).await
    }

    /// Query code definitions.
    pub async fn query_code_definitions(&self, query: &SearchlightQuery) -> Result<Envelope> {
        self.api
            .send_request(
                Method::Get,
                "/api/v1/CodeDefinitions/query",
                NO_BODY,
                &query.to_params(),
            )
            .await
    }
}
