//! Activities: tasks and notes attached to accounting records.

use lockstep_core::{Envelope, HttpClient, Method, QueryParams, Result, segment};
use serde::Serialize;

use super::SearchlightQuery;
use crate::HyperClient;
use crate::api::{LockstepApi, NO_BODY};

/// Operations on `/api/v1/Activities`.
pub struct ActivitiesClient<'a, C = HyperClient> {
    api: &'a LockstepApi<C>,
}

impl<'a, C: HttpClient> ActivitiesClient<'a, C> {
    pub(crate) const fn new(api: &'a LockstepApi<C>) -> Self {
        Self { api }
    }

    /// Retrieve one activity; `include` names related collections to embed.
    pub async fn retrieve_activity(&self, id: &str, include: Option<&str>) -> Result<Envelope> {
        let path = format!("/api/v1/Activities/{}", segment(id)?);
        let params = QueryParams::new().path("id", id).query("include", include);
        self.api.send_request(Method::Get, &path, NO_BODY, &params).await
    }

    /// Update the fields present in `body`.
    pub async fn update_activity<B>(&self, id: &str, body: &B) -> Result<Envelope>
    where
        B: Serialize + ?Sized,
    {
        let path = format!("/api/v1/Activities/{}", segment(id)?);
        let params = QueryParams::new().path("id", id);
        self.api
            .send_request(Method::Patch, &path, Some(body), &params)
            .await
    }

    /// Delete one activity.
    pub async fn delete_activity(&self, id: &str) -> Result<Envelope> {
        let path = format!("/api/v1/Activities/{}", segment(id)?);
        let params = QueryParams::new().path("id", id);
        self.api
            .send_request(Method::Delete, &path, NO_BODY, &params)
            .await
    }

    /// Create one or more activities.
    pub async fn create_activities<B>(&self, body: &B) -> Result<Envelope>
    where
        B: Serialize + ?Sized,
    {
        self.api
            .send_request(Method::Post, "/api/v1/Activities", Some(body), &QueryParams::new())
            .await
    }

    /// Query activities.
    pub async fn query_activities(&self, query: &SearchlightQuery) -> Result<Envelope> {
        self.api
            .send_request(Method::Get, "/api/v1/Activities/query", NO_BODY, &query.to_params())
            .await
    }

    /// Retrieve the stream of notes, emails and events for one activity.
    pub async fn retrieve_activity_stream(&self, id: &str) -> Result<Envelope> {
        let path = format!("/api/v1/Activities/{}/stream", segment(id)?);
        let params = QueryParams::new().path("id", id);
        self.api.send_request(Method::Get, &path, NO_BODY, &params).await
    }

    /// Forward an activity to another user.
    pub async fn forward_activity(&self, activity_id: &str, user_id: &str) -> Result<Envelope> {
        let path = format!(
            "/api/v1/Activities/{}/forward/{}",
            segment(activity_id)?,
            segment(user_id)?
        );
        let params = QueryParams::new()
            .path("activityId", activity_id)
            .path("userId", user_id);
        self.api.send_request(Method::Post, &path, NO_BODY, &params).await
    }
}
