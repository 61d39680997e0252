use gloo_net::http::{Request, Response};
use urlencoding::encode;

use crate::error::ApiError;
use crate::models::{ActivityCatalog, ApiMessage, ParticipantRef, SignupRequest};

/// Client for the activities backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityApi {
    base: String,
}

impl ActivityApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn activities_url(&self) -> String {
        format!("{}/activities", self.base)
    }

    pub fn signup_url(&self, req: &SignupRequest) -> String {
        format!(
            "{}/activities/{}/signup?email={}",
            self.base,
            encode(&req.activity),
            encode(&req.email)
        )
    }

    pub fn participant_url(&self, target: &ParticipantRef) -> String {
        format!(
            "{}/activities/{}/participants/{}",
            self.base,
            encode(&target.activity),
            encode(&target.email)
        )
    }

    /// `GET /activities`. A non-2xx status or a body that isn't the name map fails.
    pub async fn fetch_activities(&self) -> Result<ActivityCatalog, ApiError> {
        let resp = Request::get(&self.activities_url()).send().await?;
        let body = strict_body(&resp).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// `POST /activities/{name}/signup?email=...`.
    pub async fn signup(&self, req: &SignupRequest) -> Result<ApiMessage, ApiError> {
        let resp = Request::post(&self.signup_url(req)).send().await?;
        let body = strict_body(&resp).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// `DELETE /activities/{name}/participants/{email}`. Only the status decides.
    pub async fn remove_participant(&self, target: &ParticipantRef) -> Result<ApiMessage, ApiError> {
        let resp = Request::delete(&self.participant_url(target)).send().await?;
        lenient_outcome(&resp).await
    }
}

async fn strict_body(resp: &Response) -> Result<String, ApiError> {
    let body = resp.text().await?;
    check_strict(resp.ok(), resp.status(), body)
}

async fn lenient_outcome(resp: &Response) -> Result<ApiMessage, ApiError> {
    let body = resp.text().await.unwrap_or_default();
    check_lenient(resp.ok(), resp.status(), &body)
}

/// GET/POST: an error body must still be the `{detail}` object, otherwise the
/// response counts as undecodable rather than rejected.
fn check_strict(ok: bool, status: u16, body: String) -> Result<String, ApiError> {
    if ok {
        return Ok(body);
    }
    let body: ApiMessage = serde_json::from_str(&body)?;
    Err(ApiError::Rejected { status, body })
}

/// DELETE: whatever the body holds, only the status decides.
fn check_lenient(ok: bool, status: u16, body: &str) -> Result<ApiMessage, ApiError> {
    let body = ApiMessage::parse_lenient(body);
    if ok {
        Ok(body)
    } else {
        Err(ApiError::Rejected { status, body })
    }
}
