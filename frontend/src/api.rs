//! Typed client for the collaborator REST backend.
//!
//! Every screen talks to the backend through these four functions; nothing
//! else in the frontend builds a request. Errors are collapsed into
//! [`ApiError`], whose `Display` text is what the views show in their
//! banners, and every failure is also logged to the browser console.

use gloo_console::error;
use gloo_net::http::{Request, Response};
use thiserror::Error;

use common::model::setting::{SettingResponse, SettingSaveResponse, SettingUpdate};
use common::model::student::StudentAccount;

use crate::session::AdminSession;

/// Settings key holding the homepage video URL.
pub const HOMEPAGE_VIDEO_SETTING: &str = "homepage_video_url";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (offline, DNS, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("the server replied with status {code}: {body}")]
    Status { code: u16, body: String },

    /// The backend answered 2xx but reported `success: false`.
    #[error("{0}")]
    Backend(String),

    /// The reply body did not match the expected shape.
    #[error("unexpected response payload: {0}")]
    Decode(String),
}

/// Fetches the full student roster.
pub async fn fetch_students(session: &AdminSession) -> Result<Vec<StudentAccount>, ApiError> {
    let result = async {
        let resp = Request::get(&format!("{}/students", session.api_base))
            .header("Authorization", &session.bearer())
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let resp = expect_ok(resp).await?;
        resp.json::<Vec<StudentAccount>>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
    .await;
    report("loading students", result)
}

/// Deletes one student account and, server-side, all of its progress data.
pub async fn delete_student(session: &AdminSession, id: i64) -> Result<(), ApiError> {
    let result = async {
        let resp = Request::delete(&format!("{}/students/{}", session.api_base, id))
            .header("Authorization", &session.bearer())
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        expect_ok(resp).await?;
        Ok(())
    }
    .await;
    report("deleting student", result)
}

/// Reads the homepage video URL. A key that has never been written comes
/// back as the empty string.
pub async fn fetch_homepage_video_url(session: &AdminSession) -> Result<String, ApiError> {
    let result = async {
        let url = format!("{}/settings/{}", session.api_base, HOMEPAGE_VIDEO_SETTING);
        let resp = Request::get(&url)
            .header("Authorization", &session.bearer())
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let resp = expect_ok(resp).await?;
        let envelope = resp
            .json::<SettingResponse>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        if !envelope.success {
            return Err(ApiError::Backend(
                "the backend could not read the setting".to_string(),
            ));
        }
        Ok(envelope
            .data
            .map(|data| data.setting_value)
            .unwrap_or_default())
    }
    .await;
    report("loading homepage video setting", result)
}

/// Overwrites the homepage video URL wholesale. An empty value clears it.
pub async fn save_homepage_video_url(
    session: &AdminSession,
    value: &str,
) -> Result<(), ApiError> {
    let result = async {
        let url = format!("{}/settings/{}", session.api_base, HOMEPAGE_VIDEO_SETTING);
        let body = SettingUpdate {
            value: value.to_string(),
        };
        let resp = Request::put(&url)
            .header("Authorization", &session.bearer())
            .json(&body)
            .map_err(|err| ApiError::Decode(err.to_string()))?
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let resp = expect_ok(resp).await?;
        let reply = resp
            .json::<SettingSaveResponse>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        if reply.success {
            Ok(())
        } else {
            Err(ApiError::Backend(reply.message.unwrap_or_else(|| {
                "the backend rejected the new value".to_string()
            })))
        }
    }
    .await;
    report("saving homepage video setting", result)
}

async fn expect_ok(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        Ok(resp)
    } else {
        let code = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::Status { code, body })
    }
}

fn report<T>(context: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Err(err) = &result {
        error!(format!("{context}: {err}"));
    }
    result
}
