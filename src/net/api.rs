//! REST API helpers for the capabilities backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: `HttpApi` returns [`ApiError::Unavailable`] so the rest of
//! the crate compiles and tests without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. A non-success status becomes
//! `ApiError::Rejected` carrying the server's `detail`; a body that does not
//! parse becomes `ApiError::Decode`. Callers decide what the user sees.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use urlencoding::encode;

use super::types::{CapabilitySet, MutationReply};
use crate::error::ApiError;

pub fn capabilities_endpoint(api_base: &str) -> String {
    format!("{api_base}/capabilities")
}

/// `POST` target for registering `email` on `capability`.
pub fn register_endpoint(api_base: &str, capability: &str, email: &str) -> String {
    format!(
        "{api_base}/capabilities/{}/register?email={}",
        encode(capability),
        encode(email)
    )
}

/// `DELETE` target for unregistering `email` from `capability`.
pub fn unregister_endpoint(api_base: &str, capability: &str, email: &str) -> String {
    format!(
        "{api_base}/capabilities/{}/unregister?email={}",
        encode(capability),
        encode(email)
    )
}

/// The three calls the board makes.
///
/// `HttpApi` is the browser implementation; tests substitute an in-memory
/// fake. The board is single-threaded, so the futures are not `Send`.
pub trait CapabilityApi {
    /// `GET /capabilities`.
    fn list(&self) -> impl Future<Output = Result<CapabilitySet, ApiError>>;

    /// `POST /capabilities/{capability}/register?email={email}`.
    fn register(&self, capability: &str, email: &str) -> impl Future<Output = Result<MutationReply, ApiError>>;

    /// `DELETE /capabilities/{capability}/unregister?email={email}`.
    fn unregister(&self, capability: &str, email: &str) -> impl Future<Output = Result<MutationReply, ApiError>>;
}

/// `fetch`-backed client rooted at `api_base`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpApi {
    api_base: String,
}

impl HttpApi {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self { api_base: api_base.into() }
    }
}

impl CapabilityApi for HttpApi {
    async fn list(&self) -> Result<CapabilitySet, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = capabilities_endpoint(&self.api_base);
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Rejected { status: resp.status(), detail: None });
            }
            resp.json::<CapabilitySet>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, capability: &str, email: &str) -> Result<MutationReply, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = register_endpoint(&self.api_base, capability, email);
            let resp = gloo_net::http::Request::post(&url)
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            read_mutation_reply(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (capability, email);
            Err(ApiError::Unavailable)
        }
    }

    async fn unregister(&self, capability: &str, email: &str) -> Result<MutationReply, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = unregister_endpoint(&self.api_base, capability, email);
            let resp = gloo_net::http::Request::delete(&url)
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            read_mutation_reply(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (capability, email);
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
async fn read_mutation_reply(resp: gloo_net::http::Response) -> Result<MutationReply, ApiError> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    mutation_reply_from_body(resp.ok(), status, &body)
}

/// Interpret a register/unregister response body.
///
/// Success bodies decode as [`MutationReply`]; failure bodies as
/// [`ErrorReply`](super::types::ErrorReply). Either failing to parse is a
/// decode error, matching how the board treats unreadable responses.
#[cfg(any(test, feature = "csr"))]
fn mutation_reply_from_body(ok: bool, status: u16, body: &str) -> Result<MutationReply, ApiError> {
    if ok {
        return serde_json::from_str::<MutationReply>(body).map_err(|e| ApiError::Decode(e.to_string()));
    }
    let reply = serde_json::from_str::<super::types::ErrorReply>(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Err(ApiError::Rejected { status, detail: reply.detail })
}
