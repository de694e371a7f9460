//! REST adapter for the Document Enquiry backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a network error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every outcome is mapped into `ApiError`: fetch failures become `Network`,
//! non-2xx responses are classified by status with the body's `detail`, and
//! undecodable success bodies become `Server`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use enquiry_core::types::SignupRequest;
use enquiry_core::{ApiError, ApiRoutes, Backend, DocumentRef, QueryAnswer, QueryRequest, TokenResponse, UploadReceipt};

/// Compile-time backend base URL. Empty means same origin, i.e. through the
/// web host's `/api/v1` proxy.
pub fn api_base() -> &'static str {
    option_env!("ENQUIRY_API_BASE").unwrap_or("")
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiError {
    ApiError::network("not available on server")
}

/// Browser HTTP adapter, provided to views as context.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    routes: ApiRoutes,
}

impl HttpBackend {
    pub fn new(routes: ApiRoutes) -> Self {
        Self { routes }
    }

    pub fn from_build_env() -> Self {
        Self::new(ApiRoutes::new(api_base()))
    }

    pub fn routes(&self) -> &ApiRoutes {
        &self.routes
    }
}

#[cfg(feature = "hydrate")]
fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::network(e.to_string())
}

#[cfg(feature = "hydrate")]
async fn check(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    log::warn!("request to {} failed with {status}", resp.url());
    Err(ApiError::from_status(status, &body))
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    let resp = check(resp).await?;
    resp.json::<T>().await.map_err(|e| ApiError::malformed(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn encode_form(fields: &[(&'static str, String)]) -> Result<String, ApiError> {
    let params = web_sys::UrlSearchParams::new().map_err(|e| ApiError::malformed(format!("{e:?}")))?;
    for (key, value) in fields {
        params.append(key, value);
    }
    Ok(String::from(params.to_string()))
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    #[cfg(feature = "hydrate")]
    type Upload = web_sys::File;
    #[cfg(not(feature = "hydrate"))]
    type Upload = ();

    async fn signup(&self, body: &SignupRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.routes.signup())
                .header("Accept", "application/json")
                .json(body)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            check(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = body;
            Err(unavailable())
        }
    }

    async fn login(&self, form: &[(&'static str, String)]) -> Result<TokenResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.routes.login())
                .header("Content-Type", "application/x-www-form-urlencoded")
                .header("Accept", "application/json")
                .body(encode_form(form)?)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = form;
            Err(unavailable())
        }
    }

    async fn list_documents(&self, authorization: &str, skip: u32, limit: u32) -> Result<Vec<DocumentRef>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.routes.documents(skip, limit))
                .header("Authorization", authorization)
                .send()
                .await
                .map_err(transport)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (authorization, skip, limit);
            Err(unavailable())
        }
    }

    async fn upload(&self, authorization: &str, title: &str, file: Self::Upload) -> Result<UploadReceipt, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let form = web_sys::FormData::new().map_err(|e| ApiError::malformed(format!("{e:?}")))?;
            form.append_with_blob_and_filename("file", &file, &file.name())
                .and_then(|()| form.append_with_str("title", title))
                .map_err(|e| ApiError::malformed(format!("{e:?}")))?;
            // The browser sets the multipart boundary itself.
            let resp = gloo_net::http::Request::post(&self.routes.upload())
                .header("Authorization", authorization)
                .body(form)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (authorization, title, file);
            Err(unavailable())
        }
    }

    async fn query(&self, authorization: &str, request: &QueryRequest) -> Result<QueryAnswer, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.routes.query())
                .header("Authorization", authorization)
                .json(request)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (authorization, request);
            Err(unavailable())
        }
    }
}
