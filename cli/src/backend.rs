//! `reqwest` implementation of the shared [`Backend`] trait.

use async_trait::async_trait;
use enquiry_core::types::SignupRequest;
use enquiry_core::{ApiError, ApiRoutes, Backend, DocumentRef, QueryAnswer, QueryRequest, TokenResponse, UploadReceipt};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// File contents read from disk, sent as the multipart `file` part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    http: reqwest::Client,
    routes: ApiRoutes,
}

fn transport(e: reqwest::Error) -> ApiError {
    if e.is_decode() {
        ApiError::malformed(e.to_string())
    } else {
        ApiError::network(e.to_string())
    }
}

async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let url = resp.url().to_string();
    let body = resp.text().await.unwrap_or_default();
    tracing::debug!(%status, %url, "request rejected");
    Err(ApiError::from_status(status.as_u16(), &body))
}

async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let resp = check(resp).await?;
    resp.json::<T>().await.map_err(|e| ApiError::malformed(e.to_string()))
}

impl ReqwestBackend {
    pub fn new(base_url: &str) -> Self {
        Self { http: reqwest::Client::new(), routes: ApiRoutes::new(base_url) }
    }

    pub fn routes(&self) -> &ApiRoutes {
        &self.routes
    }

    /// Processing status of one document.
    pub async fn document_status(&self, authorization: &str, id: &str) -> Result<Value, ApiError> {
        let resp = self
            .http
            .get(self.routes.document_status(id))
            .header(AUTHORIZATION, authorization)
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }

    pub async fn delete_document(&self, authorization: &str, id: &str) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(self.routes.document(id))
            .header(AUTHORIZATION, authorization)
            .send()
            .await
            .map_err(transport)?;
        check(resp).await.map(|_| ())
    }
}

#[async_trait(?Send)]
impl Backend for ReqwestBackend {
    type Upload = UploadFile;

    async fn signup(&self, body: &SignupRequest) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.routes.signup())
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        check(resp).await.map(|_| ())
    }

    async fn login(&self, form: &[(&'static str, String)]) -> Result<TokenResponse, ApiError> {
        let resp = self
            .http
            .post(self.routes.login())
            .header(ACCEPT, "application/json")
            .form(form)
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }

    async fn list_documents(&self, authorization: &str, skip: u32, limit: u32) -> Result<Vec<DocumentRef>, ApiError> {
        let resp = self
            .http
            .get(self.routes.documents(skip, limit))
            .header(AUTHORIZATION, authorization)
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }

    async fn upload(&self, authorization: &str, title: &str, file: UploadFile) -> Result<UploadReceipt, ApiError> {
        let part = Part::bytes(file.bytes).file_name(file.name);
        let form = Form::new().part("file", part).text("title", title.to_owned());
        let resp = self
            .http
            .post(self.routes.upload())
            .header(AUTHORIZATION, authorization)
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }

    async fn query(&self, authorization: &str, request: &QueryRequest) -> Result<QueryAnswer, ApiError> {
        let resp = self
            .http
            .post(self.routes.query())
            .header(AUTHORIZATION, authorization)
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }
}

#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;
