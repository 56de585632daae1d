use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ApiError, ApiResult, ValidationMessages};

use super::types::{Contact, ContactDraft};

/// Expansion set the remote API needs to embed every nested sub-record
/// inline. Fetching a contact without it yields bare `Info` references and an
/// update submitted from such a contact would drop the nested records.
pub const EXPAND: &str = "Info,Info.InvoiceAddress,Info.DefaultPhone,Info.DefaultEmail,Info.DefaultAddress";

pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Clone)]
pub struct ContactApi {
    base_url: String,
    page_size: u32,
    client: Client,
}

impl ContactApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            page_size: DEFAULT_PAGE_SIZE,
            client: Client::new(),
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
        token: &str,
        body: Option<&serde_json::Value>,
    ) -> ApiResult<T> {
        let url = self.url(path);
        let mut req = self.client.request(method.clone(), &url).bearer_auth(token);

        if let Some(json) = body {
            req = req.json(json);
        }

        debug!("Contact API request: {:?} {}", method, url);

        let resp = req.send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        debug!("Contact API response: {} - {}", status, text);

        if !status.is_success() {
            if let Ok(messages) = serde_json::from_str::<ValidationMessages>(&text) {
                if !messages.messages.is_empty() {
                    return Err(ApiError::Validation(messages));
                }
            }
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        if text.is_empty() {
            return serde_json::from_str("null")
                .map_err(|e| ApiError::InvalidResponse(format!("{} - empty body", e)));
        }

        serde_json::from_str(&text).map_err(|e| ApiError::InvalidResponse(format!("{} - {}", e, text)))
    }
}

/// The five contact operations behind a seam so views can run against an
/// in-memory implementation in tests.
#[async_trait]
pub trait ContactService: Send + Sync {
    async fn list_contacts(&self, token: &str) -> ApiResult<Vec<Contact>>;
    async fn get_contact(&self, token: &str, id: i64) -> ApiResult<Contact>;
    async fn create_contact(&self, token: &str, draft: ContactDraft) -> ApiResult<Contact>;
    async fn update_contact(&self, token: &str, id: i64, contact: &Contact) -> ApiResult<()>;
    async fn delete_contact(&self, token: &str, id: i64) -> ApiResult<()>;
}

#[async_trait]
impl ContactService for ContactApi {
    async fn list_contacts(&self, token: &str) -> ApiResult<Vec<Contact>> {
        let path = format!(
            "contacts?expand={}&hateoas=false&top={}",
            EXPAND, self.page_size
        );
        self.request(reqwest::Method::GET, &path, token, None).await
    }

    async fn get_contact(&self, token: &str, id: i64) -> ApiResult<Contact> {
        let path = format!("contacts/{}?expand={}", id, EXPAND);
        match self.request(reqwest::Method::GET, &path, token, None).await {
            Err(ApiError::Status { status: 404, .. }) => Err(ApiError::NotFound(id)),
            other => other,
        }
    }

    async fn create_contact(&self, token: &str, draft: ContactDraft) -> ApiResult<Contact> {
        let body = serde_json::to_value(draft.into_contact())
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;
        self.request(reqwest::Method::POST, "contacts", token, Some(&body))
            .await
    }

    async fn update_contact(&self, token: &str, id: i64, contact: &Contact) -> ApiResult<()> {
        let body = serde_json::to_value(contact)
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;
        let path = format!("contacts/{}", id);
        let _: serde_json::Value = self
            .request(reqwest::Method::PUT, &path, token, Some(&body))
            .await?;
        Ok(())
    }

    async fn delete_contact(&self, token: &str, id: i64) -> ApiResult<()> {
        let path = format!("contacts/{}", id);
        let _: serde_json::Value = self
            .request(reqwest::Method::DELETE, &path, token, None)
            .await?;
        Ok(())
    }
}
