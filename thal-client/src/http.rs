//! HTTP client for network-based API calls

use reqwest::{Client, RequestBuilder, StatusCode, multipart::Form};
use serde::de::DeserializeOwned;
use shared::ApiResponse;

use crate::{ClientConfig, ClientError, ClientResult, ImageUpload};
use shared::MenuItemFields;

/// HTTP client for making network requests to the restaurant backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Attach the authorization header, if a token is configured
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.token {
            Some(token) => request.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        }
    }

    /// Make a GET request and decode the raw body
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.client.get(self.config.endpoint(path));
        self.send(request).await
    }

    /// Make a PUT request with JSON body
    pub async fn put_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.client.put(self.config.endpoint(path)).json(body);
        self.send(request).await
    }

    /// Make a POST request with a multipart body
    pub async fn post_multipart<T: DeserializeOwned>(&self, path: &str, form: Form) -> ClientResult<T> {
        let request = self.client.post(self.config.endpoint(path)).multipart(form);
        self.send(request).await
    }

    /// Make a PUT request with a multipart body
    pub async fn put_multipart<T: DeserializeOwned>(&self, path: &str, form: Form) -> ClientResult<T> {
        let request = self.client.put(self.config.endpoint(path)).multipart(form);
        self.send(request).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.client.delete(self.config.endpoint(path));
        self.send(request).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = self.authorize(request).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    ///
    /// Non-2xx statuses become [`ClientError::Api`], keeping the backend's
    /// `message` when the body is a failure envelope.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ApiResponse<serde_json::Value>>(&body)
                .ok()
                .and_then(|envelope| envelope.message().map(str::to_string))
                .or_else(|| default_status_message(status));
            return Err(ClientError::Api {
                status: Some(status.as_u16()),
                message,
            });
        }

        serde_json::from_slice(&body).map_err(Into::into)
    }
}

fn default_status_message(status: StatusCode) -> Option<String> {
    match status {
        StatusCode::UNAUTHORIZED => Some("Authentication required".to_string()),
        StatusCode::FORBIDDEN => Some("Permission denied".to_string()),
        StatusCode::NOT_FOUND => Some("Not found".to_string()),
        _ => None,
    }
}

/// Unwrap a success envelope, requiring its `data`
pub(crate) fn into_data<T>(envelope: ApiResponse<T>, what: &str) -> ClientResult<T> {
    let envelope = into_success(envelope)?;
    envelope
        .data
        .ok_or_else(|| ClientError::InvalidResponse(format!("Missing {} data", what)))
}

/// Reject envelopes whose `success` flag is false
pub(crate) fn into_success<T>(envelope: ApiResponse<T>) -> ClientResult<ApiResponse<T>> {
    if envelope.success {
        Ok(envelope)
    } else {
        Err(ClientError::Api {
            status: None,
            message: envelope.message().map(str::to_string),
        })
    }
}

/// Build the multipart form for a menu item
///
/// No `image` part is added when `image` is `None`, so the backend keeps
/// the stored picture on update.
pub(crate) fn menu_item_form(fields: &MenuItemFields, image: Option<ImageUpload>) -> ClientResult<Form> {
    let form = Form::new()
        .text("name", fields.name.clone())
        .text("description", fields.description.clone())
        .text("price", fields.price.to_string())
        .text("category", fields.category.clone());

    match image {
        Some(image) => Ok(form.part("image", image.into_part()?)),
        None => Ok(form),
    }
}
