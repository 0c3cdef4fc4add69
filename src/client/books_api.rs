//! Books API Client
//!
//! This module provides async functions for interacting with the books REST API.
//!
//! [`BooksApi`] is the seam the mutation coordinator depends on;
//! [`HttpBooksApi`] is the `reqwest` implementation. Neither retries nor
//! applies timeouts of its own: every call is a single request whose
//! failure is reported as an [`ApiError`].

use std::future::Future;

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::client::config::Config;
use crate::client::error::ApiError;
use crate::shared::{ActionResult, Book, ErrorBody, NewBook, NewComment, RecordId};

/// Operations the client can perform against the books API
pub trait BooksApi: Send + Sync {
    /// `GET /api/books`
    fn list_books(&self) -> impl Future<Output = Result<Vec<Book>, ApiError>> + Send;

    /// `POST /api/books`
    fn add_book(&self, book: &NewBook) -> impl Future<Output = Result<Book, ApiError>> + Send;

    /// `DELETE /api/books/{id}`
    fn delete_book(&self, id: &RecordId) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// `GET /api/books/{id}`
    fn get_book(&self, id: &RecordId) -> impl Future<Output = Result<Book, ApiError>> + Send;

    /// `POST /api/books/{id}`
    fn add_comment(
        &self,
        id: &RecordId,
        text: &str,
    ) -> impl Future<Output = Result<Book, ApiError>> + Send;

    /// `DELETE /api/books`
    fn delete_all_books(&self) -> impl Future<Output = Result<(), ApiError>> + Send;
}

/// Books API client over HTTP
#[derive(Debug, Clone)]
pub struct HttpBooksApi {
    config: Config,
    client: Client,
}

impl HttpBooksApi {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| status.to_string());
        let message = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(envelope) => envelope.error,
            Err(_) if body.is_empty() => status.to_string(),
            Err(_) => body,
        };
        Err(ApiError::server(status.as_u16(), message))
    }

    async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
        let response = Self::send(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))
    }

    /// Log the `{result}` body of a 2xx reply
    ///
    /// The status alone confirms the action, so a missing or odd body is
    /// only noted.
    async fn log_action_result(response: Response, action: &str) {
        match response.json::<ActionResult>().await {
            Ok(result) => tracing::debug!("Server replied to {}: {}", action, result.result),
            Err(e) => tracing::debug!("Server confirmed {} without a result body: {}", action, e),
        }
    }
}

impl BooksApi for HttpBooksApi {
    async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        Self::send_json(self.client.get(self.config.books_url())).await
    }

    async fn add_book(&self, book: &NewBook) -> Result<Book, ApiError> {
        Self::send_json(self.client.post(self.config.books_url()).json(book)).await
    }

    async fn delete_book(&self, id: &RecordId) -> Result<(), ApiError> {
        let response = Self::send(self.client.delete(self.config.book_url(id)?)).await?;
        Self::log_action_result(response, &format!("delete of {}", id)).await;
        Ok(())
    }

    async fn get_book(&self, id: &RecordId) -> Result<Book, ApiError> {
        Self::send_json(self.client.get(self.config.book_url(id)?)).await
    }

    async fn add_comment(&self, id: &RecordId, text: &str) -> Result<Book, ApiError> {
        let body = NewComment {
            comment: text.to_string(),
        };
        Self::send_json(self.client.post(self.config.book_url(id)?).json(&body)).await
    }

    async fn delete_all_books(&self) -> Result<(), ApiError> {
        let response = Self::send(self.client.delete(self.config.books_url())).await?;
        Self::log_action_result(response, "delete-all").await;
        Ok(())
    }
}
