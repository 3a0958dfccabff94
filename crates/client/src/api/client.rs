use contracts::shared::api_paths;
use contracts::system::session::{Session, SessionStore};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{ApiError, ClientError, ClientResult};
use crate::shared::config::ApiConfig;

/// HTTP-клиент API жилого комплекса.
///
/// The session comes from the store handed in at construction; every request
/// re-reads it, so a login in the same process is picked up immediately.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: Arc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, store: Arc<dyn SessionStore>) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            store,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session_store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    pub(crate) fn url(&self, path: &str) -> String {
        api_paths::join(&self.base_url, path)
    }

    /// Current session, if any. A broken store is logged and treated as
    /// "no session" so the request still goes out.
    fn session(&self) -> Option<Session> {
        match self.store.load() {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("Session unavailable, sending request without token: {}", e);
                None
            }
        }
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session() {
            Some(session) if !session.token.is_empty() => request.bearer_auth(&session.token),
            _ => request,
        }
    }

    /// Sends the request with the bearer token and turns non-2xx answers into
    /// [`ApiError::Status`].
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = self.authorize(request).send().await?;

        let status = response.status();
        tracing::debug!("API response: {} for {}", status, response.url());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let url = response.url().to_string();
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(format!("{}: {}", url, e)))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!("API: GET {}", url);
        let response = self.send(self.http.get(&url)).await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.post(path, body).await?;
        Self::decode(response).await
    }

    /// POST whose response body is not needed.
    pub(crate) async fn post<B>(&self, path: &str, body: &B) -> Result<Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        tracing::debug!("API: POST {}", url);
        self.send(self.http.post(&url).json(body)).await
    }

    pub(crate) async fn put<B>(&self, path: &str, body: &B) -> Result<Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        tracing::debug!("API: PUT {}", url);
        self.send(self.http.put(&url).json(body)).await
    }

    /// PUT without a body; parameters (if any) travel in the query string.
    pub(crate) async fn put_query(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Response, ApiError> {
        let url = self.url(path);
        tracing::debug!("API: PUT {} {:?}", url, query);
        self.send(self.http.put(&url).query(query)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::session::MemorySessionStore;

    fn config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_url_building() {
        let client =
            ApiClient::new(&config("http://localhost:8080/api/"), Arc::new(MemorySessionStore::new()))
                .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api");
        assert_eq!(
            client.url(api_paths::USERS_REGISTER),
            "http://localhost:8080/api/users/register"
        );
    }

    #[test]
    fn test_session_is_read_from_store() {
        let store = Arc::new(MemorySessionStore::new());
        let client = ApiClient::new(&config("http://localhost"), store.clone()).unwrap();
        assert!(client.session().is_none());

        store.save(&Session::new("tok")).unwrap();
        assert_eq!(client.session().map(|s| s.token), Some("tok".to_string()));
    }
}
