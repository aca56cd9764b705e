use crate::errors::ClientError;
use crate::models::{DetailBody, Directory, MessageBody};
use reqwest::{Method, Response};
use urlencoding::encode;

/// Thin wrapper over the activities API. Owns no state between calls;
/// every read is a full re-fetch.
#[derive(Clone)]
pub struct DirectoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl DirectoryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /activities`. No retries, no caching.
    pub async fn fetch_directory(&self) -> Result<Directory, ClientError> {
        let url = format!("{}/activities", self.base_url);
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::rejected(status, read_detail(response).await));
        }
        Ok(response.json().await?)
    }

    /// `POST /activities/{name}/signup?email={email}`. Returns the server's
    /// confirmation message.
    pub async fn signup(&self, activity: &str, email: &str) -> Result<String, ClientError> {
        self.mutate(Method::POST, activity, "signup", email).await
    }

    /// `DELETE /activities/{name}/unregister?email={email}`.
    pub async fn unregister(&self, activity: &str, email: &str) -> Result<String, ClientError> {
        self.mutate(Method::DELETE, activity, "unregister", email)
            .await
    }

    async fn mutate(
        &self,
        method: Method,
        activity: &str,
        action: &str,
        email: &str,
    ) -> Result<String, ClientError> {
        let url = format!(
            "{}/activities/{}/{}?email={}",
            self.base_url,
            encode(activity),
            action,
            encode(email),
        );
        let response = self.http.request(method, url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::rejected(status, read_detail(response).await));
        }
        let body: MessageBody = response.json().await?;
        Ok(body.message)
    }
}

/// Pull a structured `{detail}` out of a rejection body, if the server
/// sent one; a malformed body is not itself an error here.
async fn read_detail(response: Response) -> Option<String> {
    response
        .json::<DetailBody>()
        .await
        .ok()
        .map(|body| body.detail)
}
