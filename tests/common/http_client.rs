//! HTTP client helpers for tests.

use std::time::Duration;

use serde_json::Value;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct TestClient {
    client: reqwest::Client,
    base_url: String,
}

impl TestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn status(&self) -> Result<(u16, Value), reqwest::Error> {
        let resp = self.client.get(self.url("/")).send().await?;
        let status = resp.status().as_u16();
        Ok((status, resp.json().await?))
    }

    pub async fn predict(&self, body: &Value) -> Result<(u16, Value), reqwest::Error> {
        self.predict_raw(body.to_string()).await
    }

    pub async fn predict_raw(&self, body: impl Into<String>) -> Result<(u16, Value), reqwest::Error> {
        self.predict_as("application/json", body).await
    }

    pub async fn predict_as(
        &self,
        content_type: &str,
        body: impl Into<String>,
    ) -> Result<(u16, Value), reqwest::Error> {
        let resp = self
            .client
            .post(self.url("/predict_similarity"))
            .header("Content-Type", content_type)
            .body(body.into())
            .send()
            .await?;
        let status = resp.status().as_u16();
        Ok((status, resp.json().await?))
    }
}

/// Extracts the `"similarity score"` field of a success body.
pub fn score_of(body: &Value) -> f64 {
    body["similarity score"]
        .as_f64()
        .expect("response should carry a numeric similarity score")
}
