use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::types::TaskApi;
use crate::config::ClientConfig;
use crate::envelope::Envelope;
use crate::error::SyncError;
use crate::task::{Task, TaskId, TaskInput, TaskStatus};

pub struct HttpTaskApi {
    base_url: Url,
    client: Client,
}

impl HttpTaskApi {
    pub fn new(cfg: &ClientConfig) -> Result<Self, SyncError> {
        let base_url = Url::parse(cfg.base_url.trim())
            .map_err(|err| SyncError::InvalidBaseUrl(format!("{}: {}", cfg.base_url, err)))?;
        if base_url.cannot_be_a_base() {
            return Err(SyncError::InvalidBaseUrl(cfg.base_url.clone()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = cfg.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| SyncError::Transport(err.to_string()))?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, id: Option<&TaskId>) -> Result<Url, SyncError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| SyncError::InvalidBaseUrl(self.base_url.to_string()))?;
            segments.pop_if_empty().push("tasks");
            if let Some(id) = id {
                segments.push(id.as_str());
            }
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!("{} {}", method, url);
        self.client.request(method, url)
    }
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn list(&self, status: Option<TaskStatus>) -> Result<Vec<Task>, SyncError> {
        let mut req = self.request(Method::GET, self.endpoint(None)?);
        if let Some(status) = status {
            req = req.query(&[("status", status.slug())]);
        }
        read_envelope::<Vec<Task>>(req.send().await?).await?.into_result()
    }

    async fn get(&self, id: &TaskId) -> Result<Task, SyncError> {
        let req = self.request(Method::GET, self.endpoint(Some(id))?);
        read_envelope::<Task>(req.send().await?).await?.into_result()
    }

    async fn create(&self, input: &TaskInput) -> Result<Task, SyncError> {
        let req = self.request(Method::POST, self.endpoint(None)?).json(input);
        read_envelope::<Task>(req.send().await?).await?.into_result()
    }

    async fn update(&self, id: &TaskId, input: &TaskInput) -> Result<Task, SyncError> {
        let req = self.request(Method::PUT, self.endpoint(Some(id))?).json(input);
        read_envelope::<Task>(req.send().await?).await?.into_result()
    }

    async fn delete(&self, id: &TaskId) -> Result<(), SyncError> {
        let req = self.request(Method::DELETE, self.endpoint(Some(id))?);
        read_envelope::<Value>(req.send().await?).await?.into_ack()
    }
}

/// Services answer failures with a non-2xx status and a failure envelope,
/// so the body is parsed regardless of status.
async fn read_envelope<T: DeserializeOwned>(resp: Response) -> Result<Envelope<T>, SyncError> {
    let status = resp.status();
    let body = resp.text().await?;
    match serde_json::from_str::<Envelope<T>>(&body) {
        Ok(envelope) => Ok(envelope),
        Err(_) if !status.is_success() => Err(SyncError::Decode(format!(
            "http {}: {}",
            status.as_u16(),
            body
        ))),
        Err(err) => Err(SyncError::Decode(err.to_string())),
    }
}
