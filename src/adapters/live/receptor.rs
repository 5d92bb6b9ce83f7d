//! Blocking client for the Lattice receptor HTTP API.

use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::Deserialize;
use tokio::runtime::Runtime;

use crate::config::LatticeConfig;
use crate::ports::task_examiner::TaskInfo;

/// Errors talking to the receptor.
#[derive(Debug, thiserror::Error)]
pub enum ReceptorError {
    /// No cluster target has been configured.
    #[error("lattice target is not set")]
    NoTarget,
    /// The configured target does not form a valid URL.
    #[error("invalid receptor url {url}: {reason}")]
    InvalidUrl {
        /// The URL that failed to parse.
        url: String,
        /// Parser message.
        reason: String,
    },
    /// The requested task does not exist.
    #[error("Task not found.")]
    TaskNotFound,
    /// The receptor answered with an error status.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Receptor error name, e.g. `TaskGuidAlreadyExists`.
        name: String,
        /// Human-readable message.
        message: String,
    },
    /// The request could not be completed.
    #[error("receptor request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The async runtime could not be started.
    #[error("failed to start runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Error body returned by the receptor on failure.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    name: String,
    #[serde(default)]
    message: String,
}

/// Synchronous receptor client.
///
/// Each call drives an async `reqwest` request to completion on a private
/// current-thread runtime, so callers see one blocking request per call.
pub struct ReceptorClient {
    base_url: Option<String>,
    credentials: Option<(String, String)>,
    http: Client,
    runtime: Runtime,
}

impl ReceptorClient {
    /// Creates a client for the configured target.
    ///
    /// No connection is attempted here; a missing target only surfaces when
    /// a request is made.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or the runtime cannot be built.
    pub fn new(config: &LatticeConfig) -> Result<Self, ReceptorError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        let credentials = config
            .credentials()
            .map(|(u, p)| (u.to_string(), p.to_string()));
        Self::with_client(http, config.receptor_url(), credentials)
    }

    fn with_client(
        http: Client,
        base_url: Option<String>,
        credentials: Option<(String, String)>,
    ) -> Result<Self, ReceptorError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self {
            base_url,
            credentials,
            http,
            runtime,
        })
    }

    /// Creates a task from a raw JSON task definition.
    ///
    /// # Errors
    ///
    /// Returns an error if the receptor rejects the task or is unreachable.
    pub fn create_task(&self, payload: &[u8]) -> Result<(), ReceptorError> {
        let url = self.url(&["v1", "tasks"])?;
        let request = self
            .http
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload.to_vec());
        self.send(request)?;
        Ok(())
    }

    /// Fetches a single task.
    ///
    /// # Errors
    ///
    /// Returns [`ReceptorError::TaskNotFound`] for unknown tasks, or another
    /// error if the request fails.
    pub fn get_task(&self, task_guid: &str) -> Result<TaskInfo, ReceptorError> {
        let url = self.url(&["v1", "tasks", task_guid])?;
        let request = self.authorize(self.http.get(url));
        self.runtime.block_on(fetch_task(request))
    }

    /// Deletes a completed task.
    ///
    /// # Errors
    ///
    /// Returns an error if the receptor refuses the deletion or is unreachable.
    pub fn delete_task(&self, task_guid: &str) -> Result<(), ReceptorError> {
        let url = self.url(&["v1", "tasks", task_guid])?;
        let request = self.http.delete(url);
        self.send(request)?;
        Ok(())
    }

    fn send(&self, request: RequestBuilder) -> Result<Response, ReceptorError> {
        self.runtime.block_on(execute(self.authorize(request)))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.credentials {
            Some((username, password)) => request.basic_auth(username, Some(password)),
            None => request,
        }
    }

    /// Builds an endpoint URL, escaping each path segment.
    fn url(&self, segments: &[&str]) -> Result<Url, ReceptorError> {
        let base = self.base_url.as_deref().ok_or(ReceptorError::NoTarget)?;
        let invalid = |reason: String| ReceptorError::InvalidUrl {
            url: base.to_string(),
            reason,
        };

        let mut url = Url::parse(base).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| invalid("cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

async fn execute(request: RequestBuilder) -> Result<Response, ReceptorError> {
    let response = request.send().await?;
    check_status(response).await
}

async fn fetch_task(request: RequestBuilder) -> Result<TaskInfo, ReceptorError> {
    let response = request.send().await?;
    if response.status() == StatusCode::NOT_FOUND {
        return Err(ReceptorError::TaskNotFound);
    }
    let response = check_status(response).await?;
    Ok(response.json::<TaskInfo>().await?)
}

/// Passes successful responses through and decodes error bodies.
async fn check_status(response: Response) -> Result<Response, ReceptorError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let text = response.text().await?;
    Err(api_error(status, &text))
}

fn api_error(status: StatusCode, body: &str) -> ReceptorError {
    let (name, message) = match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.message.is_empty() => (parsed.name, parsed.message),
        _ if body.trim().is_empty() => (String::new(), status.to_string()),
        _ => (String::new(), body.trim().to_string()),
    };
    ReceptorError::Api {
        status: status.as_u16(),
        name,
        message,
    }
}
