use std::env;
use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Client as ReqwestClient, Response, header};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{Error, Result};
use crate::observability::{
    CLIENT_REQUEST_DURATION, CLIENT_REQUEST_ERRORS, CLIENT_REQUESTS, CLIENT_UPLOAD_BYTES,
};
use crate::types::{
    ClearSessionResponse, ErrorBody, FileUpload, MessageRequest, MessageResponse, UploadResponse,
};

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/";
const MESSAGE_PATH: &str = "api/message";
const UPLOAD_PATH: &str = "api/upload";
const CLEAR_SESSION_PATH: &str = "api/clear_session";

/// Client for the chat server's HTTP endpoints.
///
/// The client keeps a cookie store, so the session cookie the server hands
/// out on the first request is replayed on every later one.
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: ReqwestClient,
    base_url: Url,
    timeout: Option<Duration>,
}

impl ChatClient {
    /// Create a new chat client.
    ///
    /// The base URL can be provided directly or read from the DOCCHAT_BASE_URL
    /// environment variable; it defaults to a server on localhost.
    pub fn new(base_url: Option<String>) -> Result<Self> {
        Self::with_options(base_url, None)
    }

    /// Create a new client with custom settings.
    ///
    /// A `None` timeout leaves stalled requests to the transport.
    pub fn with_options(base_url: Option<String>, timeout: Option<Duration>) -> Result<Self> {
        let base_url = match base_url {
            Some(url) => url,
            None => env::var("DOCCHAT_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        };
        let base_url = parse_base_url(&base_url)?;

        let mut builder = ReqwestClient::builder()
            .cookie_store(true)
            .default_headers(default_headers());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            Error::http_client(
                format!("Failed to build HTTP client: {}", e),
                Some(Box::new(e)),
            )
        })?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    /// The URL every endpoint is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a path against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    /// Send a chat message and return the server's reply.
    pub async fn send_message(&self, message: &str) -> Result<MessageResponse> {
        let url = self.endpoint(MESSAGE_PATH)?;
        tracing::debug!(%url, len = message.len(), "sending message");
        let request = self
            .client
            .post(url)
            .json(&MessageRequest::new(message));
        let response = self.execute(request).await?;
        parse_json(response).await
    }

    /// Upload a file for server-side parsing.
    ///
    /// The file travels as a multipart form with a single `file` field.
    pub async fn upload(&self, upload: &FileUpload) -> Result<UploadResponse> {
        let url = self.endpoint(UPLOAD_PATH)?;
        tracing::debug!(%url, file = %upload.file_name, bytes = upload.len(), "uploading file");
        let part = Part::stream_with_length(upload.content.clone(), upload.len())
            .file_name(upload.file_name.clone())
            .mime_str(upload.mime_type())
            .map_err(|e| {
                Error::http_client(
                    format!("Failed to build multipart body: {}", e),
                    Some(Box::new(e)),
                )
            })?;
        let form = Form::new().part("file", part);
        let request = self.client.post(url).multipart(form);
        let response = self.execute(request).await?;
        CLIENT_UPLOAD_BYTES.count(upload.len());
        parse_json(response).await
    }

    /// Clear the server-side session.
    pub async fn clear_session(&self) -> Result<ClearSessionResponse> {
        let url = self.endpoint(CLEAR_SESSION_PATH)?;
        tracing::debug!(%url, "clearing session");
        let response = self.execute(self.client.post(url)).await?;
        let body = response.text().await.map_err(|e| {
            Error::http_client(
                format!("Failed to read response: {}", e),
                Some(Box::new(e)),
            )
        })?;
        // The server confirms with a JSON message; anything else still counts as cleared.
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<Response> {
        CLIENT_REQUESTS.click();
        let start = Instant::now();
        let result = request.send().await;
        CLIENT_REQUEST_DURATION.add(start.elapsed().as_secs_f64());

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                CLIENT_REQUEST_ERRORS.click();
                return Err(self.map_transport_error(e));
            }
        };
        if !response.status().is_success() {
            CLIENT_REQUEST_ERRORS.click();
            return Err(process_error_response(response).await);
        }
        Ok(response)
    }

    fn map_transport_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::timeout(
                format!("Request timed out: {}", e),
                self.timeout.map(|t| t.as_secs_f64()),
            )
        } else if e.is_connect() {
            Error::connection(format!("Connection error: {}", e), Some(Box::new(e)))
        } else {
            Error::http_client(format!("Request failed: {}", e), Some(Box::new(e)))
        }
    }
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

fn parse_base_url(base_url: &str) -> Result<Url> {
    // Without a trailing slash `Url::join` would replace the last path segment.
    let normalized = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{base_url}/")
    };
    let url = Url::parse(&normalized)?;
    if url.cannot_be_a_base() {
        return Err(Error::url(
            format!("{base_url} cannot be used as a base URL"),
            None,
        ));
    }
    Ok(url)
}

/// Convert a non-success response into an error, keeping the server's reason when it sent one.
async fn process_error_response(response: Response) -> Error {
    let status_code = response.status().as_u16();

    let error_body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            return Error::http_client(
                format!("Failed to read error response: {}", e),
                Some(Box::new(e)),
            );
        }
    };

    let (message, structured) = match ErrorBody::reason(&error_body) {
        Some(reason) => (reason, true),
        None => (error_body, false),
    };

    match status_code {
        400 => Error::bad_request(message, structured),
        404 => Error::not_found(message, structured),
        500 => Error::internal_server(message, structured),
        _ => Error::api(status_code, message, structured),
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    response.json::<T>().await.map_err(|e| {
        Error::serialization(
            format!("Failed to parse response: {}", e),
            Some(Box::new(e)),
        )
    })
}
