use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::types::{ArchiveListData, ArchiveMetaData, FsGetData, FsListData};

const DEFAULT_BASE_URL: &str = "http://localhost:5244";

// Envelope code the navigation layer treats as "request superseded, not an
// error". The server never emits negative codes itself.
pub const CODE_CANCELLED: i32 = -1;
pub const CODE_AUTH_REQUIRED: i32 = 403;
pub const CODE_ARCHIVE_PASSWORD: i32 = 202;

#[derive(Debug, Error)]
pub enum FsError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    #[error("server returned {status}: {body}")]
    Http { status: StatusCode, body: String },
    #[error("{message}")]
    Api { code: i32, message: String },
    #[error("api response missing data payload")]
    MissingData,
}

impl FsError {
    pub fn code(&self) -> Option<i32> {
        match self {
            FsError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn is_auth_required(&self) -> bool {
        self.code() == Some(CODE_AUTH_REQUIRED)
    }

    pub fn is_cancelled(&self) -> bool {
        self.code().is_some_and(|code| code < 0)
    }

    pub fn cancelled() -> Self {
        FsError::Api {
            code: CODE_CANCELLED,
            message: "request superseded".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
struct ApiResp<T> {
    code: i32,
    #[serde(default)]
    message: String,
    #[serde(default)]
    data: Option<T>,
}

#[derive(Clone)]
pub struct FsClient {
    http: Client,
    base_url: Url,
    token: Option<String>,
}

impl FsClient {
    pub fn new() -> Result<Self, FsError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, FsError> {
        Ok(Self {
            http: Client::new(),
            base_url: Url::parse(base_url)?,
            token: None,
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub async fn fs_get(&self, path: &str, password: &str) -> Result<FsGetData, FsError> {
        self.post_data(
            "/api/fs/get",
            &serde_json::json!({
                "path": path,
                "password": password,
            }),
        )
        .await
    }

    pub async fn fs_list(
        &self,
        path: &str,
        password: &str,
        page: u32,
        per_page: u32,
        refresh: bool,
    ) -> Result<FsListData, FsError> {
        self.post_data(
            "/api/fs/list",
            &serde_json::json!({
                "path": path,
                "password": password,
                "page": page,
                "per_page": per_page,
                "refresh": refresh,
            }),
        )
        .await
    }

    pub async fn fs_archive_meta(
        &self,
        path: &str,
        password: &str,
        archive_password: &str,
        refresh: bool,
    ) -> Result<ArchiveMetaData, FsError> {
        self.post_data(
            "/api/fs/archive/meta",
            &serde_json::json!({
                "path": path,
                "password": password,
                "archive_pass": archive_password,
                "refresh": refresh,
            }),
        )
        .await
    }

    pub async fn fs_archive_list(
        &self,
        path: &str,
        password: &str,
        archive_password: &str,
        inner_path: &str,
        page: u32,
        per_page: u32,
        refresh: bool,
    ) -> Result<ArchiveListData, FsError> {
        self.post_data(
            "/api/fs/archive/list",
            &serde_json::json!({
                "path": path,
                "password": password,
                "archive_pass": archive_password,
                "inner_path": inner_path,
                "page": page,
                "per_page": per_page,
                "refresh": refresh,
            }),
        )
        .await
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, FsError> {
        Ok(self.base_url.join(path)?)
    }

    pub(crate) async fn post_data<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, FsError> {
        let url = self.endpoint(path)?;
        log::debug!("POST {url}");
        let mut request = self.http.post(url).json(body);
        if let Some(token) = &self.token {
            request = request.header("Authorization", token);
        }
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    pub(crate) async fn post_empty(
        &self,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<(), FsError> {
        let url = self.endpoint(path)?;
        self.post_empty_url(url, body).await
    }

    pub(crate) async fn post_empty_url(
        &self,
        url: Url,
        body: Option<&serde_json::Value>,
    ) -> Result<(), FsError> {
        log::debug!("POST {url}");
        let mut request = self.http.post(url);
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(token) = &self.token {
            request = request.header("Authorization", token);
        }
        let response = request.send().await?;
        let envelope = Self::read_envelope::<serde_json::Value>(response).await?;
        Self::check_code(envelope).map(|_| ())
    }

    pub(crate) async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, FsError> {
        let url = self.endpoint(path)?;
        log::debug!("GET {url}");
        let mut request = self.http.get(url);
        if let Some(token) = &self.token {
            request = request.header("Authorization", token);
        }
        let response = request.send().await?;
        let envelope = Self::read_envelope(response).await?;
        Self::check_code(envelope)?.ok_or(FsError::MissingData)
    }

    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, FsError> {
        let envelope = Self::read_envelope(response).await?;
        Self::check_code(envelope)?.ok_or(FsError::MissingData)
    }

    async fn read_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<ApiResp<T>, FsError> {
        if response.status().is_success() {
            Ok(response.json::<ApiResp<T>>().await?)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(FsError::Http { status, body })
        }
    }

    fn check_code<T>(envelope: ApiResp<T>) -> Result<Option<T>, FsError> {
        if envelope.code == 200 {
            Ok(envelope.data)
        } else {
            Err(FsError::Api {
                code: envelope.code,
                message: envelope.message,
            })
        }
    }
}
