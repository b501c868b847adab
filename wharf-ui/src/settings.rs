use serde::Serialize;
use wharf_core::{FsClient, FsError};
use wharf_nav::{NavConfig, Pagination, PaginationKind};

const DEFAULT_SERVER_URL: &str = "http://localhost:5244";
const DEFAULT_BASE_PATH: &str = "/";
const DEFAULT_PAGINATION: &str = "pagination";
const DEFAULT_PAGE_SIZE: u32 = 50;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Settings {
    pub server_url: String,
    pub base_path: String,
    pub password: String,
    pub token: Option<String>,
    pub pagination_kind: String,
    pub page_size: u32,
}

pub fn read_settings() -> Settings {
    let pagination_kind = std::env::var("WHARF_PAGINATION")
        .unwrap_or_else(|_| DEFAULT_PAGINATION.to_string());
    if PaginationKind::parse(&pagination_kind).is_none() {
        log::warn!("unknown WHARF_PAGINATION value: {pagination_kind}, using {DEFAULT_PAGINATION}");
    }
    Settings {
        server_url: std::env::var("WHARF_SERVER_URL")
            .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string()),
        base_path: std::env::var("WHARF_BASE_PATH")
            .unwrap_or_else(|_| DEFAULT_BASE_PATH.to_string()),
        password: std::env::var("WHARF_PASSWORD").unwrap_or_default(),
        token: std::env::var("WHARF_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty()),
        pagination_kind,
        page_size: read_u32_env("WHARF_PAGE_SIZE", DEFAULT_PAGE_SIZE),
    }
}

impl Settings {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            kind: PaginationKind::parse(&self.pagination_kind).unwrap_or_default(),
            page_size: self.page_size,
        }
    }

    pub fn nav_config(&self) -> NavConfig {
        NavConfig {
            base_path: self.base_path.clone(),
            pagination: self.pagination(),
            password: self.password.clone(),
        }
    }

    pub fn client(&self) -> Result<FsClient, FsError> {
        let client = FsClient::with_base_url(&self.server_url)?;
        Ok(match &self.token {
            Some(token) => client.with_token(token.clone()),
            None => client,
        })
    }
}

fn read_u32_env(name: &str, default: u32) -> u32 {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse::<u32>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_parser_falls_back_to_defaults() {
        assert_eq!(read_u32_env("WHARF_DOES_NOT_EXIST_123", 50), 50);
    }

    #[test]
    fn pagination_falls_back_on_unknown_kinds() {
        let settings = Settings {
            server_url: DEFAULT_SERVER_URL.to_string(),
            base_path: DEFAULT_BASE_PATH.to_string(),
            password: String::new(),
            token: None,
            pagination_kind: "bogus".to_string(),
            page_size: 25,
        };
        let pagination = settings.pagination();
        assert_eq!(pagination.kind, PaginationKind::Pagination);
        assert_eq!(pagination.page_size, 25);
    }
}
