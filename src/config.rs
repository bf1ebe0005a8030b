use std::{env, path::PathBuf};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Prefix of every API route, e.g. `/rest`. Empty means no prefix.
    pub api_path: String,
    pub upload_dir: PathBuf,
    pub public_url: String,
    pub max_body_bytes: usize,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);
        let api_path = normalize_api_path(&env::var("API_PATH").unwrap_or_else(|_| "/rest".into()));
        let upload_dir = env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("uploads"));
        let public_url = env::var("APP_PUBLIC_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| format!("http://{host}:{port}"));
        let max_body_bytes = env::var("MAX_BODY_BYTES")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(10 * 1024 * 1024);
        Ok(Self {
            port,
            database_url,
            host,
            api_path,
            upload_dir,
            public_url,
            max_body_bytes,
        })
    }

    pub fn productos_path(&self) -> String {
        format!("{}/auth/productos", self.api_path)
    }

    pub fn files_path(&self) -> String {
        format!("{}/files", self.api_path)
    }

    /// Public base URL under which stored images are reachable.
    pub fn files_url(&self) -> String {
        format!("{}{}", self.public_url, self.files_path())
    }
}

pub fn normalize_api_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_path_is_normalized() {
        assert_eq!(normalize_api_path("rest"), "/rest");
        assert_eq!(normalize_api_path("/rest/"), "/rest");
        assert_eq!(normalize_api_path("/api/v1"), "/api/v1");
        assert_eq!(normalize_api_path("/"), "");
        assert_eq!(normalize_api_path(""), "");
    }

    #[test]
    fn derived_paths_follow_api_path() {
        let config = AppConfig {
            database_url: "sqlite::memory:".into(),
            host: "127.0.0.1".into(),
            port: 8080,
            api_path: "/rest".into(),
            upload_dir: PathBuf::from("uploads"),
            public_url: "http://localhost:8080".into(),
            max_body_bytes: 1024,
        };
        assert_eq!(config.productos_path(), "/rest/auth/productos");
        assert_eq!(config.files_path(), "/rest/files");
        assert_eq!(config.files_url(), "http://localhost:8080/rest/files");
    }
}
