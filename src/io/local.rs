use crate::io::{verify_relative_address, FetchError, TemplateFetcher};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

// serves templates straight off disk, the way a static file server would
pub struct LocalTemplateFetcher {
    pub root_path: PathBuf,
}

impl LocalTemplateFetcher {
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
        }
    }
}

#[async_trait]
impl TemplateFetcher for LocalTemplateFetcher {
    async fn fetch(&self, address: &str) -> Result<String, FetchError> {
        let Some(path) = verify_relative_address(&self.root_path, address) else {
            return Err(FetchError::Status {
                status: 403,
                address: address.to_string(),
            });
        };

        debug!(path = %path.display(), "reading template");

        match tokio::fs::read_to_string(&path).await {
            Ok(body) => Ok(body),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(FetchError::Status {
                status: 404,
                address: address.to_string(),
            }),
            Err(e) => Err(FetchError::Transport {
                address: address.to_string(),
                message: e.to_string(),
            }),
        }
    }
}
