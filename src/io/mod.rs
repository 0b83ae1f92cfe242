use async_trait::async_trait;
use derive_more::derive::{Display, Error};
use std::path::{Component, Path, PathBuf};

pub mod http;
pub mod local;

pub use self::http::HttpTemplateFetcher;
pub use self::local::LocalTemplateFetcher;

/// The single failure the routing path knows about. Every variant carries the
/// address that failed so the error panel can show it.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum FetchError {
    #[display("HTTP {status} while fetching {address}")]
    Status { status: u16, address: String },
    #[display("network error while fetching {address}: {message}")]
    Transport { address: String, message: String },
}

impl FetchError {
    pub fn address(&self) -> &str {
        match self {
            FetchError::Status { address, .. } | FetchError::Transport { address, .. } => address,
        }
    }

    // None for transport failures, they never got a status
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            FetchError::Transport { .. } => None,
        }
    }
}

// the transport boundary: hand back the raw template document for an address
// implementations must bypass any transport-level cache, the store is the cache
#[async_trait]
pub trait TemplateFetcher: Send + Sync {
    async fn fetch(&self, address: &str) -> Result<String, FetchError>;
}

// resolves a template address against a root directory without letting it walk out of the root
// returns None when the address is absolute or climbs above the root
pub fn verify_relative_address(root: &Path, address: &str) -> Option<PathBuf> {
    let mut depth: i64 = 0;
    let mut resolved = PathBuf::from(root);

    for component in Path::new(address).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                depth -= 1;
                if depth < 0 {
                    return None;
                }
                resolved.pop();
            }
            Component::Normal(part) => {
                depth += 1;
                resolved.push(part);
            }
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    Some(resolved)
}
