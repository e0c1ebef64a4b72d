use std::net::SocketAddr;
use std::path::PathBuf;

use error_stack::ResultExt;
use kernel::KernelError;

const SERVER_ADDRESS: &str = "SERVER_ADDRESS";
const LOG_DIRECTORY: &str = "LOG_DIRECTORY";

const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_LOG_DIRECTORY: &str = "./logs/";

/// Process level settings, read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub address: SocketAddr,
    pub log_directory: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> error_stack::Result<Self, KernelError> {
        let address = lookup(SERVER_ADDRESS).unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.into());
        let address = address
            .parse::<SocketAddr>()
            .change_context(KernelError::Internal)
            .attach_printable_lazy(|| {
                format!("{} is not a socket address: {}", SERVER_ADDRESS, address)
            })?;
        let log_directory = lookup(LOG_DIRECTORY)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIRECTORY));
        Ok(Self {
            address,
            log_directory,
        })
    }
}
