use std::net::SocketAddr;
use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

pub struct Config {
    /// Directory holding one JSON file per collection.
    pub data_dir: PathBuf,
    pub listen_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let data_dir =
            std::env::var("TEAMBOARD_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        let listen_addr = std::env::var("TEAMBOARD_LISTEN_ADDR")
            .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_addr
            .parse()
            .map_err(|source| ConfigError::InvalidListenAddr {
                value: listen_addr.clone(),
                source,
            })?;

        Ok(Self {
            data_dir: PathBuf::from(data_dir),
            listen_addr,
        })
    }
}
