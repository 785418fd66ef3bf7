use std::net::AddrParseError;

use thiserror::Error;

/// Configuration errors raised while reading the environment at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configured listen address is not a valid socket address.
    #[error("invalid listen address '{value}': {source}")]
    InvalidListenAddr {
        /// The value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: AddrParseError,
    },
}
