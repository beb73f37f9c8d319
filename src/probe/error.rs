use std::io;

use thiserror::Error;

/// Failure to reach a host before any greeting was read. Everything
/// that can go wrong after the connection is established is folded
/// into the probe flags instead.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("connection to {host} timed out")]
    ConnectTimeout { host: String },
    #[error("connection to {host} failed: {source}")]
    Connect {
        host: String,
        #[source]
        source: io::Error,
    },
}

impl ProbeError {
    pub(crate) fn connect_timeout(host: impl Into<String>) -> Self {
        Self::ConnectTimeout { host: host.into() }
    }

    pub(crate) fn connect(host: impl Into<String>, source: io::Error) -> Self {
        Self::Connect {
            host: host.into(),
            source,
        }
    }
}
