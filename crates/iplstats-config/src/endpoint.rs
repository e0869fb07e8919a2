use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// TCP endpoint the stats server listens on.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ListenEndpoint {
    /// Host name or address the listener binds to.
    pub host: String,
    /// TCP port the listener binds to.
    pub port: u16,
}

impl ListenEndpoint {
    /// Builds an endpoint from a host and port.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for ListenEndpoint {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "tcp://{}:{}", self.host, self.port)
    }
}

impl FromStr for ListenEndpoint {
    type Err = EndpointParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let url = Url::parse(input)?;
        if url.scheme() != "tcp" {
            return Err(EndpointParseError::UnsupportedScheme(
                url.scheme().to_string(),
            ));
        }
        let host = url
            .host_str()
            .ok_or_else(|| EndpointParseError::MissingHost(input.to_string()))?;
        let port = url
            .port()
            .ok_or_else(|| EndpointParseError::MissingPort(input.to_string()))?;
        Ok(Self::new(host, port))
    }
}

/// Errors encountered while parsing a [`ListenEndpoint`] from text.
#[derive(Debug, Error)]
pub enum EndpointParseError {
    /// Scheme was not `tcp`.
    #[error("unsupported endpoint scheme '{0}'")]
    UnsupportedScheme(String),
    /// Host name was missing.
    #[error("missing host in '{0}'")]
    MissingHost(String),
    /// Port was missing from the address.
    #[error("missing port in '{0}'")]
    MissingPort(String),
    /// URL failed to parse.
    #[error(transparent)]
    Url(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn parses_tcp_endpoint() {
        let endpoint: ListenEndpoint = "tcp://0.0.0.0:9000".parse().expect("parse endpoint");
        assert_eq!(endpoint, ListenEndpoint::new("0.0.0.0", 9000));
    }

    #[test]
    fn display_round_trips() {
        let endpoint = ListenEndpoint::new("127.0.0.1", 12345);
        let parsed: ListenEndpoint = endpoint.to_string().parse().expect("parse display output");
        assert_eq!(parsed, endpoint);
    }

    #[rstest]
    #[case::scheme("unix:///tmp/stats.sock")]
    #[case::missing_port("tcp://127.0.0.1")]
    #[case::not_a_url("12345")]
    fn rejects_invalid_endpoints(#[case] input: &str) {
        assert!(input.parse::<ListenEndpoint>().is_err());
    }
}
