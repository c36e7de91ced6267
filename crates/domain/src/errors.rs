use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum Error {
    /// The model answered, but not with parseable JSON.
    #[error("Failed to parse JSON response")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("{message}")]
    Upstream {
        message: String,
        #[source]
        source: Option<BoxError>,
    },
}

impl Error {
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
            source: None,
        }
    }

    /// Upstream failure that keeps `source` in the error chain.
    pub fn upstream_from<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Upstream {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn upstream_from_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = Error::upstream_from(io);

        assert_eq!(err.to_string(), "refused");
        let source = err.source().expect("source kept");
        assert_eq!(source.to_string(), "refused");
    }

    #[test]
    fn plain_upstream_has_no_source() {
        assert!(Error::upstream("rate limited").source().is_none());
    }
}
