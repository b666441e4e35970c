//! Error types for the feed layer.
//!
//! A [`FeedError`] covers everything that can go wrong while obtaining a
//! payload from the network API and turning it into a typed model. Failures
//! here are distinct from the reconciler's own error kinds: a feed error
//! means no snapshot value was produced at all.

use std::io;

use thiserror::Error;

/// Error type for snapshot and device-feed acquisition.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let feed_err = FeedError::from(err);

        assert!(feed_err.to_string().starts_with("malformed payload:"));
    }

    #[test]
    fn test_io_error_display() {
        let err = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let feed_err = FeedError::from(err);

        assert!(feed_err.to_string().contains("no such file"));
    }
}
