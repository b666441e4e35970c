//! Error adapter for converting MinistreamError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI. Feed and
//! reconciliation errors carry help text pointing at the snapshot payload;
//! the other variants report with a stable code only.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use ministream::MinistreamError;

/// Adapter wrapping a [`MinistreamError`] for rich CLI reporting.
pub struct ErrorAdapter<'a>(pub &'a MinistreamError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            MinistreamError::Io(_) => "ministream::io",
            MinistreamError::Feed(_) => "ministream::feed",
            MinistreamError::Reconcile(_) => "ministream::reconcile",
            MinistreamError::Graph(_) => "ministream::graph",
            MinistreamError::Export(_) => "ministream::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help: &str = match &self.0 {
            MinistreamError::Feed(_) => {
                "check that the snapshot file exists and contains valid topology JSON"
            }
            MinistreamError::Reconcile(_) => {
                "check that every client connectedTo references the hub or a listed edge node \
                 and that identities are unique"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
