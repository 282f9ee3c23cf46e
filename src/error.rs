use std::string::FromUtf8Error;

use miette::Diagnostic;
use thiserror::Error;
use tracing_error::SpanTrace;

/// Errors that can occur while building Intacct function requests.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// A required value is missing or a supplied value is out of range.
    ///
    /// The display form is exactly the vendor message, e.g.
    /// `Employee ID is required for create`.
    #[error("{message}")]
    #[diagnostic(
        code(intacct_rs::invalid_argument),
        help("Set the required field before writing the function")
    )]
    InvalidArgument {
        message: String,
        span_trace: SpanTrace,
    },

    #[error("invalid date `{value}`: {source}")]
    #[diagnostic(
        code(intacct_rs::invalid_date),
        help("Dates must be given in ISO format (YYYY-MM-DD)")
    )]
    InvalidDate {
        value: String,
        #[source]
        source: time::error::Parse,
    },

    #[error("error formatting date: {0}")]
    #[diagnostic(code(intacct_rs::date_format_error))]
    DateFormat(#[from] time::error::Format),

    #[error("error writing xml: {0}")]
    #[diagnostic(code(intacct_rs::xml_error))]
    Xml(String),

    #[error("written xml is not valid utf-8: {0}")]
    #[diagnostic(code(intacct_rs::utf8_error))]
    Utf8(#[from] FromUtf8Error),
}

impl Error {
    /// Builds an [`Error::InvalidArgument`], capturing the current span trace.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            span_trace: SpanTrace::capture(),
        }
    }

    /// The vendor message of an invalid argument error.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::InvalidArgument { message, .. } => Some(message),
            _ => None,
        }
    }

    /// The span trace captured when the error was raised, if any.
    #[must_use]
    pub fn span_trace(&self) -> Option<&SpanTrace> {
        match self {
            Self::InvalidArgument { span_trace, .. } => Some(span_trace),
            _ => None,
        }
    }
}

/// Type alias for results from this crate.
///
/// This is already a Miette diagnostic result due to the implementation of
/// the Diagnostic trait for the Error type.
pub type Result<O> = std::result::Result<O, Error>;
