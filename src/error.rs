//! Error types for date conversion.

use thiserror::Error;

/// Errors raised while parsing or resolving wire-format date-time text.
///
/// Absence is not an error: operations that accept an optional value return
/// `Ok(None)` for a missing field and reserve these variants for text that is
/// present but unusable.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Text does not match the fixed pattern `yyyy-MM-dd HH:mm <zone>`.
    #[error("malformed date-time text {text:?}")]
    MalformedText {
        /// The offending input text.
        text: String,
        /// Underlying parse failure from the date-time stamp, when one exists.
        #[source]
        source: Option<chrono::ParseError>,
    },

    /// Zone abbreviation or client timezone identifier could not be resolved.
    #[error("unknown timezone {0:?}")]
    UnknownZone(String),
}
