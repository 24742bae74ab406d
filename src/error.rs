use thiserror::Error;

/// Errors produced by the analysis pipeline.
///
/// A metadata lookup that comes back with a non-200 status is not an error;
/// it is recorded as [`crate::types::MetadataRecord::NotFound`] instead.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure talking to the metadata API, or an undecodable body
    #[error("metadata request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// No baseline (or no data) is known for the requested project
    #[error("unknown project '{0}': no baseline coverage configured")]
    UnknownProject(String),

    /// The coverage table is empty, so its mean is undefined
    #[error("project '{0}' has no coverage samples")]
    EmptyCoverage(String),

    /// A date column value did not match `DD-MM-YYYY`
    #[error("invalid date '{date}', expected DD-MM-YYYY")]
    InvalidDate {
        date: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A coverage sample is NaN or infinite and cannot be summarized or serialized
    #[error("project '{project}' has a non-finite coverage value on {date}")]
    NonFiniteCoverage { project: String, date: String },

    /// The metadata API base URL cannot have project paths appended
    #[error("invalid API base URL '{0}'")]
    InvalidApiUrl(String),

    /// A `NAME=VALUE` baseline entry could not be parsed
    #[error("invalid baseline '{0}', expected NAME=VALUE")]
    InvalidBaseline(String),

    /// The chart backend failed to draw or encode the image
    #[error("chart rendering failed: {0}")]
    Chart(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
