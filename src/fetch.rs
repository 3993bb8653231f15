use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use reqwest::blocking::Client;

/// Result of one retrieval attempt.
///
/// Failures are reported here as values instead of errors: the pipeline
/// logs the outcome and carries on, so nothing escapes this boundary.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The file was downloaded and written to the destination
    Saved { path: PathBuf },
    /// A file already exists at the destination, so no download happened
    SkippedExisting { path: PathBuf },
    /// The server answered with a non-success status
    HttpError(String),
    /// The server could not be reached
    ConnectionError(String),
    /// The request timed out
    TimeoutError(String),
    /// Any other request failure
    RequestError(String),
    /// Writing the downloaded bytes to disk failed
    UnexpectedError(String),
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Saved { .. } | FetchOutcome::SkippedExisting { .. })
    }
}

impl fmt::Display for FetchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchOutcome::Saved { path } => {
                write!(f, "File downloaded successfully and saved to {}", path.display())
            }
            FetchOutcome::SkippedExisting { path } => {
                write!(f, "The file '{}' already exists. No download needed.", path.display())
            }
            FetchOutcome::HttpError(err) => write!(f, "HTTP error occurred: {err}"),
            FetchOutcome::ConnectionError(err) => write!(f, "Connection error occurred: {err}"),
            FetchOutcome::TimeoutError(err) => write!(f, "Timeout error occurred: {err}"),
            FetchOutcome::RequestError(err) => write!(f, "An error occurred: {err}"),
            FetchOutcome::UnexpectedError(err) => write!(f, "An unexpected error occurred: {err}"),
        }
    }
}

/// Downloads `url` to `save_path` unless a file is already there.
///
/// An existing file is taken at face value; its content is not re-validated.
pub fn fetch_source(url: &str, save_path: &Path) -> FetchOutcome {
    if save_path.is_file() {
        return FetchOutcome::SkippedExisting { path: save_path.to_path_buf() };
    }

    let response = match Client::new().get(url).send() {
        Ok(response) => response,
        Err(err) => return classify_request_error(err),
    };
    let response = match response.error_for_status() {
        Ok(response) => response,
        Err(err) => return FetchOutcome::HttpError(err.to_string()),
    };
    let bytes = match response.bytes() {
        Ok(bytes) => bytes,
        Err(err) => return classify_request_error(err),
    };

    match fs::write(save_path, &bytes) {
        Ok(()) => FetchOutcome::Saved { path: save_path.to_path_buf() },
        Err(err) => FetchOutcome::UnexpectedError(err.to_string()),
    }
}

fn classify_request_error(err: reqwest::Error) -> FetchOutcome {
    if err.is_timeout() {
        FetchOutcome::TimeoutError(err.to_string())
    } else if err.is_connect() {
        FetchOutcome::ConnectionError(err.to_string())
    } else if err.is_status() {
        FetchOutcome::HttpError(err.to_string())
    } else {
        FetchOutcome::RequestError(err.to_string())
    }
}
