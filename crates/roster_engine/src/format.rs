use crate::{FailureKind, FetchError};

/// Error value meant for display to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedError {
    pub status: Option<u16>,
    pub message: String,
}

/// Converts a transport error into something the presentation layer can show.
pub fn format_error(err: &FetchError) -> FormattedError {
    let (status, message) = match &err.kind {
        FailureKind::HttpStatus(code) => (Some(*code), status_message(*code).to_string()),
        FailureKind::Timeout => (None, "The server took too long to respond.".to_string()),
        FailureKind::Network => (None, "Unable to reach the server.".to_string()),
        FailureKind::InvalidUrl => (None, format!("Invalid server address: {}", err.message)),
        FailureKind::TooLarge { .. } => (None, "The server response is too large.".to_string()),
        FailureKind::Decode => (
            None,
            "The server returned an unexpected response.".to_string(),
        ),
    };
    FormattedError { status, message }
}

fn status_message(code: u16) -> &'static str {
    match code {
        400 => "The request was rejected by the server.",
        401 => "You are not authenticated.",
        403 => "You are not allowed to access this resource.",
        404 => "The requested resource was not found.",
        500..=599 => "The server encountered an error.",
        _ => "Unexpected response from the server.",
    }
}
